use crate::detection::domain::result_normalizer::AnnotatedResult;
use crate::shared::color::Color;

const FILLED: char = '█';
const EMPTY: char = '░';

/// One line of the list view: label, proportional bar, percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub color: Color,
    pub percentage: String,
    pub filled: usize,
    pub width: usize,
}

impl ResultRow {
    pub fn bar(&self) -> String {
        let mut bar = String::with_capacity(self.width * 3);
        bar.extend(std::iter::repeat(FILLED).take(self.filled));
        bar.extend(std::iter::repeat(EMPTY).take(self.width - self.filled));
        bar
    }
}

/// Reads a formatted percentage (`"87.34%"`) back as a fraction of one.
///
/// Unparseable text gives an empty bar rather than an error.
pub fn bar_fraction(percentage: &str) -> f64 {
    percentage
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (v / 100.0).clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

/// Every result in detector order, boxed or not.
pub fn build_rows(results: &[AnnotatedResult], width: usize) -> Vec<ResultRow> {
    results
        .iter()
        .map(|r| ResultRow {
            label: r.emotion.to_string(),
            color: r.color,
            percentage: r.percentage.clone(),
            filled: (bar_fraction(&r.percentage) * width as f64).round() as usize,
            width,
        })
        .collect()
}

/// Plain-text list view, one row per line.
pub fn render_text(results: &[AnnotatedResult], width: usize) -> String {
    let rows = build_rows(results, width);
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|r| {
            format!(
                "{:<label_width$}  {}  {:>7}",
                r.label,
                r.bar(),
                r.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
