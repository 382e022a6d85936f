use serde::Serialize;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::emotion_label::EmotionLabel;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::color::Color;

/// A detection after mapping to the display taxonomy.
///
/// `percentage` is the only confidence value kept: it is both the label text
/// and the source of the confidence bar's width.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedResult {
    pub emotion: EmotionLabel,
    pub color: Color,
    pub percentage: String,
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl AnnotatedResult {
    pub fn from_detection(detection: &Detection) -> Self {
        let emotion = EmotionLabel::from_raw(detection.name.as_deref());
        Self {
            emotion,
            color: emotion.color(),
            percentage: format_percentage(detection.confidence),
            bbox: detection.bbox,
        }
    }

    /// Overlay caption, e.g. `Happy (75.00%)`.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.emotion, self.percentage)
    }
}

/// Formats a `[0, 1]` confidence as a percentage with two decimals.
///
/// Out-of-range values are clamped; non-finite values read as zero.
pub fn format_percentage(confidence: f64) -> String {
    let c = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{:.2}%", c * 100.0)
}

/// Maps detections one-to-one, preserving the detector's order.
pub fn normalize(detections: &[Detection]) -> Vec<AnnotatedResult> {
    detections.iter().map(AnnotatedResult::from_detection).collect()
}
