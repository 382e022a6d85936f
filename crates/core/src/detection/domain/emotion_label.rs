use std::fmt;

use serde::{Serialize, Serializer};

use crate::shared::color::Color;

/// Canonical emotion categories used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Happy,
    Neutral,
    Surprised,
    Sad,
    Angry,
    Disgust,
    Fear,
}

/// Raw detector labels with a dedicated category. Matching is case-sensitive.
const LABEL_TABLE: &[(&str, EmotionLabel)] = &[
    ("happy", EmotionLabel::Happy),
    ("surprise", EmotionLabel::Surprised),
    ("sad", EmotionLabel::Sad),
    ("angry", EmotionLabel::Angry),
    ("disgust", EmotionLabel::Disgust),
    ("fear", EmotionLabel::Fear),
];

impl EmotionLabel {
    pub const ALL: &[EmotionLabel] = &[
        EmotionLabel::Happy,
        EmotionLabel::Neutral,
        EmotionLabel::Surprised,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
    ];

    /// Color used for anything that has no emotion-specific color.
    pub const FALLBACK_COLOR: Color = Color::GRAY;

    /// Maps a raw detector label. Unknown or missing labels are `Neutral`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        raw.and_then(|name| {
            LABEL_TABLE
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, label)| *label)
        })
        .unwrap_or(EmotionLabel::Neutral)
    }

    pub fn color(self) -> Color {
        match self {
            EmotionLabel::Happy => Color::GREEN,
            EmotionLabel::Surprised => Color::PURPLE,
            EmotionLabel::Sad => Color::RED,
            EmotionLabel::Angry => Color::YELLOW,
            EmotionLabel::Disgust => Color::ORANGE,
            EmotionLabel::Fear => Color::DARK_GRAY,
            EmotionLabel::Neutral => Self::FALLBACK_COLOR,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Neutral => "Neutral",
            EmotionLabel::Surprised => "Surprised",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Fear => "Fear",
        };
        f.write_str(name)
    }
}

impl Serialize for EmotionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("happy", EmotionLabel::Happy)]
    #[case("surprise", EmotionLabel::Surprised)]
    #[case("sad", EmotionLabel::Sad)]
    #[case("angry", EmotionLabel::Angry)]
    #[case("disgust", EmotionLabel::Disgust)]
    #[case("fear", EmotionLabel::Fear)]
    fn test_known_labels(#[case] raw: &str, #[case] expected: EmotionLabel) {
        assert_eq!(EmotionLabel::from_raw(Some(raw)), expected);
    }

    #[rstest]
    #[case("excited")]
    #[case("neutral")]
    #[case("Happy")]
    #[case("HAPPY")]
    #[case("surprised")]
    #[case(" happy")]
    #[case("")]
    fn test_unrecognized_labels_fall_back_to_neutral(#[case] raw: &str) {
        assert_eq!(EmotionLabel::from_raw(Some(raw)), EmotionLabel::Neutral);
    }

    #[test]
    fn test_absent_label_is_neutral() {
        assert_eq!(EmotionLabel::from_raw(None), EmotionLabel::Neutral);
    }

    #[test]
    fn test_every_label_has_a_distinct_color() {
        let colors: HashSet<_> = EmotionLabel::ALL.iter().map(|l| l.color()).collect();
        assert_eq!(colors.len(), EmotionLabel::ALL.len());
    }

    #[test]
    fn test_neutral_uses_fallback_color() {
        assert_eq!(EmotionLabel::Neutral.color(), EmotionLabel::FALLBACK_COLOR);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(EmotionLabel::Surprised.to_string(), "Surprised");
        assert_eq!(
            serde_json::to_string(&EmotionLabel::Happy).unwrap(),
            "\"Happy\""
        );
    }
}
