use std::thread;
use std::time::Duration;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::detection_request::DetectionRequest;
use crate::detection::domain::emotion_detector::{DetectionError, EmotionDetector};

/// Offline stand-in that answers every request with fixed detections.
///
/// Sleeps for `delay` first so callers see a realistic loading period.
pub struct SimulatedEmotionDetector {
    delay: Duration,
    detections: Vec<Detection>,
}

impl SimulatedEmotionDetector {
    pub fn new(delay: Duration) -> Self {
        Self::with_detections(delay, default_detections())
    }

    pub fn with_detections(delay: Duration, detections: Vec<Detection>) -> Self {
        Self { delay, detections }
    }
}

fn default_detections() -> Vec<Detection> {
    vec![
        Detection::new("happy", 0.75),
        Detection::new("neutral", 0.15),
        Detection::new("surprise", 0.10),
    ]
}

impl EmotionDetector for SimulatedEmotionDetector {
    fn detect(&mut self, request: DetectionRequest) -> Result<Vec<Detection>, DetectionError> {
        log::debug!(
            "Simulating detection for {} bytes after {:?}",
            request.bytes().len(),
            self.delay
        );
        thread::sleep(self.delay);
        Ok(self.detections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::emotion_label::EmotionLabel;
    use crate::detection::domain::result_normalizer::normalize;
    use crate::shared::image_source::{ImageOrigin, ImageSource};
    use std::time::Instant;

    fn request() -> DetectionRequest {
        let img = ImageSource::new(vec![1, 2, 3], ImageOrigin::Camera);
        DetectionRequest::build(Some(&img)).unwrap()
    }

    #[test]
    fn test_default_results() {
        let mut detector = SimulatedEmotionDetector::new(Duration::ZERO);
        let results = normalize(&detector.detect(request()).unwrap());

        let summary: Vec<_> = results
            .iter()
            .map(|r| (r.emotion, r.percentage.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (EmotionLabel::Happy, "75.00%"),
                (EmotionLabel::Neutral, "15.00%"),
                (EmotionLabel::Surprised, "10.00%"),
            ]
        );
        assert!(results.iter().all(|r| r.bbox.is_none()));
    }

    #[test]
    fn test_waits_for_delay() {
        let mut detector = SimulatedEmotionDetector::new(Duration::from_millis(30));
        let start = Instant::now();
        detector.detect(request()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_custom_detections_are_repeated() {
        let mut detector = SimulatedEmotionDetector::with_detections(
            Duration::ZERO,
            vec![Detection::new("angry", 0.9)],
        );
        assert_eq!(detector.detect(request()).unwrap().len(), 1);
        assert_eq!(detector.detect(request()).unwrap().len(), 1);
    }
}
