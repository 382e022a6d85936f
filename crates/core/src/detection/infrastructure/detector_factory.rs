use std::time::Duration;

use crate::detection::domain::emotion_detector::EmotionDetector;
use crate::shared::settings::{DetectorBackend, Settings};

use super::http_emotion_detector::HttpEmotionDetector;
use super::simulated_emotion_detector::SimulatedEmotionDetector;

/// Creates the detector selected by configuration.
pub fn create_detector(settings: &Settings) -> Box<dyn EmotionDetector> {
    match settings.backend {
        DetectorBackend::Http => {
            let base_url = settings.base_url();
            log::info!("Using HTTP detector at {base_url} (profile: {})", settings.profile);
            Box::new(HttpEmotionDetector::new(base_url))
        }
        DetectorBackend::Simulated => {
            log::info!(
                "Using simulated detector ({} ms delay)",
                settings.simulated_delay_ms
            );
            Box::new(SimulatedEmotionDetector::new(Duration::from_millis(
                settings.simulated_delay_ms,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection_request::DetectionRequest;
    use crate::shared::image_source::{ImageOrigin, ImageSource};

    fn request() -> DetectionRequest {
        let img = ImageSource::new(vec![1, 2, 3], ImageOrigin::Camera);
        DetectionRequest::build(Some(&img)).unwrap()
    }

    #[test]
    fn test_simulated_backend_answers_without_network() {
        let settings = Settings {
            backend: DetectorBackend::Simulated,
            simulated_delay_ms: 0,
            endpoint: Some("http://127.0.0.1:1".into()),
            ..Settings::default()
        };
        let mut detector = create_detector(&settings);
        assert_eq!(detector.detect(request()).unwrap().len(), 3);
    }

    #[test]
    fn test_http_backend_uses_configured_endpoint() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/predict/")
            .with_status(200)
            .with_body(r#"{"detections":[]}"#)
            .create();

        let settings = Settings {
            backend: DetectorBackend::Http,
            endpoint: Some(server.url()),
            ..Settings::default()
        };
        let mut detector = create_detector(&settings);
        assert!(detector.detect(request()).unwrap().is_empty());
        mock.assert();
    }
}
