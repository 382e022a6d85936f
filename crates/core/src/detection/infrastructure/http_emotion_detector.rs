use crate::detection::domain::detection::{Detection, DetectionResponse};
use crate::detection::domain::detection_request::DetectionRequest;
use crate::detection::domain::emotion_detector::{DetectionError, EmotionDetector};
use crate::shared::constants::PREDICT_PATH;

/// Sends images to a remote `POST /predict/` service.
///
/// One blocking request per call: no retry, no client timeout, no
/// cancellation once sent.
pub struct HttpEmotionDetector {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpEmotionDetector {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// Probes `GET /`; succeeds when the service answers with a 2xx status.
    pub fn health(&self) -> Result<(), DetectionError> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DetectionError::Transport {
                url: url.clone(),
                source: e,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(DetectionError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl EmotionDetector for HttpEmotionDetector {
    fn detect(&mut self, request: DetectionRequest) -> Result<Vec<Detection>, DetectionError> {
        let url = self.predict_url();
        let transport = |e: reqwest::Error| DetectionError::Transport {
            url: url.clone(),
            source: e,
        };

        let bytes = request.bytes().len();
        let form = request.into_form().map_err(transport)?;
        log::debug!("POST {url} ({bytes} bytes)");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectionError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        let parsed: DetectionResponse =
            serde_json::from_str(&body).map_err(|e| DetectionError::Malformed(e.to_string()))?;
        log::debug!("Detector returned {} detections", parsed.detections.len());
        Ok(parsed.detections)
    }
}
