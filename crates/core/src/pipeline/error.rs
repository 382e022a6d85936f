use thiserror::Error;

use crate::capture::domain::camera_device::CaptureError;
use crate::detection::domain::detection_request::MissingInputError;
use crate::detection::domain::emotion_detector::DetectionError;

pub const MISSING_INPUT_MESSAGE: &str = "Please upload or take a picture first.";
pub const DETECTION_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";
pub const CAMERA_ACCESS_MESSAGE: &str = "Failed to access camera. Please check your permissions.";

/// Failures a user can see. None of them end the session.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no image to analyze")]
    MissingInput,
    #[error("detection failed: {0}")]
    DetectionFailed(#[source] DetectionError),
    #[error("camera access failed: {0}")]
    CameraAccess(#[source] CaptureError),
}

impl PipelineError {
    /// The single message shown to the user; causes stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::MissingInput => MISSING_INPUT_MESSAGE,
            PipelineError::DetectionFailed(_) => DETECTION_FAILED_MESSAGE,
            PipelineError::CameraAccess(_) => CAMERA_ACCESS_MESSAGE,
        }
    }
}

impl From<MissingInputError> for PipelineError {
    fn from(_: MissingInputError) -> Self {
        PipelineError::MissingInput
    }
}

impl From<DetectionError> for PipelineError {
    fn from(err: DetectionError) -> Self {
        PipelineError::DetectionFailed(err)
    }
}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::CameraAccess(err)
    }
}
