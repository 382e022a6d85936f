use thiserror::Error;

use crate::shared::image_source::{ImageSource, SourceError};

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("camera access denied")]
    PermissionDenied,
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("failed to capture frame: {0}")]
    Frame(String),
    #[error(transparent)]
    Encode(#[from] SourceError),
}

/// A live video device that can hand out single still frames.
///
/// `open` acquires the stream, `release` stops it. `release` must be safe to
/// call when nothing is held.
pub trait CameraDevice: Send {
    fn open(&mut self) -> Result<(), CaptureError>;
    fn capture(&mut self) -> Result<ImageSource, CaptureError>;
    fn release(&mut self);
}
