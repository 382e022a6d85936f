use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use crate::capture::domain::camera_device::{CameraDevice, CaptureError};
use crate::shared::image_source::ImageSource;

/// Native webcam backed by `nokhwa`.
///
/// The device is opened lazily in [`CameraDevice::open`] and fully dropped
/// on release, which stops the stream.
pub struct NokhwaCamera {
    index: u32,
    camera: Option<Camera>,
}

// Safety: the camera handle is only touched from the thread that owns the
// `NokhwaCamera`; it is never shared.
unsafe impl Send for NokhwaCamera {}

impl NokhwaCamera {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            camera: None,
        }
    }
}

fn map_open_error(err: nokhwa::NokhwaError) -> CaptureError {
    let message = err.to_string();
    if message.to_lowercase().contains("permission") {
        CaptureError::PermissionDenied
    } else {
        CaptureError::Unavailable(message)
    }
}

impl CameraDevice for NokhwaCamera {
    fn open(&mut self) -> Result<(), CaptureError> {
        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let mut camera =
            Camera::new(CameraIndex::Index(self.index), format).map_err(map_open_error)?;
        camera.open_stream().map_err(map_open_error)?;
        log::info!("Opened camera {}: {}", self.index, camera.info().human_name());
        self.camera = Some(camera);
        Ok(())
    }

    fn capture(&mut self) -> Result<ImageSource, CaptureError> {
        let camera = self
            .camera
            .as_mut()
            .ok_or_else(|| CaptureError::Unavailable("camera stream is not open".into()))?;
        let buffer = camera
            .frame()
            .and_then(|frame| frame.decode_image::<RgbFormat>())
            .map_err(|e| CaptureError::Frame(e.to_string()))?;
        let (width, height) = (buffer.width(), buffer.height());
        Ok(ImageSource::from_rgb_frame(buffer.into_raw(), width, height)?)
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_stream() {
                log::warn!("Failed to stop camera stream: {e}");
            }
        }
    }
}
