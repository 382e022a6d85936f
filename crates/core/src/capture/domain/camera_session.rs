use crate::capture::domain::camera_device::{CameraDevice, CaptureError};
use crate::shared::image_source::ImageSource;

/// Scoped hold on an open camera stream.
///
/// The stream is released when the session is dropped, on every exit path,
/// so the device's activity indicator never outlives the session.
pub struct CameraSession<'a> {
    device: &'a mut dyn CameraDevice,
}

impl<'a> CameraSession<'a> {
    pub fn open(device: &'a mut dyn CameraDevice) -> Result<Self, CaptureError> {
        if let Err(e) = device.open() {
            device.release();
            return Err(e);
        }
        log::debug!("Camera stream acquired");
        Ok(Self { device })
    }

    pub fn capture(&mut self) -> Result<ImageSource, CaptureError> {
        self.device.capture()
    }
}

impl Drop for CameraSession<'_> {
    fn drop(&mut self) {
        self.device.release();
        log::debug!("Camera stream released");
    }
}

/// Opens the camera, grabs one frame, and releases the stream.
pub fn capture_still(device: &mut dyn CameraDevice) -> Result<ImageSource, CaptureError> {
    let mut session = CameraSession::open(device)?;
    session.capture()
}
