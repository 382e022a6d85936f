pub mod camera_device;
pub mod camera_session;
