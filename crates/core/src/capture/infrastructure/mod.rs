pub mod image_file_reader;
#[cfg(feature = "camera")]
pub mod nokhwa_camera;
