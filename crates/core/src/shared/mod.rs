pub mod bounding_box;
pub mod color;
pub mod constants;
pub mod image_source;
pub mod settings;
