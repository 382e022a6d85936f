pub mod annotate_image_use_case;
pub mod detection_session;
pub mod error;
