pub mod detection;
pub mod detection_request;
pub mod emotion_detector;
pub mod emotion_label;
pub mod result_normalizer;
