pub mod detector_factory;
pub mod http_emotion_detector;
pub mod simulated_emotion_detector;
