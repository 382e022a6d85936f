pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const PRODUCTION_ENDPOINT: &str = match option_env!("MOODFRAME_PRODUCTION_URL") {
    Some(url) => url,
    None => "https://emotion-detector-1-bhg7.onrender.com",
};
pub const PREDICT_PATH: &str = "/predict/";

pub const UPLOAD_FIELD_NAME: &str = "file";
pub const UPLOAD_FILE_NAME: &str = "image.jpg";
pub const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// Advisory upload size; larger images are sent anyway.
pub const UPLOAD_SIZE_GUIDANCE_BYTES: usize = 2 * 1024 * 1024;

pub const SIMULATED_DELAY_MS: u64 = 1500;

pub const BOX_STROKE_WIDTH: u32 = 3;
pub const LABEL_FONT_SIZE: f32 = 16.0;
/// Gap between a box's top edge and the label baseline.
pub const LABEL_OFFSET: f64 = 5.0;

pub const DEFAULT_BAR_WIDTH: usize = 30;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"];
