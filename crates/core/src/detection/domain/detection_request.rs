use thiserror::Error;

use crate::shared::constants::{
    UPLOAD_FIELD_NAME, UPLOAD_FILE_NAME, UPLOAD_MIME_TYPE, UPLOAD_SIZE_GUIDANCE_BYTES,
};
use crate::shared::image_source::ImageSource;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no image to analyze")]
pub struct MissingInputError;

/// A single-file multipart upload, ready to hand to a detector.
///
/// The image bytes are sent as-is: no resizing, recompression, or type check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectionRequest {
    field_name: &'static str,
    file_name: &'static str,
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl DetectionRequest {
    pub fn build(image: Option<&ImageSource>) -> Result<Self, MissingInputError> {
        let image = image
            .filter(|img| !img.is_empty())
            .ok_or(MissingInputError)?;

        if image.len() > UPLOAD_SIZE_GUIDANCE_BYTES {
            log::warn!(
                "Image is {} bytes, above the {} byte upload guidance; sending anyway",
                image.len(),
                UPLOAD_SIZE_GUIDANCE_BYTES
            );
        }

        Ok(Self {
            field_name: UPLOAD_FIELD_NAME,
            file_name: UPLOAD_FILE_NAME,
            mime_type: UPLOAD_MIME_TYPE,
            bytes: image.bytes().to_vec(),
        })
    }

    pub fn field_name(&self) -> &str {
        self.field_name
    }

    pub fn file_name(&self) -> &str {
        self.file_name
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_form(self) -> Result<reqwest::blocking::multipart::Form, reqwest::Error> {
        let part = reqwest::blocking::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.mime_type)?;
        Ok(reqwest::blocking::multipart::Form::new().part(self.field_name, part))
    }
}
