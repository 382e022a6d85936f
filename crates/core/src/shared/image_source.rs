use std::io::Cursor;
use std::path::PathBuf;

use image::RgbImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read image from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("frame data does not match {width}x{height} RGB")]
    FrameSize { width: u32, height: u32 },
}

/// Where an [`ImageSource`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOrigin {
    File(PathBuf),
    Camera,
}

/// An opaque encoded image supplied by the user.
///
/// The bytes are forwarded to the detector untouched; decoding only happens
/// when the renderer needs pixels.
#[derive(Clone, Debug)]
pub struct ImageSource {
    bytes: Vec<u8>,
    origin: ImageOrigin,
}

impl ImageSource {
    pub fn new(bytes: Vec<u8>, origin: ImageOrigin) -> Self {
        Self { bytes, origin }
    }

    /// Encodes a raw RGB frame as JPEG, the format camera captures are sent in.
    pub fn from_rgb_frame(data: Vec<u8>, width: u32, height: u32) -> Result<Self, SourceError> {
        let raster = RgbImage::from_raw(width, height, data)
            .ok_or(SourceError::FrameSize { width, height })?;
        let mut encoded = Cursor::new(Vec::new());
        raster
            .write_to(&mut encoded, image::ImageFormat::Jpeg)
            .map_err(SourceError::Encode)?;
        Ok(Self::new(encoded.into_inner(), ImageOrigin::Camera))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn origin(&self) -> &ImageOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes to RGB at the image's natural dimensions.
    pub fn decode(&self) -> Result<RgbImage, SourceError> {
        image::load_from_memory(&self.bytes)
            .map(|img| img.to_rgb8())
            .map_err(SourceError::Decode)
    }
}
