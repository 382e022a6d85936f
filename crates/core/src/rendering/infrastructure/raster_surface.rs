use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::RgbImage;
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use thiserror::Error;

use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::color::Color;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a usable TrueType/OpenType font")]
    InvalidFont { path: PathBuf },
    #[error("bundled label font is corrupt")]
    BundledFont,
}

const BUNDLED_FONT: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");

/// The label font shipped with the crate (DejaVu Sans).
pub fn default_font() -> Result<FontArc, RenderError> {
    FontArc::try_from_slice(BUNDLED_FONT).map_err(|_| RenderError::BundledFont)
}

/// Loads a TTF/OTF font for label text.
pub fn load_font(path: &Path) -> Result<FontArc, RenderError> {
    let data = fs::read(path).map_err(|e| RenderError::FontRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    FontArc::try_from_vec(data).map_err(|_| RenderError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// Uses the font at `path` when given, the bundled one otherwise.
pub fn resolve_font(path: Option<&Path>) -> Result<FontArc, RenderError> {
    match path {
        Some(path) => load_font(path),
        None => default_font(),
    }
}

/// Pixel surface backed by an RGB image.
pub struct RasterSurface {
    canvas: RgbImage,
    font: FontArc,
}

impl RasterSurface {
    pub fn new(font: FontArc) -> Self {
        Self {
            canvas: RgbImage::new(0, 0),
            font,
        }
    }

    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbImage {
        self.canvas
    }
}

impl DrawingSurface for RasterSurface {
    fn reset(&mut self, width: u32, height: u32) {
        self.canvas = RgbImage::new(width, height);
    }

    fn draw_image(&mut self, image: &RgbImage) {
        image::imageops::replace(&mut self.canvas, image, 0, 0);
    }

    fn stroke_rect(&mut self, bbox: &BoundingBox, color: Color, line_width: u32) {
        let (width, height) = self.canvas.dimensions();
        let Some((x, y, w, h)) = bbox.pixel_rect(width, height, line_width) else {
            log::debug!("Skipping box outside the canvas {bbox:?}");
            return;
        };
        // Insets run from outside to inside the edge so the stroke is centered.
        let outer = (line_width / 2) as i32;
        for inset in -outer..(line_width as i32 - outer) {
            let iw = i64::from(w) - 2 * i64::from(inset);
            let ih = i64::from(h) - 2 * i64::from(inset);
            let (Ok(iw), Ok(ih)) = (u32::try_from(iw), u32::try_from(ih)) else {
                break;
            };
            if iw == 0 || ih == 0 {
                break;
            }
            let rect = Rect::at(x.saturating_add(inset), y.saturating_add(inset)).of_size(iw, ih);
            draw_hollow_rect_mut(&mut self.canvas, rect, color.to_rgb());
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, size: f32) {
        let font = &self.font;
        let scale = PxScale::from(size);
        let ascent = font.as_scaled(scale).ascent();
        let top = (y as f32 - ascent).round() as i32;
        draw_text_mut(
            &mut self.canvas,
            color.to_rgb(),
            x.round() as i32,
            top,
            scale,
            font,
            text,
        );
    }
}
