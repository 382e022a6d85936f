use image::RgbImage;

use crate::detection::domain::result_normalizer::AnnotatedResult;
use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::shared::constants::{BOX_STROKE_WIDTH, LABEL_FONT_SIZE};

/// Draws the image and the boxed results onto a surface.
///
/// Every call starts from a cleared surface, so rendering the same inputs
/// twice leaves the same picture as rendering them once.
pub struct OverlayRenderer {
    stroke_width: u32,
    font_size: f32,
}

impl OverlayRenderer {
    pub fn new(stroke_width: u32, font_size: f32) -> Self {
        Self {
            stroke_width,
            font_size,
        }
    }

    pub fn render(
        &self,
        surface: &mut dyn DrawingSurface,
        image: Option<&RgbImage>,
        results: Option<&[AnnotatedResult]>,
    ) {
        let Some(image) = image else {
            surface.reset(0, 0);
            return;
        };

        surface.reset(image.width(), image.height());
        surface.draw_image(image);

        // Unboxed results only show up in the list view.
        for result in results.unwrap_or_default() {
            let Some(bbox) = result.bbox else {
                continue;
            };
            surface.stroke_rect(&bbox, result.color, self.stroke_width);
            let (x, y) = bbox.label_anchor();
            surface.fill_text(&result.caption(), x, y, result.color, self.font_size);
        }
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(BOX_STROKE_WIDTH, LABEL_FONT_SIZE)
    }
}
