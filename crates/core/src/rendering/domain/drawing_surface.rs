use image::RgbImage;

use crate::shared::bounding_box::BoundingBox;
use crate::shared::color::Color;

/// Minimal 2D canvas the overlay renderer draws onto.
pub trait DrawingSurface {
    /// Resizes to `width` x `height` and discards everything drawn so far.
    fn reset(&mut self, width: u32, height: u32);

    /// Draws `image` at the origin, unscaled.
    fn draw_image(&mut self, image: &RgbImage);

    /// Strokes the outline of `bbox`, centered on its edges.
    fn stroke_rect(&mut self, bbox: &BoundingBox, color: Color, line_width: u32);

    /// Fills `text` with its left end at `x` and its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, size: f32);
}
