use image::RgbImage;
use serde::Serialize;

use crate::rendering::domain::drawing_surface::DrawingSurface;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::color::Color;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Reset {
        width: u32,
        height: u32,
    },
    DrawImage {
        width: u32,
        height: u32,
    },
    StrokeRect {
        #[serde(rename = "box")]
        bbox: BoundingBox,
        color: Color,
        line_width: u32,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        color: Color,
        size: f32,
    },
}

/// Surface that keeps the draw calls of the latest render instead of pixels.
///
/// `reset` drops earlier commands, mirroring how a real surface is cleared.
#[derive(Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl DrawingSurface for RecordingSurface {
    fn reset(&mut self, width: u32, height: u32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Reset { width, height });
    }

    fn draw_image(&mut self, image: &RgbImage) {
        self.commands.push(DrawCommand::DrawImage {
            width: image.width(),
            height: image.height(),
        });
    }

    fn stroke_rect(&mut self, bbox: &BoundingBox, color: Color, line_width: u32) {
        self.commands.push(DrawCommand::StrokeRect {
            bbox: *bbox,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, size: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            color,
            size,
        });
    }
}
