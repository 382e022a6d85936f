use serde::{Deserialize, Serialize};

use crate::shared::constants::LABEL_OFFSET;

/// Axis-aligned box in the source image's natural pixel coordinates.
///
/// Coordinates are kept exactly as the detector reported them; no clamping
/// or rescaling happens between the response and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Builds a box only when all four corners are known.
    pub fn from_parts(
        xmin: Option<f64>,
        ymin: Option<f64>,
        xmax: Option<f64>,
        ymax: Option<f64>,
    ) -> Option<Self> {
        Some(Self::new(xmin?, ymin?, xmax?, ymax?))
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Where the label text starts: left-aligned, just above the top edge.
    pub fn label_anchor(&self) -> (f64, f64) {
        (self.xmin, self.ymin - LABEL_OFFSET)
    }

    /// Integer pixel rectangle `(x, y, width, height)` for raster stroking on a
    /// `canvas_width` x `canvas_height` canvas.
    ///
    /// Edges are clamped to `margin` pixels beyond the canvas, so an edge that is
    /// off-canvas stays off-canvas while the arithmetic stays in range. Returns
    /// `None` when the box has no area after rounding and clamping.
    pub fn pixel_rect(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        margin: u32,
    ) -> Option<(i32, i32, u32, u32)> {
        let corners = [self.xmin, self.ymin, self.xmax, self.ymax];
        if corners.iter().any(|v| v.is_nan()) {
            return None;
        }
        let margin = f64::from(margin);
        let clamp = |v: f64, limit: u32| v.round().clamp(-margin, f64::from(limit) + margin) as i64;
        let x0 = clamp(self.xmin, canvas_width);
        let y0 = clamp(self.ymin, canvas_height);
        let x1 = clamp(self.xmax, canvas_width);
        let y1 = clamp(self.ymax, canvas_height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((
            i32::try_from(x0).ok()?,
            i32::try_from(y0).ok()?,
            u32::try_from(x1 - x0).ok()?,
            u32::try_from(y1 - y0).ok()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_dimensions() {
        let b = BoundingBox::new(10.0, 10.0, 50.0, 60.0);
        assert_relative_eq!(b.width(), 40.0);
        assert_relative_eq!(b.height(), 50.0);
    }

    #[test]
    fn test_from_parts_requires_all_corners() {
        assert!(BoundingBox::from_parts(Some(1.0), Some(2.0), Some(3.0), Some(4.0)).is_some());
        assert!(BoundingBox::from_parts(Some(1.0), None, Some(3.0), Some(4.0)).is_none());
        assert!(BoundingBox::from_parts(None, None, None, None).is_none());
    }

    #[test]
    fn test_label_anchor_sits_above_top_edge() {
        let b = BoundingBox::new(10.0, 10.0, 50.0, 60.0);
        let (x, y) = b.label_anchor();
        assert_relative_eq!(x, 10.0);
        assert!(y < b.ymin);
        assert_relative_eq!(y, 5.0);
    }

    #[test]
    fn test_pixel_rect_exact_coordinates() {
        let b = BoundingBox::new(10.0, 10.0, 50.0, 60.0);
        assert_eq!(b.pixel_rect(100, 80, 3), Some((10, 10, 40, 50)));
    }

    #[rstest]
    #[case(10.0, 10.0, 10.0, 60.0)]
    #[case(10.0, 10.0, 50.0, 10.0)]
    #[case(50.0, 10.0, 10.0, 60.0)]
    #[case(10.2, 10.0, 10.4, 60.0)]
    fn test_pixel_rect_degenerate_is_none(
        #[case] xmin: f64,
        #[case] ymin: f64,
        #[case] xmax: f64,
        #[case] ymax: f64,
    ) {
        assert_eq!(
            BoundingBox::new(xmin, ymin, xmax, ymax).pixel_rect(100, 80, 3),
            None
        );
    }

    #[test]
    fn test_pixel_rect_rounds_fractional_coordinates() {
        let b = BoundingBox::new(10.4, 9.6, 49.5, 60.2);
        assert_eq!(b.pixel_rect(100, 80, 3), Some((10, 10, 40, 50)));
    }

    #[test]
    fn test_pixel_rect_clamps_huge_coordinates() {
        let b = BoundingBox::new(-1.5e9, 0.0, 1.5e9, 10.0);
        assert_eq!(b.pixel_rect(100, 80, 3), Some((-3, 0, 106, 10)));

        let b = BoundingBox::new(f64::NEG_INFINITY, -1e300, f64::INFINITY, 1e300);
        assert_eq!(b.pixel_rect(100, 80, 3), Some((-3, -3, 106, 86)));
    }

    #[rstest]
    #[case(1e12, 1e12, 2e12, 2e12)]
    #[case(-2e12, -2e12, -1e12, -1e12)]
    #[case(200.0, 10.0, 300.0, 60.0)]
    #[case(f64::NAN, 10.0, 50.0, 60.0)]
    fn test_pixel_rect_off_canvas_is_none(
        #[case] xmin: f64,
        #[case] ymin: f64,
        #[case] xmax: f64,
        #[case] ymax: f64,
    ) {
        assert_eq!(
            BoundingBox::new(xmin, ymin, xmax, ymax).pixel_rect(100, 80, 3),
            None
        );
    }
}
