use serde::Deserialize;

use crate::shared::bounding_box::BoundingBox;

/// One raw result unit reported by the external detector.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "WireDetection")]
pub struct Detection {
    pub name: Option<String>,
    pub confidence: f64,
    pub class_id: Option<u32>,
    pub bbox: Option<BoundingBox>,
}

impl Detection {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: Some(name.into()),
            confidence,
            class_id: None,
            bbox: None,
        }
    }

    pub fn with_box(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}

/// Detection record as the service sends it: box corners are flat fields.
#[derive(Deserialize)]
struct WireDetection {
    #[serde(default)]
    name: Option<String>,
    confidence: f64,
    #[serde(default)]
    class_id: Option<u32>,
    #[serde(default)]
    xmin: Option<f64>,
    #[serde(default)]
    ymin: Option<f64>,
    #[serde(default)]
    xmax: Option<f64>,
    #[serde(default)]
    ymax: Option<f64>,
}

impl From<WireDetection> for Detection {
    fn from(w: WireDetection) -> Self {
        Self {
            name: w.name,
            confidence: w.confidence,
            class_id: w.class_id,
            bbox: BoundingBox::from_parts(w.xmin, w.ymin, w.xmax, w.ymax),
        }
    }
}

/// Body of a successful `POST /predict/` response.
#[derive(Clone, Debug, Deserialize)]
pub struct DetectionResponse {
    pub detections: Vec<Detection>,
}
