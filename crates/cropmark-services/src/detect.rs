//! Object detection contract.
//!
//! A detector proposes labeled boxes; the backend hands the surviving boxes
//! to segmentation as hints. Tiny detections are dropped before that handoff
//! so segmentation never chases noise.

use serde::{Deserialize, Serialize};

use cropmark_core::PixelImage;

use crate::error::ServiceError;

/// Minimum detection area in square pixels. Boxes below this are filtered
/// before segmentation.
pub const MIN_DETECTION_AREA: f32 = 2000.0;

/// One detected object: an xyxy box, a confidence score, and a class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge (exclusive).
    pub x2: f32,
    /// Bottom edge (exclusive).
    pub y2: f32,
    /// Detector confidence in [0, 1].
    pub confidence: f32,
    /// Class label as reported by the detector.
    pub label: String,
}

impl Detection {
    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }

    /// Box area in square pixels.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

/// Object detection: produces labeled boxes for an image.
///
/// Implementations wrap an inference backend; this crate never looks inside.
pub trait Detector {
    fn detect(&self, image: &PixelImage) -> Result<Vec<Detection>, ServiceError>;
}

/// Drop detections smaller than `min_area` square pixels.
pub fn filter_by_min_area(detections: Vec<Detection>, min_area: f32) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|d| d.area() >= min_area)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(x1: f32, y1: f32, x2: f32, y2: f32) -> Detection {
        Detection {
            x1,
            y1,
            x2,
            y2,
            confidence: 0.9,
            label: "chair".to_string(),
        }
    }

    #[test]
    fn test_area() {
        assert_eq!(detection(10.0, 10.0, 60.0, 50.0).area(), 2000.0);
    }

    #[test]
    fn test_inverted_box_has_zero_area() {
        assert_eq!(detection(60.0, 50.0, 10.0, 10.0).area(), 0.0);
    }

    #[test]
    fn test_filter_drops_small_boxes() {
        let detections = vec![
            detection(0.0, 0.0, 100.0, 100.0), // 10000 px²
            detection(0.0, 0.0, 40.0, 40.0),   // 1600 px², dropped
            detection(0.0, 0.0, 50.0, 40.0),   // 2000 px², kept at boundary
        ];
        let kept = filter_by_min_area(detections, MIN_DETECTION_AREA);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].area(), 10_000.0);
        assert_eq!(kept[1].area(), 2000.0);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_min_area(Vec::new(), MIN_DETECTION_AREA).is_empty());
    }
}
