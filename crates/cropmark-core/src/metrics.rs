//! Geometric shape descriptors for a rasterized object.
//!
//! Metrics are computed only over the polygon's own coordinate extents
//! clamped into the image, never by scanning the whole canvas. The bounding
//! box area is floored at 1 pixel per side so downstream ratios never divide
//! by zero.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Polygon};
use crate::raster::RasterMask;

/// Epsilon guard for aspect ratio against zero-width or zero-height boxes.
const ASPECT_EPSILON: f64 = 1e-6;

/// Shape descriptors measured from a mask restricted to its own bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetrics {
    /// Tight integer bounding box of the polygon extents, clamped into the
    /// image, with width/height floored at 1.
    pub bbox: BoundingBox,
    /// Occupied pixel count inside the bounding box slice.
    pub object_area: u64,
    /// Bounding box area; always >= 1.
    pub bbox_area: u64,
    /// `object_area / bbox_area`, in [0, 1]. 1.0 means the object fills its
    /// box exactly.
    pub thinness: f64,
    /// Long side over short side; always >= 1 (up to the epsilon guard).
    pub aspect_ratio: f64,
    /// `bbox_area / (W * H)`, in [0, 1].
    pub image_area_fraction: f64,
}

/// Measure a rasterized object against its polygon's coordinate extents.
///
/// The bounding box is derived from the polygon's min/max coordinates
/// truncated and clamped into `[0, width] x [0, height]`; occupancy is then
/// counted only within that slice of the mask.
pub fn measure(polygon: &Polygon, mask: &RasterMask, width: u32, height: u32) -> ShapeMetrics {
    let (min_x, min_y, max_x, max_y) = polygon.extents();

    let x_min = clamp_coord(min_x, width);
    let x_max = clamp_coord(max_x, width);
    let y_min = clamp_coord(min_y, height);
    let y_max = clamp_coord(max_y, height);

    let bbox_w = (x_max - x_min).max(1);
    let bbox_h = (y_max - y_min).max(1);
    let bbox = BoundingBox::new(x_min, y_min, bbox_w, bbox_h);

    let object_area = mask.count_region(x_min, y_min, x_max, y_max);
    let bbox_area = bbox_w as u64 * bbox_h as u64;

    let thinness = object_area as f64 / bbox_area as f64;
    let long = bbox_w.max(bbox_h) as f64;
    let short = bbox_w.min(bbox_h) as f64;
    let aspect_ratio = long / (short + ASPECT_EPSILON);

    let image_area = (width as u64 * height as u64).max(1);
    let image_area_fraction = bbox_area as f64 / image_area as f64;

    ShapeMetrics {
        bbox,
        object_area,
        bbox_area,
        thinness,
        aspect_ratio,
        image_area_fraction,
    }
}

/// Truncate a real coordinate and clamp it into `[0, limit]`.
fn clamp_coord(value: f64, limit: u32) -> u32 {
    value.max(0.0).min(limit as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::raster::rasterize;

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_filled_square_metrics() {
        let poly = polygon(&[(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)]);
        let mask = rasterize(&poly, 1000, 1000);
        let m = measure(&poly, &mask, 1000, 1000);

        assert_eq!(m.bbox, BoundingBox::new(100, 100, 100, 100));
        assert_eq!(m.bbox_area, 10_000);
        // Counted over the half-open bbox slice, so the outline row/column at
        // 200 is excluded and the interior fills the box.
        assert_eq!(m.object_area, 10_000);
        assert!((m.thinness - 1.0).abs() < 1e-9);
        assert!((m.aspect_ratio - 1.0).abs() < 1e-3);
        assert!((m.image_area_fraction - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_thinness_below_one_for_triangle() {
        let poly = polygon(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)]);
        let mask = rasterize(&poly, 200, 200);
        let m = measure(&poly, &mask, 200, 200);

        // A triangle occupies roughly half its bounding box.
        assert!(m.thinness > 0.4 && m.thinness < 0.6, "thinness {}", m.thinness);
        assert!(m.thinness <= 1.0);
    }

    #[test]
    fn test_bbox_clamped_to_image() {
        let poly = polygon(&[(-50.0, -50.0), (80.0, -50.0), (80.0, 60.0), (-50.0, 60.0)]);
        let mask = rasterize(&poly, 100, 100);
        let m = measure(&poly, &mask, 100, 100);

        assert_eq!(m.bbox, BoundingBox::new(0, 0, 80, 60));
    }

    #[test]
    fn test_hairline_aspect_ratio() {
        let poly = polygon(&[(50.0, 0.0), (350.0, 0.0), (350.0, 1.0), (50.0, 1.0)]);
        let mask = rasterize(&poly, 400, 400);
        let m = measure(&poly, &mask, 400, 400);

        assert_eq!(m.bbox, BoundingBox::new(50, 0, 300, 1));
        assert!(m.aspect_ratio > 250.0);
        assert_eq!(m.object_area, 300);
        assert!((m.thinness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_vertical_line_never_divides_by_zero() {
        // All vertices on one vertical line; raw extent width is zero.
        let poly = polygon(&[(10.0, 5.0), (10.0, 30.0), (10.0, 50.0)]);
        let mask = rasterize(&poly, 100, 100);
        let m = measure(&poly, &mask, 100, 100);

        assert_eq!(m.bbox.width, 1);
        assert!(m.bbox_area >= 1);
        assert!(m.aspect_ratio.is_finite());
        assert!(m.thinness.is_finite());
    }

    #[test]
    fn test_thinness_never_exceeds_one() {
        let poly = polygon(&[(3.0, 3.0), (17.0, 4.0), (15.0, 18.0), (2.0, 12.0)]);
        let mask = rasterize(&poly, 20, 20);
        let m = measure(&poly, &mask, 20, 20);

        assert!(m.thinness <= 1.0, "thinness {}", m.thinness);
    }
}
