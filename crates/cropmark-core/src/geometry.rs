//! Core geometric types for crop planning.
//!
//! All coordinates are in source-image pixel space with the origin at the
//! top-left corner, x growing right and y growing down. Polygon vertices are
//! real-valued; rectangles are integer pixel grids.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop planning operations.
#[derive(Debug, Error)]
pub enum CropError {
    /// A polygon silhouette needs at least 3 vertices to enclose any area.
    #[error("Polygon must have at least 3 points, got {point_count}")]
    InvalidPolygon {
        /// Number of points actually supplied.
        point_count: usize,
    },
}

/// A single vertex in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate in pixels (may be fractional or out of bounds).
    pub x: f64,
    /// Vertical coordinate in pixels (may be fractional or out of bounds).
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered object silhouette, open or implicitly closed.
///
/// Validated at construction: fewer than 3 points is rejected before any
/// geometry is computed. Vertices outside the image are tolerated; downstream
/// stages clamp rather than reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidPolygon`] when fewer than 3 points are
    /// supplied.
    pub fn new(points: Vec<Point>) -> Result<Self, CropError> {
        if points.len() < 3 {
            return Err(CropError::InvalidPolygon {
                point_count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The ordered vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Min/max extents of the vertex coordinates as (min_x, min_y, max_x, max_y).
    pub fn extents(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// An axis-aligned integer rectangle in source-image pixels.
///
/// Rectangles produced as final crop results always satisfy `width >= 1`,
/// `height >= 1`, `x + width <= W` and `y + height <= H`. Zero dimensions
/// only occur as degenerate-input signals on intermediate values, never on
/// returned crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area in pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Exclusive right edge (`x + width`).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// True when the rectangle lies fully inside a `width x height` image.
    pub fn contained_in(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_rejects_too_few_points() {
        let result = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        match result {
            Err(CropError::InvalidPolygon { point_count }) => assert_eq!(point_count, 2),
            _ => panic!("expected InvalidPolygon"),
        }
    }

    #[test]
    fn test_polygon_accepts_triangle() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ]);
        assert!(poly.is_ok());
    }

    #[test]
    fn test_polygon_extents() {
        let poly = Polygon::new(vec![
            Point::new(-2.0, 3.0),
            Point::new(10.0, 1.0),
            Point::new(5.0, 8.5),
        ])
        .unwrap();
        let (min_x, min_y, max_x, max_y) = poly.extents();
        assert_eq!(min_x, -2.0);
        assert_eq!(min_y, 1.0);
        assert_eq!(max_x, 10.0);
        assert_eq!(max_y, 8.5);
    }

    #[test]
    fn test_bounding_box_accessors() {
        let bbox = BoundingBox::new(10, 20, 30, 40);
        assert_eq!(bbox.area(), 1200);
        assert_eq!(bbox.right(), 40);
        assert_eq!(bbox.bottom(), 60);
        assert!(bbox.contained_in(40, 60));
        assert!(!bbox.contained_in(39, 60));
    }
}
