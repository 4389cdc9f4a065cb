//! End-to-end crop planning.
//!
//! A [`CropRequest`] is either an object silhouette (polygon) or an explicit
//! rectangle. The polygon variant runs the full adaptive pipeline and reports
//! coverage diagnostics; the fixed-box variant is plain truncation with no
//! diagnostics. Planning is a pure function of its inputs: no shared state,
//! no I/O, safe to run concurrently without coordination.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, policy_for};
use crate::geometry::{BoundingBox, CropError, Point, Polygon};
use crate::metrics::measure;
use crate::plan::{
    clamp_centered, max_crop_dims, padded_half_extents, solve_crop_size, truncate_to_bounds,
};
use crate::raster::rasterize;
use crate::CropConfig;

/// A crop request: one of two framing strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CropRequest {
    /// Adaptive framing around a hand-drawn or mask-derived silhouette.
    Polygon(Polygon),
    /// An explicit rectangle, truncated to the image with no re-centering.
    /// Negative origins and overflowing extents are tolerated and clamped.
    FixedBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}

/// Coverage diagnostics reported alongside a polygon-path crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageDiagnostics {
    /// Occupied pixels inside the object's bounding box.
    pub object_area: u64,
    /// Bounding box area before any scaling.
    pub bbox_area: u64,
    /// Coverage at the original bounding box (object_area / bbox_area).
    pub estimated_coverage: f64,
    /// Upper coverage bound from the selected policy.
    pub target_max: f64,
    /// Lower coverage bound from the selected policy.
    pub target_min: f64,
}

/// The terminal planning artifact: a final rectangle plus the diagnostics
/// that produced it. Immutable once returned.
///
/// The rectangle always satisfies `width >= 1`, `height >= 1` and lies fully
/// inside the source image. Diagnostics are present only for the polygon
/// path; the fixed-box path carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPlan {
    pub rect: BoundingBox,
    pub diagnostics: Option<CoverageDiagnostics>,
}

/// Plan a crop for a request against a `width x height` source image.
///
/// Infallible: polygon validity is enforced at [`Polygon::new`], and every
/// other degenerate input (out-of-bounds coordinates, zero extents) is
/// clamped rather than rejected.
pub fn plan_crop(request: &CropRequest, width: u32, height: u32, config: &CropConfig) -> CropPlan {
    match request {
        CropRequest::Polygon(polygon) => plan_polygon(polygon, width, height, config),
        CropRequest::FixedBox {
            x,
            y,
            width: w,
            height: h,
        } => CropPlan {
            rect: truncate_to_bounds(*x, *y, *w, *h, width, height),
            diagnostics: None,
        },
    }
}

/// Convenience entry for callers holding raw vertices (e.g. a decoded
/// request payload).
///
/// # Errors
///
/// Returns [`CropError::InvalidPolygon`] before any geometry is computed
/// when fewer than 3 points are supplied.
pub fn plan_from_points(
    points: Vec<Point>,
    width: u32,
    height: u32,
    config: &CropConfig,
) -> Result<CropPlan, CropError> {
    let polygon = Polygon::new(points)?;
    Ok(plan_polygon(&polygon, width, height, config))
}

fn plan_polygon(polygon: &Polygon, width: u32, height: u32, config: &CropConfig) -> CropPlan {
    let mask = rasterize(polygon, width, height);
    let metrics = measure(polygon, &mask, width, height);

    let class = classify(&metrics, config);
    let policy = policy_for(class, config);

    let (max_w, max_h) = max_crop_dims(width, height);
    let (new_w, new_h) = solve_crop_size(
        metrics.bbox.width,
        metrics.bbox.height,
        metrics.object_area,
        policy.desired_coverage,
        max_w,
        max_h,
    );

    let (half_w, half_h) = padded_half_extents(
        new_w,
        new_h,
        metrics.bbox.width,
        metrics.bbox.height,
        class,
        metrics.aspect_ratio,
        config,
    );

    let cx = (metrics.bbox.x + metrics.bbox.width / 2) as i64;
    let cy = (metrics.bbox.y + metrics.bbox.height / 2) as i64;
    let rect = clamp_centered(cx, cy, half_w, half_h, width, height);

    CropPlan {
        rect,
        diagnostics: Some(CoverageDiagnostics {
            object_area: metrics.object_area,
            bbox_area: metrics.bbox_area,
            estimated_coverage: metrics.thinness,
            target_max: policy.max_coverage,
            target_min: policy.min_coverage,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_polygon(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ])
        .unwrap()
    }

    #[test]
    fn test_small_filled_square_in_large_image() {
        // 100x100 square in a 1000x1000 image: fills its bbox exactly but is
        // only 1% of the image, so it classifies thin and targets 0.40
        // coverage. The solver grows the box by sqrt(2.5) to ~158px.
        let config = CropConfig::default();
        let request = CropRequest::Polygon(square_polygon(100.0, 100.0, 100.0));
        let plan = plan_crop(&request, 1000, 1000, &config);

        assert_eq!(plan.rect.width, 158);
        assert_eq!(plan.rect.height, 158);
        assert!(plan.rect.contained_in(1000, 1000));

        // Centered on the square's midpoint (150, 150).
        assert_eq!(plan.rect.x, 71);
        assert_eq!(plan.rect.y, 71);

        let diag = plan.diagnostics.unwrap();
        assert_eq!(diag.object_area, 10_000);
        assert_eq!(diag.bbox_area, 10_000);
        assert!((diag.estimated_coverage - 1.0).abs() < 1e-9);
        assert_eq!(diag.target_max, 0.60);
        assert_eq!(diag.target_min, 0.20);
    }

    #[test]
    fn test_edge_sliver_grows_taller_and_stays_in_bounds() {
        // A 1px-tall, 300px-wide sliver at the top edge of a 400x400 image.
        // Padding bias must make the crop taller than the raw bbox without
        // ever reporting a negative y.
        let config = CropConfig::default();
        let polygon = Polygon::new(vec![
            Point::new(50.0, 0.0),
            Point::new(350.0, 0.0),
            Point::new(350.0, 1.0),
            Point::new(50.0, 1.0),
        ])
        .unwrap();
        let plan = plan_crop(&CropRequest::Polygon(polygon), 400, 400, &config);

        assert_eq!(plan.rect.y, 0);
        assert!(plan.rect.height > 1, "height {} must exceed bbox", plan.rect.height);
        assert!(plan.rect.contained_in(400, 400));
        // Width capped at half the image.
        assert_eq!(plan.rect.width, 200);
    }

    #[test]
    fn test_bulky_object_targets_tighter_frame() {
        // A square filling a quarter of the image axis-wise: thinness 1.0,
        // aspect 1.0, fraction 0.25 -> bulky, desired coverage 0.70.
        let config = CropConfig::default();
        let request = CropRequest::Polygon(square_polygon(100.0, 100.0, 200.0));
        let plan = plan_crop(&request, 400, 400, &config);

        let diag = plan.diagnostics.unwrap();
        assert_eq!(diag.target_max, 0.90);
        assert_eq!(diag.target_min, 0.25);

        // Desired 0.70 wants a shrink, but the crop never shrinks below the
        // bbox-derived scale cap; the half-image cap limits growth instead.
        assert!(plan.rect.contained_in(400, 400));
        assert!(plan.rect.width <= 200);
    }

    #[test]
    fn test_fixed_box_truncates_without_recentering() {
        let config = CropConfig::default();
        let request = CropRequest::FixedBox {
            x: -10,
            y: 0,
            width: 50,
            height: 20,
        };
        let plan = plan_crop(&request, 100, 100, &config);

        assert_eq!(plan.rect, BoundingBox::new(0, 0, 40, 20));
        assert!(plan.diagnostics.is_none());
    }

    #[test]
    fn test_fixed_box_in_bounds_unchanged() {
        let config = CropConfig::default();
        let request = CropRequest::FixedBox {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
        };
        let plan = plan_crop(&request, 100, 100, &config);
        assert_eq!(plan.rect, BoundingBox::new(10, 20, 30, 40));
    }

    #[test]
    fn test_plan_from_points_rejects_short_polygon() {
        let config = CropConfig::default();
        let result = plan_from_points(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            100,
            100,
            &config,
        );
        match result {
            Err(CropError::InvalidPolygon { point_count }) => assert_eq!(point_count, 2),
            _ => panic!("expected InvalidPolygon"),
        }
    }

    #[test]
    fn test_polygon_entirely_outside_image_still_plans() {
        // Out-of-bounds input is clamped, never rejected.
        let config = CropConfig::default();
        let request = CropRequest::Polygon(square_polygon(500.0, 500.0, 50.0));
        let plan = plan_crop(&request, 100, 100, &config);

        assert!(plan.rect.contained_in(100, 100));
        assert_eq!(plan.diagnostics.unwrap().object_area, 0);
    }

    #[test]
    fn test_custom_config_thresholds_respected() {
        // Raising the fraction threshold flips the 200px square to thin.
        let mut config = CropConfig::default();
        config.image_fraction_threshold = 0.5;

        let request = CropRequest::Polygon(square_polygon(100.0, 100.0, 200.0));
        let plan = plan_crop(&request, 400, 400, &config);

        let diag = plan.diagnostics.unwrap();
        assert_eq!(diag.target_max, 0.60);
    }

    #[test]
    fn test_planning_is_deterministic() {
        let config = CropConfig::default();
        let request = CropRequest::Polygon(square_polygon(30.0, 40.0, 120.0));
        let a = plan_crop(&request, 640, 480, &config);
        let b = plan_crop(&request, 640, 480, &config);
        assert_eq!(a, b);
    }
}
