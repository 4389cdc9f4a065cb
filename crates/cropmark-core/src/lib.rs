//! Cropmark Core - Content-aware crop planning
//!
//! This crate derives a well-framed crop rectangle for an object selected in
//! a photo, given either a hand-drawn polygon silhouette or an explicit
//! bounding box. The polygon path rasterizes the silhouette, measures its
//! shape, classifies it as thin/elongated vs. bulky, and sizes the crop to
//! hit a coverage target tuned to that class; the fixed-box path is plain
//! truncation against the image bounds.
//!
//! Every entry point is a pure, synchronous function of its inputs: no
//! shared mutable state, no I/O, nothing retained across calls.

pub mod classify;
pub mod extract;
pub mod geometry;
pub mod metrics;
pub mod plan;
pub mod raster;

pub use classify::{CoveragePolicy, CoverageTargets, ShapeClass};
pub use extract::{extract_region, PixelImage};
pub use geometry::{BoundingBox, CropError, Point, Polygon};
pub use metrics::ShapeMetrics;
pub use plan::{
    plan_crop, plan_from_points, truncate_to_bounds, CoverageDiagnostics, CropPlan, CropRequest,
    MAX_CROP_FRACTION,
};
pub use raster::{rasterize, RasterMask};

/// Tunable thresholds for crop planning.
///
/// The reference values are empirically chosen; they are carried here as
/// named, overridable configuration rather than buried constants. The
/// half-image crop cap is deliberately *not* part of this struct: it is a
/// hard product constraint, not a tunable (see [`plan::MAX_CROP_FRACTION`]).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropConfig {
    /// Objects filling less than this fraction of their own bounding box
    /// classify as thin.
    pub thinness_threshold: f64,
    /// Objects longer than this ratio of long side to short side classify
    /// as thin.
    pub aspect_threshold: f64,
    /// Objects whose bounding box is smaller than this fraction of the
    /// image classify as thin.
    pub image_fraction_threshold: f64,
    /// Minimum aspect ratio before the short-axis padding bias applies.
    pub padding_aspect_threshold: f64,
    /// Extra padding fraction added along the short axis of elongated
    /// objects.
    pub padding_ratio: f64,
    /// Coverage targets applied to thin objects.
    pub thin_targets: CoverageTargets,
    /// Coverage targets applied to bulky objects.
    pub bulky_targets: CoverageTargets,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            thinness_threshold: 0.40,
            aspect_threshold: 2.5,
            image_fraction_threshold: 0.05,
            padding_aspect_threshold: 2.0,
            padding_ratio: 0.30,
            thin_targets: CoverageTargets::thin(),
            bulky_targets: CoverageTargets::bulky(),
        }
    }
}

impl CropConfig {
    /// Create a config with the reference thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their reference defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CropConfig::new();
        assert!(config.is_default());
        assert_eq!(config.thinness_threshold, 0.40);
        assert_eq!(config.aspect_threshold, 2.5);
        assert_eq!(config.image_fraction_threshold, 0.05);
        assert_eq!(config.padding_ratio, 0.30);
    }

    #[test]
    fn test_config_not_default_after_override() {
        let mut config = CropConfig::new();
        config.padding_ratio = 0.5;
        assert!(!config.is_default());
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = CropConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CropConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
