//! Shape classification and coverage policy selection.
//!
//! Objects are split into two framing classes: thin/elongated/small objects
//! get a looser, more padded frame; bulky objects get a tighter one. The
//! thresholds are empirically chosen and carried as named configuration on
//! [`CropConfig`](crate::CropConfig) rather than hard-coded.

use serde::{Deserialize, Serialize};

use crate::metrics::ShapeMetrics;
use crate::CropConfig;

/// Framing class for a measured object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeClass {
    /// Sparse within its bbox, high aspect ratio, or small relative to the
    /// image. Framed loosely.
    Thin,
    /// Compact object. Framed tightly.
    Bulky,
}

impl ShapeClass {
    pub fn is_thin(self) -> bool {
        matches!(self, ShapeClass::Thin)
    }
}

/// Raw coverage targets for one shape class, before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageTargets {
    /// Upper bound on object-to-crop coverage.
    pub max_coverage: f64,
    /// Lower bound on object-to-crop coverage.
    pub min_coverage: f64,
    /// Preferred coverage before clamping into [min, max].
    pub base_coverage: f64,
}

impl CoverageTargets {
    /// Reference targets for thin/elongated/small objects.
    pub fn thin() -> Self {
        Self {
            max_coverage: 0.60,
            min_coverage: 0.20,
            base_coverage: 0.40,
        }
    }

    /// Reference targets for bulky objects.
    pub fn bulky() -> Self {
        Self {
            max_coverage: 0.90,
            min_coverage: 0.25,
            base_coverage: 0.70,
        }
    }

    /// Resolve into a concrete policy:
    /// `desired = min(max, max(base, min))`.
    pub fn resolve(&self) -> CoveragePolicy {
        let desired = self
            .max_coverage
            .min(self.base_coverage.max(self.min_coverage));
        CoveragePolicy {
            max_coverage: self.max_coverage,
            min_coverage: self.min_coverage,
            desired_coverage: desired,
        }
    }
}

/// Resolved coverage policy. Invariant: `min <= desired <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoveragePolicy {
    pub max_coverage: f64,
    pub min_coverage: f64,
    pub desired_coverage: f64,
}

/// Classify a measured object.
///
/// Thin when any of the three triggers fire: sparse in its own box, long
/// relative to its short side, or small relative to the whole image.
pub fn classify(metrics: &ShapeMetrics, config: &CropConfig) -> ShapeClass {
    let thin = metrics.thinness < config.thinness_threshold
        || metrics.aspect_ratio > config.aspect_threshold
        || metrics.image_area_fraction < config.image_fraction_threshold;
    if thin {
        ShapeClass::Thin
    } else {
        ShapeClass::Bulky
    }
}

/// Select and resolve the coverage policy for a class.
pub fn policy_for(class: ShapeClass, config: &CropConfig) -> CoveragePolicy {
    match class {
        ShapeClass::Thin => config.thin_targets.resolve(),
        ShapeClass::Bulky => config.bulky_targets.resolve(),
    }
}
