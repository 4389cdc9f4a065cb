//! Image embedding contract.
//!
//! An embedder maps an image region to a fixed-length vector. Vectors are
//! L2-normalized before they leave the service, so downstream dot products
//! are cosine similarities.

use cropmark_core::PixelImage;

use crate::error::ServiceError;

/// Tolerance for the unit-norm check.
const NORM_TOLERANCE: f32 = 1e-4;

/// Image embedding: produces a fixed-length, L2-normalized vector per
/// image region. All vectors from one implementation have the same length.
pub trait Embedder {
    fn embed(&self, region: &PixelImage) -> Result<Vec<f32>, ServiceError>;
}

/// Normalize a vector to unit L2 norm in place.
///
/// The zero vector is left untouched; there is no direction to normalize
/// toward.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Whether a vector already has unit L2 norm (within tolerance).
pub fn is_unit_norm(vector: &[f32]) -> bool {
    let norm_sq = vector.iter().map(|v| v * v).sum::<f32>();
    (norm_sq - 1.0).abs() < NORM_TOLERANCE
}
