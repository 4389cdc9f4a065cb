//! Instance segmentation contract.
//!
//! A segmenter produces binary masks, optionally guided by detection boxes.
//! With hints it returns at most one mask per hint; unguided it may return
//! any number, which are then filtered by a minimum bounding-side length so
//! speck-sized masks never reach crop planning.

use serde::{Deserialize, Serialize};

use cropmark_core::{PixelImage, RasterMask};

use crate::error::ServiceError;

/// Minimum bounding-box side length in pixels for an unguided mask.
pub const MIN_MASK_SIDE: u32 = 10;

/// A detection box handed to the segmenter as guidance, in xywh pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxHint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One segmented object: a full-resolution binary mask and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskCandidate {
    pub mask: RasterMask,
    pub score: f32,
}

/// Instance segmentation: produces a binary mask per object.
///
/// Contract: when `hints` is supplied the result holds at most one mask per
/// hint, in hint order; when `None` the segmenter runs unguided and may
/// return any number of masks.
pub trait Segmenter {
    fn segment(
        &self,
        image: &PixelImage,
        hints: Option<&[BoxHint]>,
    ) -> Result<Vec<MaskCandidate>, ServiceError>;
}

/// Drop candidates whose occupied region is narrower or shorter than
/// `min_side` pixels. Empty masks are dropped outright.
pub fn filter_by_min_side(candidates: Vec<MaskCandidate>, min_side: u32) -> Vec<MaskCandidate> {
    candidates
        .into_iter()
        .filter(|c| match c.mask.tight_bounds() {
            Some(bounds) => bounds.width >= min_side && bounds.height >= min_side,
            None => false,
        })
        .collect()
}
