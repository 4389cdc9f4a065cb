//! Asymmetric padding for elongated objects.
//!
//! A long, thin object framed by a tight crop looks cramped along its short
//! axis. When the object is classified thin and sufficiently elongated, the
//! half-extent along the short axis is inflated by the configured padding
//! ratio; the long axis is left alone.

use crate::classify::ShapeClass;
use crate::CropConfig;

/// Compute the half extents of the crop window around the bbox center.
///
/// Returns `(half_w, half_h)`. The bias applies only when the object is
/// classified thin and its aspect ratio exceeds the padding threshold;
/// otherwise both halves are the plain unbiased `new / 2`.
pub(crate) fn padded_half_extents(
    new_w: u32,
    new_h: u32,
    bbox_w: u32,
    bbox_h: u32,
    class: ShapeClass,
    aspect_ratio: f64,
    config: &CropConfig,
) -> (i64, i64) {
    if class.is_thin() && aspect_ratio > config.padding_aspect_threshold {
        let inflate = 1.0 + config.padding_ratio;
        if bbox_w > bbox_h {
            // Wide and thin: extra headroom above and below.
            (new_w as i64 / 2, (new_h as f64 * inflate / 2.0).round() as i64)
        } else {
            // Tall and thin: extra headroom left and right.
            ((new_w as f64 * inflate / 2.0).round() as i64, new_h as i64 / 2)
        }
    } else {
        (new_w as i64 / 2, new_h as i64 / 2)
    }
}
