//! Crop size solving for a target coverage ratio.

/// Hard product constraint: a crop never exceeds this fraction of the source
/// image in either dimension. Not a tunable.
pub const MAX_CROP_FRACTION: f64 = 0.5;

/// Floor for the coverage denominator so a zero target cannot divide by zero.
const MIN_DESIRED_COVERAGE: f64 = 0.01;

/// Maximum crop dimensions for a source image, truncated to whole pixels.
pub(crate) fn max_crop_dims(image_w: u32, image_h: u32) -> (u32, u32) {
    (
        (image_w as f64 * MAX_CROP_FRACTION) as u32,
        (image_h as f64 * MAX_CROP_FRACTION) as u32,
    )
}

/// Solve the crop dimensions needed to hit `desired_coverage`.
///
/// Grows the bounding box by a single scalar scale (aspect ratio preserved)
/// until `object_area / crop_area` reaches the target, then caps the scale so
/// neither dimension exceeds the per-axis maximum. The more restrictive of
/// the two terms wins. Results are floored at 1 pixel per side.
pub(crate) fn solve_crop_size(
    bbox_w: u32,
    bbox_h: u32,
    object_area: u64,
    desired_coverage: f64,
    max_w: u32,
    max_h: u32,
) -> (u32, u32) {
    let bbox_w = bbox_w.max(1) as f64;
    let bbox_h = bbox_h.max(1) as f64;
    let bbox_area = bbox_w * bbox_h;

    let required_area = (object_area as f64 / desired_coverage.max(MIN_DESIRED_COVERAGE))
        .min(max_w as f64 * max_h as f64);

    let coverage_scale = (required_area / bbox_area).sqrt();
    let dimension_scale = (max_w as f64 / bbox_w).min(max_h as f64 / bbox_h);
    let scale = coverage_scale.min(dimension_scale);

    let new_w = (bbox_w * scale).round().max(1.0) as u32;
    let new_h = (bbox_h * scale).round().max(1.0) as u32;
    (new_w, new_h)
}
