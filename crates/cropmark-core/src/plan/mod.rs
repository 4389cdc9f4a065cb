//! Crop planning: coverage solving, padding bias, boundary clamping and
//! orchestration.
//!
//! # Planning Order
//!
//! The polygon path composes the stages in this order:
//! 1. Rasterize the polygon to an occupancy mask
//! 2. Measure shape metrics over the polygon's bounding box
//! 3. Classify thin vs. bulky and select a coverage policy
//! 4. Solve the crop size for the desired coverage
//! 5. Bias padding along the short axis for elongated objects
//! 6. Clamp to image bounds, shifting rather than shrinking
//!
//! The fixed-box path is a deliberately separate, lower-guarantee policy:
//! pure truncation against the image bounds with no re-centering. The two
//! paths are dispatched from the same [`CropRequest`] union but never share
//! boundary logic.

mod clamp;
mod coverage;
mod padding;
mod planner;

pub use clamp::truncate_to_bounds;
pub use coverage::MAX_CROP_FRACTION;
pub use planner::{plan_crop, plan_from_points, CoverageDiagnostics, CropPlan, CropRequest};

pub(crate) use clamp::clamp_centered;
pub(crate) use coverage::{max_crop_dims, solve_crop_size};
pub(crate) use padding::padded_half_extents;
