//! Boundary clamping policies.
//!
//! Two deliberately distinct policies live here. The centered clamp backs
//! the polygon path: when one side of a proposed window is clipped by the
//! image edge, the window shifts to restore its full extent from the other
//! side, so off-center clipping never shrinks the crop. The truncating clamp
//! backs the fixed-box path: best-effort containment with no re-centering.

use crate::geometry::BoundingBox;

/// Clamp a centered window to the image, shifting to preserve its size.
///
/// The window is `2*half_w` by `2*half_h` around `(cx, cy)`. Dimensions only
/// shrink when the requested extent exceeds the whole image axis.
pub(crate) fn clamp_centered(
    cx: i64,
    cy: i64,
    half_w: i64,
    half_h: i64,
    image_w: u32,
    image_h: u32,
) -> BoundingBox {
    let w_limit = image_w.max(1) as i64;
    let h_limit = image_h.max(1) as i64;

    let mut x1 = (cx - half_w).max(0);
    let mut x2 = (cx + half_w).min(w_limit);
    let mut y1 = (cy - half_h).max(0);
    let mut y2 = (cy + half_h).min(h_limit);

    // Restore the full extent when only one side got clipped.
    if x1 == 0 && x2 < w_limit {
        x2 = (x1 + 2 * half_w).min(w_limit);
    }
    if x2 == w_limit && x1 > 0 {
        x1 = (x2 - 2 * half_w).max(0);
    }
    if y1 == 0 && y2 < h_limit {
        y2 = (y1 + 2 * half_h).min(h_limit);
    }
    if y2 == h_limit && y1 > 0 {
        y1 = (y2 - 2 * half_h).max(0);
    }

    finalize(x1, x2, y1, y2, w_limit, h_limit)
}

/// Truncate a requested rectangle against the image bounds.
///
/// Pure truncation: `x` floors at 0, `x + width` caps at the image width,
/// both computed from the requested values, and similarly for y. A box that
/// starts negative or overflows one side loses exactly the out-of-bounds
/// portion; nothing is re-centered. Clamping an already-in-bounds rectangle
/// returns it unchanged.
pub fn truncate_to_bounds(
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    image_w: u32,
    image_h: u32,
) -> BoundingBox {
    let w_limit = image_w.max(1) as i64;
    let h_limit = image_h.max(1) as i64;

    let x1 = x.clamp(0, w_limit);
    let x2 = (x + width).clamp(0, w_limit);
    let y1 = y.clamp(0, h_limit);
    let y2 = (y + height).clamp(0, h_limit);

    finalize(x1, x2, y1, y2, w_limit, h_limit)
}

/// Produce the final rectangle with the 1-pixel floor and containment
/// guarantee, even for degenerate inputs collapsed onto an image edge.
fn finalize(x1: i64, x2: i64, y1: i64, y2: i64, w_limit: i64, h_limit: i64) -> BoundingBox {
    let w = (x2 - x1).max(1).min(w_limit);
    let h = (y2 - y1).max(1).min(h_limit);
    let x = x1.clamp(0, w_limit - w);
    let y = y1.clamp(0, h_limit - h);
    BoundingBox::new(x as u32, y as u32, w as u32, h as u32)
}
