//! Polygon rasterization to a binary occupancy mask.
//!
//! The mask is produced at exactly the source image's resolution; there is no
//! scaling step. Filling uses the even-odd rule sampled at pixel centers, and
//! the polygon outline is stamped on top of the fill. Outline stamping matters
//! for degenerate silhouettes: a one-pixel-wide polygon encloses no pixel
//! centers but must still register nonzero area.

use crate::geometry::{BoundingBox, Polygon};

/// A W×H binary occupancy grid marking object membership per pixel.
///
/// Derived and transient: a mask lives only for the duration of one crop
/// request and is never shared across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl RasterMask {
    /// Create an empty (all unoccupied) mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask directly from row-major membership data.
    ///
    /// `data` length must be `width * height`; rows are top to bottom.
    pub fn from_data(width: u32, height: u32, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) belongs to the object.
    ///
    /// Out-of-range coordinates read as unoccupied.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.data[y as usize * self.width as usize + x as usize] = true;
        }
    }

    /// Count occupied pixels in the half-open region `[x0, x1) x [y0, y1)`.
    ///
    /// The region is clamped to the mask; an empty or inverted region counts
    /// zero.
    pub fn count_region(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> u64 {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }
        let mut count = 0u64;
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                if self.data[row + x as usize] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total occupied pixel count.
    pub fn count(&self) -> u64 {
        self.data.iter().filter(|&&b| b).count() as u64
    }

    /// Tight bounding box of the occupied pixels, or `None` for an empty mask.
    pub fn tight_bounds(&self) -> Option<BoundingBox> {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0u32;
        let mut max_y = 0u32;
        let mut any = false;
        for y in 0..self.height {
            let row = y as usize * self.width as usize;
            for x in 0..self.width {
                if self.data[row + x as usize] {
                    any = true;
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }
        if !any {
            return None;
        }
        Some(BoundingBox::new(
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        ))
    }
}

/// Rasterize a polygon onto a `width x height` canvas.
///
/// A pixel is marked occupied when its center lies inside the polygon under
/// the even-odd rule, or when it lies on the polygon's outline. Vertices
/// outside the canvas are fine; only the in-canvas portion is stamped.
pub fn rasterize(polygon: &Polygon, width: u32, height: u32) -> RasterMask {
    let mut mask = RasterMask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    fill_even_odd(polygon, &mut mask);
    stamp_outline(polygon, &mut mask);
    mask
}

/// Even-odd scanline fill sampled at pixel centers.
fn fill_even_odd(polygon: &Polygon, mask: &mut RasterMask) {
    let points = polygon.points();
    let n = points.len();
    let mut crossings: Vec<f64> = Vec::with_capacity(8);

    for y in 0..mask.height {
        let yc = y as f64 + 0.5;
        crossings.clear();

        for i in 0..n {
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            // Half-open rule on the vertical range keeps shared vertices
            // from being counted twice.
            if (p1.y <= yc && p2.y > yc) || (p2.y <= yc && p1.y > yc) {
                let t = (yc - p1.y) / (p2.y - p1.y);
                crossings.push(p1.x + t * (p2.x - p1.x));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for pair in crossings.chunks_exact(2) {
            let (xa, xb) = (pair[0], pair[1]);
            // Fill pixels whose center falls in [xa, xb).
            let start = (xa - 0.5).ceil().max(0.0) as i64;
            let end = ((xb - 0.5).floor() as i64).min(mask.width as i64 - 1);
            for x in start..=end {
                mask.set(x as u32, y);
            }
        }
    }
}

/// Stamp the polygon boundary so hairline silhouettes register area.
fn stamp_outline(polygon: &Polygon, mask: &mut RasterMask) {
    let points = polygon.points();
    let n = points.len();
    let w = mask.width as i64;
    let h = mask.height as i64;

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let px = (p1.x + t * dx).floor() as i64;
            let py = (p1.y + t * dy).floor() as i64;
            // Off-canvas boundary pixels are skipped, not clamped; clamping
            // would smear phantom area along the image edge.
            if px >= 0 && px < w && py >= 0 && py < h {
                mask.set(px as u32, py as u32);
            }
        }
    }
}
