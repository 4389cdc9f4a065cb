//! Applying a planned rectangle to pixel data.
//!
//! The planner only ever decides *where* to crop; this module performs the
//! byte-level extraction of that region from an RGB buffer. Format encoding
//! and decoding stay outside the core: callers hand in raw pixels and get
//! raw pixels back.

use crate::geometry::BoundingBox;

/// A raw RGB8 pixel buffer with interleaved channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interleaved RGB data, row-major, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl PixelImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Extract a planned rectangle from an image.
///
/// The rectangle is clamped to the image before copying, so a plan produced
/// against mismatched dimensions still yields a valid (possibly smaller)
/// region. Output is always at least 1x1.
pub fn extract_region(image: &PixelImage, rect: &BoundingBox) -> PixelImage {
    let x0 = rect.x.min(image.width.saturating_sub(1));
    let y0 = rect.y.min(image.height.saturating_sub(1));
    let x1 = rect.right().min(image.width);
    let y1 = rect.bottom().min(image.height);

    let out_w = x1.saturating_sub(x0).max(1);
    let out_h = y1.saturating_sub(y0).max(1);

    let mut output = vec![0u8; (out_w * out_h * 3) as usize];

    // Row-wise copy; each output row is one contiguous slice of the source.
    for row in 0..out_h {
        let src_y = y0 + row;
        let src_start = ((src_y * image.width + x0) * 3) as usize;
        let src_end = src_start + (out_w * 3) as usize;
        let dst_start = (row * out_w * 3) as usize;
        let dst_end = dst_start + (out_w * 3) as usize;

        if src_end <= image.pixels.len() {
            output[dst_start..dst_end].copy_from_slice(&image.pixels[src_start..src_end]);
        }
    }

    PixelImage {
        width: out_w,
        height: out_h,
        pixels: output,
    }
}
