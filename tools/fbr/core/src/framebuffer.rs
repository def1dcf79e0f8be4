//! # Packed Framebuffer
//!
//! The display is 2 bits per pixel, 4 pixels per byte, row-major. The pixel at
//! column `x` sits in bits `2*(x&3)..2*(x&3)+1` of byte `(width*y + x) >> 2`,
//! so the leftmost pixel of each byte is its least significant bit pair.
//!
//! ```ignore
//! let mut bytes = [0u8; FRAMEBUFFER_SIZE];
//! let mut fb = FrameBuffer::<160, 160>::new(&mut bytes)?;
//! fb.set_pixel_clipped(3, 10, 10);
//! assert_eq!(fb.get_pixel(10, 10), Some(3));
//! ```

use crate::error::Error;

pub const SCREEN_SIZE: usize = 160;
pub const FRAMEBUFFER_SIZE: usize = SCREEN_SIZE * SCREEN_SIZE / 4;

/// Byte holding pixel `(x, y)` on a canvas `width` pixels wide.
#[inline(always)]
pub const fn pixel_byte_index(width: usize, x: usize, y: usize) -> usize {
    (width * y + x) >> 2
}

/// Bit offset of pixel column `x` inside its byte.
#[inline(always)]
pub const fn pixel_shift(x: usize) -> u32 {
    ((x & 0x3) << 1) as u32
}

/// A byte with all four packed pixels set to `color`.
#[inline(always)]
pub const fn fill_byte(color: u8) -> u8 {
    (color & 0x3) * 0b0101_0101
}

/// Mutable view over a host-owned packed framebuffer of `W`×`H` pixels.
#[derive(Debug)]
pub struct FrameBuffer<'a, const W: usize = SCREEN_SIZE, const H: usize = SCREEN_SIZE> {
    bytes: &'a mut [u8],
}

impl<'a, const W: usize, const H: usize> FrameBuffer<'a, W, H> {
    pub const WIDTH: i32 = W as i32;
    pub const HEIGHT: i32 = H as i32;
    pub const LEN: usize = W * H / 4;

    // rows must start on a byte boundary for the span fill to line up
    const ROW_ALIGNED: () = assert!(W % 4 == 0, "framebuffer width must be a multiple of 4");

    pub fn new(bytes: &'a mut [u8]) -> Result<Self, Error> {
        #[allow(clippy::let_unit_value)]
        let () = Self::ROW_ALIGNED;

        if bytes.len() != Self::LEN {
            return Err(Error::FramebufferSize {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// For slices the crate has already cut to `LEN` bytes.
    pub(crate) fn from_exact(bytes: &'a mut [u8]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ROW_ALIGNED;

        debug_assert_eq!(bytes.len(), Self::LEN);
        Self { bytes }
    }

    #[inline(always)]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < Self::WIDTH && y >= 0 && y < Self::HEIGHT
    }

    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Writes one pixel without clipping. The caller guarantees `(x, y)` is on the canvas.
    #[inline(always)]
    pub fn set_pixel(&mut self, color: u8, x: i32, y: i32) {
        debug_assert!(Self::in_bounds(x, y), "pixel ({x}, {y}) is off the canvas");

        let idx = pixel_byte_index(W, x as usize, y as usize);
        let shift = pixel_shift(x as usize);
        let mask = 0x3 << shift;

        self.bytes[idx] = ((color & 0x3) << shift) | (self.bytes[idx] & !mask);
    }

    /// Writes one pixel, silently dropping it when `(x, y)` is off the canvas.
    #[inline(always)]
    pub fn set_pixel_clipped(&mut self, color: u8, x: i32, y: i32) {
        if Self::in_bounds(x, y) {
            self.set_pixel(color, x, y);
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        let byte = self.bytes[pixel_byte_index(W, x as usize, y as usize)];
        Some((byte >> pixel_shift(x as usize)) & 0x3)
    }

    /// Fills `start_x..end_x` of row `y`. The span must already be clipped to the canvas.
    ///
    /// Whole aligned bytes in the middle of the span are written at once; the
    /// unaligned ends are written pixel by pixel.
    pub fn fill_row(&mut self, color: u8, start_x: i32, y: i32, end_x: i32) {
        debug_assert!(y >= 0 && y < Self::HEIGHT);
        debug_assert!(start_x >= 0 && end_x <= Self::WIDTH);

        let mut start_x = start_x;
        let fill_end = end_x - (end_x & 3);
        let fill_start = ((start_x + 3) & !3).min(fill_end);

        if fill_end - fill_start > 3 {
            for xx in start_x..fill_start {
                self.set_pixel(color, xx, y);
            }

            let from = pixel_byte_index(W, fill_start as usize, y as usize);
            let to = pixel_byte_index(W, fill_end as usize, y as usize);
            self.bytes[from..to].fill(fill_byte(color));

            start_x = fill_end;
        }

        for xx in start_x..end_x {
            self.set_pixel(color, xx, y);
        }
    }
}
