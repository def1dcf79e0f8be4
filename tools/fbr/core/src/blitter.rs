//! # Sprite Blitter
//!
//! Copies a packed 1bpp or 2bpp bitmap onto the framebuffer, remapping every
//! sampled index through the draw-color register. The source is any byte
//! slice; `stride` is its row length in pixels, which lets a blit pick a
//! sub-rectangle out of a larger sheet.
//!
//! Source bitmaps are MSB-first: the leftmost pixel of a byte is its highest
//! bit (1bpp) or bit pair (2bpp). This is the opposite of the framebuffer's
//! own packing.
//!
//! ```ignore
//! // 8x8 1bpp sprite, mirrored horizontally
//! raster.blit(&SMILEY, 76, 76, 8, 8, BlitFlags::FLIP_X);
//!
//! // 16x16 tile at (32, 0) of a 128px wide 2bpp sheet
//! raster.blit_sub(&SHEET, 10, 10, 16, 16, 32, 0, 128, BlitFlags::BPP2);
//! ```

use bit_field::BitField;
use log::{debug, trace};

use crate::framebuffer::FrameBuffer;
use crate::rasterizer::Rasterizer;

bitflags::bitflags! {
    /// Blit options, bit-compatible with the raw `flags` argument the host passes in.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct BlitFlags: u32 {
        /// Source has 2 bits per pixel instead of 1.
        const BPP2   = 0b0001;
        /// Mirror horizontally.
        const FLIP_X = 0b0010;
        /// Mirror vertically.
        const FLIP_Y = 0b0100;
        /// Rotate 90° counter-clockwise (applied before the flips).
        const ROTATE = 0b1000;
    }
}

/// Bit offset of source column `x` inside its byte.
#[inline(always)]
pub fn sample_shift(x: i64, bpp2: bool) -> usize {
    if bpp2 {
        (6 - ((x & 0x3) << 1)) as usize
    } else {
        (7 - (x & 0x7)) as usize
    }
}

/// Reads the logical color index at `(x, y)` of a packed source bitmap.
///
/// Coordinates that fall outside the slice, negative ones included, read as 0.
#[inline(always)]
pub fn sample_pixel(sprite: &[u8], x: i64, y: i64, stride: i64, bpp2: bool) -> u8 {
    let bit = y * stride + x;
    if bit < 0 {
        return 0;
    }

    let (index, width) = if bpp2 { (bit >> 2, 2) } else { (bit >> 3, 1) };
    let Some(&byte) = usize::try_from(index).ok().and_then(|i| sprite.get(i)) else {
        return 0;
    };

    let shift = sample_shift(x, bpp2);
    byte.get_bits(shift..shift + width)
}

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    /// Blits a whole `width`×`height` sprite to `(x, y)`.
    pub fn blit(&mut self, sprite: &[u8], x: i32, y: i32, width: i32, height: i32, flags: BlitFlags) {
        self.blit_sub(sprite, x, y, width, height, 0, 0, width, flags);
    }

    /// Blits the `width`×`height` region at `(src_x, src_y)` of a sprite sheet
    /// `stride` pixels wide to `(dst_x, dst_y)`.
    ///
    /// Sampled indices go through `dc0..dc3`; transparent ones leave the
    /// destination pixel untouched.
    pub fn blit_sub(
        &mut self,
        sprite: &[u8],
        dst_x: i32,
        dst_y: i32,
        width: i32,
        height: i32,
        src_x: i32,
        src_y: i32,
        stride: i32,
        flags: BlitFlags,
    ) {
        let dc = self.draw_colors;
        trace!(target: "blitter", "blit from ({src_x}, {src_y}):({width}, {height}) stride {stride} at ({dst_x}, {dst_y}); flags {flags:?}");

        let (dst_x, dst_y) = (dst_x as i64, dst_y as i64);
        let clip_x_min = (-dst_x).max(0);
        let clip_y_min = (-dst_y).max(0);
        let clip_x_max = (width as i64).min(FrameBuffer::<W, H>::WIDTH as i64 - dst_x);
        let clip_y_max = (height as i64).min(FrameBuffer::<W, H>::HEIGHT as i64 - dst_y);

        if clip_x_min >= clip_x_max || clip_y_min >= clip_y_max {
            debug!(target: "blitter", "blit skipped, nothing left after clipping");
            return;
        }

        let bpp2 = flags.contains(BlitFlags::BPP2);
        let rotate = flags.contains(BlitFlags::ROTATE);
        let flip_x = flags.contains(BlitFlags::FLIP_X) != rotate;
        let flip_y = flags.contains(BlitFlags::FLIP_Y);
        let (src_x, src_y, stride) = (src_x as i64, src_y as i64, stride as i64);

        for row in clip_y_min..clip_y_max {
            for col in clip_x_min..clip_x_max {
                let (mut sx, mut sy) = if rotate { (row, col) } else { (col, row) };
                if flip_x {
                    sx = clip_x_max - sx - 1;
                }
                if flip_y {
                    sy = clip_y_max - sy - 1;
                }

                let index = sample_pixel(sprite, src_x + sx, src_y + sy, stride, bpp2);
                if let Some(color) = dc.resolve_index(index) {
                    self.fb.set_pixel(color, (dst_x + col) as i32, (dst_y + row) as i32);
                }
            }
        }
    }
}
