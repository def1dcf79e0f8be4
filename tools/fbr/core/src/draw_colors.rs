//! # Draw Colors & Palette
//!
//! Drawing never names output colors directly. Each call goes through the
//! 16-bit draw-color register, four nibbles `dc0..dc3`:
//!
//! | Nibble | Meaning                                      |
//! |--------|----------------------------------------------|
//! | `0`    | transparent, the write is skipped            |
//! | `1..=15` | opaque, output palette index `(n - 1) & 3` |
//!
//! Shapes use `dc0` as fill (and as stroke for lines and text backgrounds) and
//! `dc1` as outline. Sprites map their logical index `i` through `dc{i}`.
//!
//! The [`Palette`] then turns output indices 0–3 into RGB for the host.

use alloc::vec::Vec;
use bit_field::BitField;

use crate::framebuffer::FrameBuffer;

/// Power-on value of the draw-color register.
pub const DEFAULT_DRAW_COLORS: u16 = 0x1203;

pub const DEFAULT_PALETTE: [u32; 4] = [0xe0f8cf, 0x86c06c, 0x306850, 0x071821];

/// Snapshot of the draw-color register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawColors(pub u16);

impl Default for DrawColors {
    fn default() -> Self {
        DrawColors(DEFAULT_DRAW_COLORS)
    }
}

impl DrawColors {
    /// Nibble `dc{index}`, for `index` in `0..4`.
    #[inline(always)]
    pub fn nibble(self, index: u8) -> u8 {
        let lo = (index as usize & 0x3) * 4;
        self.0.get_bits(lo..lo + 4) as u8
    }

    /// `dc0`, the fill color of shapes and the stroke of lines.
    #[inline(always)]
    pub fn fill(self) -> u8 {
        self.nibble(0)
    }

    /// `dc1`, the outline color of rectangles and ovals.
    #[inline(always)]
    pub fn stroke(self) -> u8 {
        self.nibble(1)
    }

    /// Maps a raw nibble to an output index, `None` when transparent.
    #[inline(always)]
    pub fn resolve_nibble(nibble: u8) -> Option<u8> {
        match nibble & 0xF {
            0 => None,
            n => Some((n - 1) & 0x3),
        }
    }

    /// Resolves a sprite's logical color index through the register.
    #[inline(always)]
    pub fn resolve_index(self, logical: u8) -> Option<u8> {
        Self::resolve_nibble(self.nibble(logical))
    }
}

/// The four RGB entries the output indices select, as `0xRRGGBB`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette(pub [u32; 4]);

impl Default for Palette {
    fn default() -> Self {
        Palette(DEFAULT_PALETTE)
    }
}

impl Palette {
    pub fn rgba(&self, index: u8) -> [u8; 4] {
        let [_, r, g, b] = self.0[(index & 0x3) as usize].to_be_bytes();
        [r, g, b, 0xFF]
    }

    /// Expands an indexed framebuffer into row-major RGBA8 pixels.
    pub fn colorize<const W: usize, const H: usize>(&self, fb: &FrameBuffer<'_, W, H>) -> Vec<[u8; 4]> {
        let lut = [self.rgba(0), self.rgba(1), self.rgba(2), self.rgba(3)];

        fb.bytes()
            .iter()
            .flat_map(|&byte| (0..4).map(move |i| lut[byte.get_bits(i * 2..i * 2 + 2) as usize]))
            .collect()
    }

    /// Same as [`Palette::colorize`], flattened to bytes for image encoders.
    pub fn colorize_bytes<const W: usize, const H: usize>(&self, fb: &FrameBuffer<'_, W, H>) -> Vec<u8> {
        bytemuck::cast_slice(&self.colorize(fb)).to_vec()
    }
}
