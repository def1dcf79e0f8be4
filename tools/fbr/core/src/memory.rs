//! # Host Memory Map
//!
//! The console exposes its display state as plain bytes in the cartridge's
//! linear memory:
//!
//! | Address  | Size   | Contents                                  |
//! |----------|--------|-------------------------------------------|
//! | `$0004`  | 16     | palette, 4 × `u32` little-endian `0xRRGGBB` |
//! | `$0014`  | 2      | draw colors, `u16` little-endian          |
//! | `$00A0`  | 6400   | framebuffer, 160×160 at 2bpp              |
//!
//! [`HostMemory`] borrows that region from the host and hands out typed views.
//! A [`Rasterizer`] taken from it holds the framebuffer borrow, so nothing
//! else can touch the memory while a draw is in flight.

use log::debug;

use crate::draw_colors::{DrawColors, Palette, DEFAULT_DRAW_COLORS, DEFAULT_PALETTE};
use crate::error::Error;
use crate::framebuffer::{FrameBuffer, FRAMEBUFFER_SIZE};
use crate::rasterizer::Rasterizer;

pub const PALETTE_ADDR: usize = 0x04;
pub const DRAW_COLORS_ADDR: usize = 0x14;
pub const FRAMEBUFFER_ADDR: usize = 0xa0;
pub const MEMORY_SIZE: usize = 0x10000;

const FRAMEBUFFER_END: usize = FRAMEBUFFER_ADDR + FRAMEBUFFER_SIZE;

pub struct HostMemory<'m> {
    bytes: &'m mut [u8],
}

impl<'m> HostMemory<'m> {
    pub fn new(bytes: &'m mut [u8]) -> Result<Self, Error> {
        if bytes.len() < FRAMEBUFFER_END {
            return Err(Error::MemoryTooSmall {
                required: FRAMEBUFFER_END,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Power-on state: default palette and draw colors, blank screen.
    pub fn reset(&mut self) {
        debug!("resetting display memory");
        self.set_palette(Palette(DEFAULT_PALETTE));
        self.set_draw_colors(DrawColors(DEFAULT_DRAW_COLORS));
        self.framebuffer_bytes_mut().fill(0);
    }

    pub fn palette(&self) -> Palette {
        let mut colors = [0u32; 4];
        for (i, color) in colors.iter_mut().enumerate() {
            let at = PALETTE_ADDR + i * 4;
            *color = u32::from_le_bytes([self.bytes[at], self.bytes[at + 1], self.bytes[at + 2], self.bytes[at + 3]]);
        }
        Palette(colors)
    }

    pub fn set_palette(&mut self, palette: Palette) {
        for (i, color) in palette.0.iter().enumerate() {
            let at = PALETTE_ADDR + i * 4;
            self.bytes[at..at + 4].copy_from_slice(&color.to_le_bytes());
        }
    }

    pub fn draw_colors(&self) -> DrawColors {
        DrawColors(u16::from_le_bytes([self.bytes[DRAW_COLORS_ADDR], self.bytes[DRAW_COLORS_ADDR + 1]]))
    }

    pub fn set_draw_colors(&mut self, draw_colors: DrawColors) {
        self.bytes[DRAW_COLORS_ADDR..DRAW_COLORS_ADDR + 2].copy_from_slice(&draw_colors.0.to_le_bytes());
    }

    pub fn framebuffer_bytes(&self) -> &[u8] {
        &self.bytes[FRAMEBUFFER_ADDR..FRAMEBUFFER_END]
    }

    fn framebuffer_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[FRAMEBUFFER_ADDR..FRAMEBUFFER_END]
    }

    pub fn framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::from_exact(self.framebuffer_bytes_mut())
    }

    /// Starts a draw session with the draw colors as they are right now.
    pub fn rasterizer(&mut self) -> Rasterizer<'_> {
        let draw_colors = self.draw_colors();
        Rasterizer::new(self.framebuffer(), draw_colors)
    }
}
