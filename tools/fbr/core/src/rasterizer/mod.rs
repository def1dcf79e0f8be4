//! # Rasterizer
//!
//! [`Rasterizer`] turns drawing calls into packed pixel writes. It borrows the
//! host's framebuffer for as long as it lives and carries a snapshot of the
//! draw-color register; every call reads that snapshot once on entry, so a
//! draw always runs with one consistent set of colors.
//!
//! ```ignore
//! let mut memory = HostMemory::new(&mut ram)?;
//! memory.set_draw_colors(DrawColors(0x0042));
//!
//! let mut raster = memory.rasterizer();
//! raster.rect(10, 10, 32, 16);
//! raster.oval(60, 20, 40, 30);
//! raster.line(0, 0, 159, 159);
//! raster.text(b"HELLO\nWORLD", 8, 100);
//! ```
//!
//! Nothing here can fail. Offscreen geometry is clipped, transparent colors
//! skip the write, and degenerate sizes draw nothing.

mod line;
mod oval;
mod rect;
mod text;

pub use text::TextCode;

use crate::draw_colors::DrawColors;
use crate::font::DEFAULT_FONT;
use crate::framebuffer::{FrameBuffer, SCREEN_SIZE};

pub struct Rasterizer<'a, const W: usize = SCREEN_SIZE, const H: usize = SCREEN_SIZE> {
    pub(crate) fb: FrameBuffer<'a, W, H>,
    pub(crate) draw_colors: DrawColors,
    pub(crate) font: &'a [u8],
}

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    pub fn new(fb: FrameBuffer<'a, W, H>, draw_colors: DrawColors) -> Self {
        Self {
            fb,
            draw_colors,
            font: &DEFAULT_FONT,
        }
    }

    /// Replaces the built-in font with a host-supplied 8×8 1bpp atlas.
    pub fn with_font(mut self, font: &'a [u8]) -> Self {
        self.font = font;
        self
    }

    pub fn draw_colors(&self) -> DrawColors {
        self.draw_colors
    }

    pub fn set_draw_colors(&mut self, draw_colors: DrawColors) {
        self.draw_colors = draw_colors;
    }

    pub fn framebuffer(&self) -> &FrameBuffer<'a, W, H> {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<'a, W, H> {
        &mut self.fb
    }

    pub fn into_framebuffer(self) -> FrameBuffer<'a, W, H> {
        self.fb
    }

    pub fn clear(&mut self) {
        self.fb.clear();
    }
}
