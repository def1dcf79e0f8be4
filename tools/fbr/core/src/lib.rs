#![cfg_attr(not(test), no_std)]
#![allow(clippy::too_many_arguments)]
extern crate alloc;

pub mod blitter;
pub mod draw_colors;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod memory;
pub mod rasterizer;

pub use blitter::BlitFlags;
pub use draw_colors::{DrawColors, Palette, DEFAULT_DRAW_COLORS, DEFAULT_PALETTE};
pub use error::Error;
pub use framebuffer::{FrameBuffer, FRAMEBUFFER_SIZE, SCREEN_SIZE};
pub use memory::HostMemory;
pub use rasterizer::{Rasterizer, TextCode};
