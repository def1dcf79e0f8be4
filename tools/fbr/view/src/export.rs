use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use tracing::debug;

use fbr_core::{HostMemory, SCREEN_SIZE};

/// Palette-expanded copy of the framebuffer, upscaled `scale` times with
/// nearest-neighbour sampling.
pub fn to_image(memory: &mut HostMemory<'_>, scale: u32) -> anyhow::Result<RgbaImage> {
    let palette = memory.palette();
    let pixels = palette.colorize_bytes(&memory.framebuffer());

    let side = SCREEN_SIZE as u32;
    let frame = RgbaImage::from_raw(side, side, pixels).context("framebuffer does not fill a 160x160 image")?;
    if scale == 1 {
        return Ok(frame);
    }

    debug!("upscaling {side}x{side} by {scale}");
    Ok(RgbaImage::from_fn(side * scale, side * scale, |x, y| *frame.get_pixel(x / scale, y / scale)))
}

pub fn write_png(memory: &mut HostMemory<'_>, scale: u32, path: &Path) -> anyhow::Result<()> {
    let image = to_image(memory, scale)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
