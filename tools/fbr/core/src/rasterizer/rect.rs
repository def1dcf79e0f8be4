use log::{debug, trace};

use super::Rasterizer;
use crate::draw_colors::DrawColors;
use crate::framebuffer::FrameBuffer;

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    /// Rectangle filled with `dc0` and outlined with `dc1`.
    ///
    /// With an outline the fill is inset by one pixel on every side, so the
    /// border is never painted over. Top and bottom edges follow the clamped
    /// rectangle; left and right edges are only drawn when the real edge is
    /// on the canvas.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let dc = self.draw_colors;
        trace!(target: "raster", "rect ({x}, {y}) {width}x{height}");

        let end_x_unclamped = x.saturating_add(width);
        let end_y_unclamped = y.saturating_add(height);

        let start_x = x.max(0);
        let start_y = y.max(0);
        let end_x = end_x_unclamped.min(FrameBuffer::<W, H>::WIDTH);
        let end_y = end_y_unclamped.min(FrameBuffer::<W, H>::HEIGHT);

        if start_x >= end_x || start_y >= end_y {
            debug!(target: "raster", "rect skipped, nothing left after clipping");
            return;
        }

        let fill = DrawColors::resolve_nibble(dc.fill());
        let stroke = DrawColors::resolve_nibble(dc.stroke());
        let inset = stroke.is_some() as i32;

        if let Some(fill) = fill {
            let (fill_start, fill_end) = (start_x + inset, end_x - inset);
            if fill_start < fill_end {
                for yy in (start_y + inset)..(end_y - inset) {
                    self.fb.fill_row(fill, fill_start, yy, fill_end);
                }
            }
        }

        if let Some(stroke) = stroke {
            // left edge
            if x >= 0 && x < FrameBuffer::<W, H>::WIDTH {
                for yy in start_y..(end_y - 1) {
                    self.fb.set_pixel(stroke, x, yy);
                }
            }

            // right edge
            if end_x_unclamped <= FrameBuffer::<W, H>::WIDTH {
                for yy in start_y..(end_y - 1) {
                    self.fb.set_pixel(stroke, end_x - 1, yy);
                }
            }

            // top and bottom edges
            self.fb.fill_row(stroke, start_x, start_y, end_x);
            self.fb.fill_row(stroke, start_x, end_y - 1, end_x);
        }
    }
}
