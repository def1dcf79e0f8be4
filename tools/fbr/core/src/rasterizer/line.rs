use log::{debug, trace};

use super::Rasterizer;
use crate::draw_colors::DrawColors;
use crate::framebuffer::FrameBuffer;

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    /// Clips `start_x..end_x` on row `y` to the canvas, then span-fills what is left.
    pub(crate) fn span_clipped(&mut self, color: u8, start_x: i32, y: i32, end_x: i32) {
        if y < 0 || y >= FrameBuffer::<W, H>::HEIGHT {
            return;
        }
        let start_x = start_x.max(0);
        let end_x = end_x.min(FrameBuffer::<W, H>::WIDTH);
        if start_x < end_x {
            self.fb.fill_row(color, start_x, y, end_x);
        }
    }

    /// Horizontal run of `len` pixels from `(x, y)` rightwards, in `dc0`.
    pub fn hline(&mut self, x: i32, y: i32, len: i32) {
        let dc = self.draw_colors;
        trace!(target: "raster", "hline ({x}, {y}) len {len}");

        let Some(stroke) = DrawColors::resolve_nibble(dc.fill()) else {
            debug!(target: "raster", "hline skipped, dc0 is transparent");
            return;
        };
        self.span_clipped(stroke, x, y, x.saturating_add(len));
    }

    /// Vertical run of `len` pixels from `(x, y)` downwards, in `dc0`.
    pub fn vline(&mut self, x: i32, y: i32, len: i32) {
        let dc = self.draw_colors;
        trace!(target: "raster", "vline ({x}, {y}) len {len}");

        let end_y = y.saturating_add(len);
        if end_y <= 0 || x < 0 || x >= FrameBuffer::<W, H>::WIDTH {
            return;
        }

        let Some(stroke) = DrawColors::resolve_nibble(dc.fill()) else {
            debug!(target: "raster", "vline skipped, dc0 is transparent");
            return;
        };

        let start_y = y.max(0);
        let end_y = end_y.min(FrameBuffer::<W, H>::HEIGHT);
        for yy in start_y..end_y {
            self.fb.set_pixel(stroke, x, yy);
        }
    }

    /// Line between two points, both included, in `dc0`.
    ///
    /// The walk always runs top to bottom; the endpoints are swapped when
    /// needed, which makes the plotted set independent of argument order.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dc = self.draw_colors;
        trace!(target: "raster", "line ({x1}, {y1}) -> ({x2}, {y2})");

        let Some(stroke) = DrawColors::resolve_nibble(dc.fill()) else {
            debug!(target: "raster", "line skipped, dc0 is transparent");
            return;
        };

        let (mut x1, mut y1, x2, y2) = if y1 > y2 {
            (x2 as i64, y2 as i64, x1 as i64, y1 as i64)
        } else {
            (x1 as i64, y1 as i64, x2 as i64, y2 as i64)
        };

        let dx = (x2 - x1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let dy = y2 - y1;

        // error term kept at twice its size so odd starting values stay exact
        let mut err = if dx > dy { dx } else { -dy };

        loop {
            self.fb.set_pixel_clipped(stroke, x1 as i32, y1 as i32);
            if x1 == x2 && y1 == y2 {
                break;
            }
            let e2 = err;
            if e2 > -2 * dx {
                err -= 2 * dy;
                x1 += sx;
            }
            if e2 < 2 * dy {
                err += 2 * dx;
                y1 += 1;
            }
        }
    }
}
