use log::{debug, trace};

use super::Rasterizer;
use crate::framebuffer::FrameBuffer;

/// `dc1` value that switches ellipse drawing off entirely.
pub const OVAL_DISABLED_STROKE: u8 = 0xF;

/// Largest semi-axis that is traced. Keeps every error term well inside `i64`
/// and bounds the step count; larger ellipses are skipped.
pub const OVAL_MAX_SEMI_AXIS: i64 = 1 << 16;

#[inline(always)]
fn narrow(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    #[inline(always)]
    fn plot_quadrants(&mut self, color: u8, x0: i64, y0: i64, x: i64, y: i64) {
        self.fb.set_pixel_clipped(color, narrow(x0 + x), narrow(y0 + y));
        self.fb.set_pixel_clipped(color, narrow(x0 + x), narrow(y0 - y));
        self.fb.set_pixel_clipped(color, narrow(x0 - x), narrow(y0 + y));
        self.fb.set_pixel_clipped(color, narrow(x0 - x), narrow(y0 - y));
    }

    #[inline(always)]
    fn fill_mirrored_rows(&mut self, color: u8, start_x: i64, y0: i64, y: i64, end_x: i64) {
        let (start_x, end_x) = (narrow(start_x), narrow(end_x));
        self.span_clipped(color, start_x, narrow(y0 + y), end_x);
        self.span_clipped(color, start_x, narrow(y0 - y), end_x);
    }

    /// Ellipse inscribed in the `width`×`height` box at `(x, y)`, outlined
    /// with `dc1` and filled with `dc0`.
    ///
    /// The outline is traced with the two-region midpoint algorithm. The
    /// outline is always drawn, `dc1 == 0` included (it wraps to index 3),
    /// unless `dc1` is `0xF`, which suppresses the whole ellipse. The fill is
    /// skipped when `dc0` is transparent.
    pub fn oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let dc = self.draw_colors;
        trace!(target: "raster", "oval ({x}, {y}) {width}x{height}");

        let dc0 = dc.fill();
        let dc1 = dc.stroke();

        if dc1 == OVAL_DISABLED_STROKE {
            debug!(target: "raster", "oval skipped, dc1 is 0xF");
            return;
        }

        let stroke = dc1.wrapping_sub(1) & 0x3;
        let fill = (dc0 != 0).then(|| dc0.wrapping_sub(1) & 0x3);

        let a = (width >> 1) as i64;
        let b = (height >> 1) as i64;
        if a <= 0 || b <= 0 {
            debug!(target: "raster", "oval skipped, degenerate axes {a}x{b}");
            return;
        }
        if a > OVAL_MAX_SEMI_AXIS || b > OVAL_MAX_SEMI_AXIS {
            debug!(target: "raster", "oval skipped, semi-axes {a}x{b} exceed {OVAL_MAX_SEMI_AXIS}");
            return;
        }

        // skip boxes that cannot touch the canvas
        let (x, y) = (x as i64, y as i64);
        if x + 2 * a < 0 || y + 2 * b < 0 || x >= FrameBuffer::<W, H>::WIDTH as i64 || y >= FrameBuffer::<W, H>::HEIGHT as i64 {
            debug!(target: "raster", "oval skipped, entirely offscreen");
            return;
        }

        let x0 = x + a;
        let y0 = y + b;
        let aa2 = a * a * 2;
        let bb2 = b * b * 2;

        // region 1: slope magnitude at most 1, one row per step
        {
            let (mut x, mut y) = (a, 0);
            let (mut dx, mut dy) = ((1 - 2 * a) * b * b, a * a);
            let (mut sx, mut sy) = (bb2 * a, 0);
            let mut e = 0;

            while sx >= sy {
                self.plot_quadrants(stroke, x0, y0, x, y);

                if let Some(fill) = fill {
                    self.fill_mirrored_rows(fill, x0 - x + 1, y0, y, x0 + x);
                }

                y += 1;
                sy += aa2;
                e += dy;
                dy += aa2;
                if 2 * e + dx > 0 {
                    x -= 1;
                    sx -= bb2;
                    e += dx;
                    dx += bb2;
                }
            }
        }

        // region 2: slope magnitude above 1, one column per step
        {
            let (mut x, mut y) = (0, b);
            let (mut dx, mut dy) = (b * b, (1 - 2 * b) * a * a);
            let (mut sx, mut sy) = (0, aa2 * b);
            let mut e = 0;
            // columns advanced since the last row change
            let mut run = 0;

            while sy >= sx {
                self.plot_quadrants(stroke, x0, y0, x, y);

                x += 1;
                sx += bb2;
                e += dx;
                dx += bb2;
                run += 1;
                if 2 * e + dy > 0 {
                    if let Some(fill) = fill {
                        let w = x - run - 1;
                        self.fill_mirrored_rows(fill, x0 - w, y0, y, x0 + w + 1);
                    }

                    y -= 1;
                    sy -= aa2;
                    e += dy;
                    dy += aa2;
                    run = 0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OVAL_MAX_SEMI_AXIS;
    use crate::draw_colors::DrawColors;
    use crate::framebuffer::FrameBuffer;
    use crate::rasterizer::Rasterizer;

    const N: usize = 24;

    fn draw_small(dc: u16, x: i32, y: i32, w: i32, h: i32) -> Vec<String> {
        let mut bytes = [0u8; 16 * 16 / 4];
        let fb = FrameBuffer::<16, 16>::new(&mut bytes).unwrap();
        let mut raster = Rasterizer::new(fb, DrawColors(dc));
        raster.oval(x, y, w, h);

        (0..16)
            .map(|yy| (0..16).map(|xx| char::from(b'0' + raster.framebuffer().get_pixel(xx, yy).unwrap())).collect())
            .collect()
    }

    fn draw(dc: u16, x: i32, y: i32, w: i32, h: i32) -> Vec<Vec<u8>> {
        let mut bytes = [0u8; N * N / 4];
        let fb = FrameBuffer::<N, N>::new(&mut bytes).unwrap();
        let mut raster = Rasterizer::new(fb, DrawColors(dc));
        raster.oval(x, y, w, h);

        (0..N as i32)
            .map(|yy| (0..N as i32).map(|xx| raster.framebuffer().get_pixel(xx, yy).unwrap()).collect())
            .collect()
    }

    #[test_log::test]
    fn disabled_stroke_draws_nothing() {
        let grid = draw(0x00F2, 2, 2, 16, 12);
        assert!(grid.iter().flatten().all(|&px| px == 0));
    }

    #[test_log::test]
    fn degenerate_axes_draw_nothing() {
        for (w, h) in [(1, 10), (10, 1), (0, 0), (-6, 8)] {
            let grid = draw(0x0022, 2, 2, w, h);
            assert!(grid.iter().flatten().all(|&px| px == 0), "{w}x{h}");
        }
    }

    #[test_log::test]
    fn transparent_stroke_nibble_still_outlines() {
        let grid = draw(0x0000, 2, 2, 10, 8);
        assert!(grid.iter().flatten().any(|&px| px == 3));
        assert!(grid.iter().flatten().all(|&px| px == 0 || px == 3));
    }

    #[test_log::test]
    fn stroke_is_mirror_symmetric() {
        let (x, y, w, h) = (3, 4, 16, 10);
        let grid = draw(0x0020, x, y, w, h);
        let (cx, cy) = (x + w / 2, y + h / 2);

        for (py, row) in grid.iter().enumerate() {
            for (px, &c) in row.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let (px, py) = (px as i32, py as i32);
                let mx = (2 * cx - px) as usize;
                let my = (2 * cy - py) as usize;
                assert_eq!(grid[py as usize][mx], c, "horizontal mirror of ({px}, {py})");
                assert_eq!(grid[my][px as usize], c, "vertical mirror of ({px}, {py})");
            }
        }
    }

    #[test_log::test]
    fn extreme_points_touch_the_box() {
        let grid = draw(0x0020, 2, 3, 16, 12);
        // center (10, 9), semi-axes 8 and 6
        assert_eq!(grid[9][2], 1);
        assert_eq!(grid[9][18], 1);
        assert_eq!(grid[3][10], 1);
        assert_eq!(grid[15][10], 1);
        assert_eq!(grid[9][10], 0);
    }

    #[test_log::test]
    fn fill_has_no_gaps_between_outline() {
        let grid = draw(0x0023, 1, 1, 20, 14);
        for row in &grid {
            let Some(first) = row.iter().position(|&px| px != 0) else {
                continue;
            };
            let last = row.iter().rposition(|&px| px != 0).unwrap();
            assert!(row[first..=last].iter().all(|&px| px != 0), "{row:?}");
        }
        // center is fill, not outline
        assert_eq!(grid[8][11], 2);
    }

    #[test_log::test]
    fn clipped_oval_stays_in_bounds() {
        // mostly offscreen on every side; must not panic or wrap rows
        let grid = draw(0x0023, -10, -6, 44, 36);
        assert!(grid.iter().flatten().any(|&px| px != 0));
        let grid = draw(0x0023, 16, 16, 20, 20);
        assert_eq!(grid[23][23], 2);
        assert_eq!(grid[16][20], 0);
    }

    #[test_log::test]
    fn wide_oval_exact_pixels() {
        let expected = [
            "0000000000000000",
            "0000111110000000",
            "0011222221100000",
            "0122222222210000",
            "0122222222210000",
            "0122222222210000",
            "0011222221100000",
            "0000111110000000",
        ];
        let grid = draw_small(0x0023, 1, 1, 11, 7);
        assert_eq!(grid[..8], expected);
        assert!(grid[8..].iter().all(|row| row == "0000000000000000"));
    }

    #[test_log::test]
    fn tall_oval_exact_pixels() {
        // the short rows near the poles come from the second region's run count
        let expected = [
            "0001110000000000",
            "0012221000000000",
            "0122222100000000",
            "0122222100000000",
            "1222222210000000",
            "1222222210000000",
            "1222222210000000",
            "1222222210000000",
            "1222222210000000",
            "1222222210000000",
            "1222222210000000",
            "0122222100000000",
            "0122222100000000",
            "0012221000000000",
            "0001110000000000",
            "0000000000000000",
        ];
        assert_eq!(draw_small(0x0023, 0, 0, 8, 14), expected);
    }

    #[test_log::test]
    fn huge_ovals_are_skipped_without_overflow() {
        for (x, y, w, h) in [
            (-(1 << 21), -(1 << 21), 1 << 22, 1 << 22),
            (0, 0, i32::MAX, i32::MAX),
            (i32::MIN, i32::MIN, i32::MAX, i32::MAX),
            (0, 0, i32::MAX, 20),
        ] {
            let grid = draw(0x0021, x, y, w, h);
            assert!(grid.iter().flatten().all(|&px| px == 0), "({x}, {y}) {w}x{h}");
        }
    }

    #[test_log::test]
    fn largest_oval_covers_canvas_with_fill() {
        let r = OVAL_MAX_SEMI_AXIS as i32;
        let grid = draw(0x0023, 12 - r, 12 - r, 2 * r, 2 * r);
        assert!(grid.iter().flatten().all(|&px| px == 2));
    }

    #[test_log::test]
    fn box_starting_at_the_far_edge_draws_nothing() {
        let grid = draw(0x0023, N as i32, 2, 10, 10);
        assert!(grid.iter().flatten().all(|&px| px == 0));
        let grid = draw(0x0023, 2, N as i32, 10, 10);
        assert!(grid.iter().flatten().all(|&px| px == 0));
    }
}
