use log::trace;

use super::Rasterizer;
use crate::blitter::BlitFlags;
use crate::font::{FIRST_GLYPH, GLYPH_SIZE};

/// What a single byte of a text string asks the renderer to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextCode {
    /// `0`: stop rendering, the rest of the string is ignored.
    Terminator,
    /// `10`: next line, back to the starting column.
    Newline,
    /// Anything else: glyph `code - 32` of the font atlas. Control codes give
    /// negative indices, which sample as background.
    Glyph(i32),
}

impl From<u8> for TextCode {
    fn from(code: u8) -> Self {
        match code {
            0 => TextCode::Terminator,
            b'\n' => TextCode::Newline,
            c => TextCode::Glyph(c as i32 - FIRST_GLYPH),
        }
    }
}

impl<'a, const W: usize, const H: usize> Rasterizer<'a, W, H> {
    /// Draws `text` with its top-left corner at `(x, y)`, one 8×8 glyph per
    /// byte. Glyph background uses `dc0`, foreground `dc1`.
    pub fn text(&mut self, text: &[u8], x: i32, y: i32) {
        trace!(target: "raster", "text ({x}, {y}) {} bytes", text.len());

        let font = self.font;
        let size = GLYPH_SIZE as i32;
        let (mut cursor_x, mut cursor_y) = (x, y);

        for &code in text {
            match TextCode::from(code) {
                TextCode::Terminator => return,
                TextCode::Newline => {
                    cursor_y = cursor_y.saturating_add(size);
                    cursor_x = x;
                }
                TextCode::Glyph(index) => {
                    self.blit_sub(font, cursor_x, cursor_y, size, size, 0, index * size, size, BlitFlags::empty());
                    cursor_x = cursor_x.saturating_add(size);
                }
            }
        }
    }

    pub fn text_str(&mut self, text: &str, x: i32, y: i32) {
        self.text(text.as_bytes(), x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::TextCode;
    use crate::draw_colors::DrawColors;
    use crate::framebuffer::FrameBuffer;
    use crate::rasterizer::Rasterizer;

    // glyph 0 (' ') is a solid block, glyph 1 ('!') a single top-left dot
    fn test_font() -> [u8; 16] {
        let mut font = [0u8; 16];
        font[..8].fill(0xFF);
        font[8] = 0b1000_0000;
        font
    }

    fn render(text: &[u8], x: i32, y: i32) -> Vec<(i32, i32)> {
        let font = test_font();
        let mut bytes = [0u8; 32 * 32 / 4];
        let fb = FrameBuffer::<32, 32>::new(&mut bytes).unwrap();
        // background transparent, foreground index 1
        let mut raster = Rasterizer::new(fb, DrawColors(0x0020)).with_font(&font);
        raster.text(text, x, y);

        let mut set = Vec::new();
        for yy in 0..32 {
            for xx in 0..32 {
                if raster.framebuffer().get_pixel(xx, yy) == Some(1) {
                    set.push((xx, yy));
                }
            }
        }
        set
    }

    #[test_log::test]
    fn decodes_control_codes() {
        assert_eq!(TextCode::from(0), TextCode::Terminator);
        assert_eq!(TextCode::from(10), TextCode::Newline);
        assert_eq!(TextCode::from(b' '), TextCode::Glyph(0));
        assert_eq!(TextCode::from(b'A'), TextCode::Glyph(33));
        assert_eq!(TextCode::from(7), TextCode::Glyph(-25));
    }

    #[test_log::test]
    fn glyphs_advance_by_eight() {
        assert_eq!(render(b"!!!", 1, 2), vec![(1, 2), (9, 2), (17, 2)]);
    }

    #[test_log::test]
    fn newline_returns_to_start_column() {
        assert_eq!(render(b"!!\n!", 4, 0), vec![(4, 0), (12, 0), (4, 8)]);
    }

    #[test_log::test]
    fn terminator_stops_rendering() {
        assert_eq!(render(b"!\0!!", 0, 0), vec![(0, 0)]);
    }

    #[test_log::test]
    fn solid_glyph_fills_cell() {
        assert_eq!(render(b" ", 0, 0).len(), 64);
    }

    #[test_log::test]
    fn out_of_atlas_codes_draw_background_only() {
        // control code and a code past the end of the atlas
        assert!(render(&[7, b'~'], 0, 0).is_empty());
    }
}
