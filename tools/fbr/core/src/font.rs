//! Built-in 8×8 font atlas.
//!
//! Layout is one glyph after another, 8 rows of one byte each, 1bpp MSB-first,
//! starting at code 32 (space). The glyph shapes come from the public-domain
//! `font8x8` basic set, whose rows are stored LSB-first and get bit-reversed here.

use font8x8::legacy::BASIC_LEGACY;

pub const GLYPH_SIZE: usize = 8;
pub const FIRST_GLYPH: i32 = 32;
/// Codes 32..=127.
pub const GLYPH_COUNT: usize = 96;

pub static DEFAULT_FONT: [u8; GLYPH_COUNT * GLYPH_SIZE] = build_default_font();

const fn build_default_font() -> [u8; GLYPH_COUNT * GLYPH_SIZE] {
    let mut atlas = [0u8; GLYPH_COUNT * GLYPH_SIZE];
    let mut i = 0;
    while i < atlas.len() {
        let code = FIRST_GLYPH as usize + i / GLYPH_SIZE;
        atlas[i] = BASIC_LEGACY[code][i % GLYPH_SIZE].reverse_bits();
        i += 1;
    }
    atlas
}

/// Rows of the glyph for `code`, if the atlas has one.
pub fn glyph(code: u8) -> Option<&'static [u8]> {
    let index = (code as usize).checked_sub(FIRST_GLYPH as usize)?;
    DEFAULT_FONT.get(index * GLYPH_SIZE..(index + 1) * GLYPH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn space_is_blank() {
        assert_eq!(glyph(b' '), Some(&[0u8; 8][..]));
    }

    #[test_log::test]
    fn printable_glyphs_have_ink() {
        for code in b'!'..=b'~' {
            let rows = glyph(code).unwrap();
            assert!(rows.iter().any(|&r| r != 0), "glyph {:?} is empty", code as char);
        }
    }

    #[test_log::test]
    fn codes_outside_atlas() {
        assert_eq!(glyph(31), None);
        assert_eq!(glyph(128), None);
        assert!(glyph(127).is_some());
    }

    #[test_log::test]
    fn rows_are_msb_first() {
        // the stem of 'I' covers columns 2 and 3
        let rows = glyph(b'I').unwrap();
        assert_eq!(rows[3].reverse_bits(), BASIC_LEGACY[b'I' as usize][3]);
        assert_eq!(rows[3], 0b0011_0000);
    }
}
