use anyhow::{bail, Context};

use fbr_core::{DrawColors, Palette};

fn strip_hex_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s)
}

pub fn draw_colors(s: &str) -> anyhow::Result<DrawColors> {
    let digits = strip_hex_prefix(s);
    let value = u16::from_str_radix(digits, 16).with_context(|| format!("{s:?} is not a 16-bit hex value"))?;
    Ok(DrawColors(value))
}

pub fn palette(s: &str) -> anyhow::Result<Palette> {
    let entries: Vec<&str> = s.split(',').collect();
    if entries.len() != 4 {
        bail!("expected 4 colors, got {}", entries.len());
    }

    let mut colors = [0u32; 4];
    for (slot, entry) in colors.iter_mut().zip(entries) {
        let digits = strip_hex_prefix(entry);
        if digits.len() != 6 {
            bail!("{entry:?} is not an RRGGBB color");
        }
        *slot = u32::from_str_radix(digits, 16).with_context(|| format!("{entry:?} is not an RRGGBB color"))?;
    }
    Ok(Palette(colors))
}
