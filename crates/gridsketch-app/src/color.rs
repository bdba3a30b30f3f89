//! Color string conversions for theme config and CSS.

use peniko::Color;

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(color: &str) -> Option<Color> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            255,
        )),
        6 => Some(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

/// CSS `rgba(...)` string for a Canvas2D fill or stroke style.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({}, {}, {}, {})",
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    )
}
