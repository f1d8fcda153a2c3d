//! Colours shared by the blueprint components

use blueprint_types::Accent;
use ratatui::style::{Color, Modifier, Style};

/// Page background the glass swatches are blended over (purple-900)
pub const PAGE_BACKGROUND: (u8, u8, u8) = (0x58, 0x1c, 0x87);

/// Gold used for step badges and the page title
pub const GOLD: Color = Color::Rgb(0xfa, 0xcc, 0x15);

/// Dimmed text
pub const MUTED: Color = Color::Rgb(0xa1, 0xa1, 0xaa);

/// Foreground colour of an accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Gold => GOLD,
        Accent::Pink => Color::Rgb(0xec, 0x48, 0x99),
        Accent::Purple => Color::Rgb(0xc0, 0x84, 0xfc),
        Accent::Violet => Color::Rgb(0x93, 0x33, 0xea),
        Accent::Teal => Color::Rgb(0x14, 0xb8, 0xa6),
    }
}

/// Icon badge style: dark glyph on the accent colour
pub fn badge_style(accent: Accent) -> Style {
    let fg = match accent {
        Accent::Gold => Color::Black,
        _ => Color::White,
    };
    Style::new()
        .fg(fg)
        .bg(accent_color(accent))
        .add_modifier(Modifier::BOLD)
}

/// Numbered step badge style
pub fn step_badge_style() -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(GOLD)
        .add_modifier(Modifier::BOLD)
}

/// Resolve a CSS colour value to a terminal colour.
///
/// `#RRGGBB` maps to true colour, `rgba(r,g,b,a)` is alpha-blended over
/// [`PAGE_BACKGROUND`], anything else falls back to the terminal default.
pub fn swatch_color(value: &str) -> Color {
    parse_hex(value)
        .or_else(|| parse_rgba(value))
        .unwrap_or(Color::Reset)
}

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_rgba(value: &str) -> Option<Color> {
    let inner = value
        .trim()
        .strip_prefix("rgba(")?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let &[r, g, b, a] = parts.as_slice() else {
        return None;
    };
    let alpha: f32 = a.parse().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    let (bg_r, bg_g, bg_b) = PAGE_BACKGROUND;
    let blend = |fg: &str, bg: u8| -> Option<u8> {
        let fg: u8 = fg.parse().ok()?;
        let mixed = f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(mixed.round().clamp(0.0, 255.0) as u8)
    };
    Some(Color::Rgb(blend(r, bg_r)?, blend(g, bg_g)?, blend(b, bg_b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_swatch() {
        assert_eq!(swatch_color("#FFD700"), Color::Rgb(0xff, 0xd7, 0x00));
        assert_eq!(swatch_color("#8a2be2"), Color::Rgb(0x8a, 0x2b, 0xe2));
    }

    #[test]
    fn test_rgba_swatch_blends_over_background() {
        // 255 * 0.1 + bg * 0.9
        assert_eq!(
            swatch_color("rgba(255,255,255,0.1)"),
            Color::Rgb(105, 51, 147)
        );
        assert_eq!(swatch_color("rgba(0, 0, 0, 1)"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_unparseable_swatch_uses_default() {
        assert_eq!(swatch_color("gold"), Color::Reset);
        assert_eq!(swatch_color("#FFF"), Color::Reset);
        assert_eq!(swatch_color("rgba(1,2,3)"), Color::Reset);
        assert_eq!(swatch_color("rgba(1,2,3,2)"), Color::Reset);
    }
}
