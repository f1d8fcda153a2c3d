//! Glyphs for icon handles

use blueprint_types::Icon;

/// Terminal glyph for an icon handle
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Crown => "♛",
        Icon::Palette => "◐",
        Icon::Layout => "▦",
        Icon::Users => "☺",
        Icon::Smartphone => "▯",
        Icon::Play => "▶",
        Icon::ChevronDown => "▾",
        Icon::ChevronRight => "▸",
        Icon::Sparkles => "✦",
        Icon::Zap => "ϟ",
        Icon::Heart => "♥",
        Icon::Star => "★",
    }
}
