use super::theme;
use blueprint_types::Swatch;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Height of a swatch card (borders + colour bar + name + value)
pub const SWATCH_HEIGHT: u16 = 5;

/// Colour palette card
#[derive(Debug, Clone, Copy)]
pub struct SwatchCard<'a> {
    swatch: &'a Swatch,
}

impl<'a> SwatchCard<'a> {
    /// Card for one palette entry
    pub fn new(swatch: &'a Swatch) -> Self {
        Self { swatch }
    }

    /// Draw the colour bar, name and value into `area`
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme::MUTED));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let bar = Rect { height: 1, ..inner };
        buf.set_style(bar, Style::new().bg(theme::swatch_color(self.swatch.value)));

        let name_style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
        if inner.height > 1 {
            buf.set_stringn(
                inner.x,
                inner.y + 1,
                self.swatch.name,
                usize::from(inner.width),
                name_style,
            );
        }
        if inner.height > 2 {
            buf.set_stringn(
                inner.x,
                inner.y + 2,
                self.swatch.value,
                usize::from(inner.width),
                Style::new().fg(theme::MUTED),
            );
        }
    }
}
