use super::{icon::glyph, layout, theme};
use crate::state::SectionCoordinator;
use blueprint_types::{Accent, Icon, PanelMode, PanelSpec};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Height of a panel whose body is hidden (borders + header row)
pub const COLLAPSED_HEIGHT: u16 = 3;

/// A titled block of catalogue items bound to one section.
///
/// The panel holds no state of its own: body visibility is read from the
/// [`SectionCoordinator`] passed in on every call. The shared coordinator
/// reference lives in [`BlueprintView`](super::BlueprintView), which hands it
/// to each panel it draws; [`on_header_click`](Self::on_header_click) takes it
/// mutably so a panel never holds a borrow across a toggle.
#[derive(Debug, Clone, Copy)]
pub struct PanelRenderer<'a> {
    title: &'a str,
    icon: Icon,
    accent: Accent,
    items: &'a [&'a str],
    mode: PanelMode,
    focused: bool,
}

impl<'a> PanelRenderer<'a> {
    /// Create a new panel
    pub fn new(
        title: &'a str,
        icon: Icon,
        items: &'a [&'a str],
        accent: Accent,
        mode: PanelMode,
    ) -> Self {
        Self {
            title,
            icon,
            accent,
            items,
            mode,
            focused: false,
        }
    }

    /// Create a panel from its static spec
    pub fn from_spec(spec: &'a PanelSpec) -> Self {
        Self::new(spec.title, spec.icon, spec.items, spec.accent, spec.mode)
    }

    /// Draw the panel with a focus highlight
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get the title
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Whether the bound section is the expanded one
    pub fn is_expanded(&self, coordinator: &SectionCoordinator) -> bool {
        self.mode
            .section()
            .is_some_and(|section| coordinator.is_expanded(section))
    }

    /// Whether the item grid is shown
    pub fn is_body_visible(&self, coordinator: &SectionCoordinator) -> bool {
        match self.mode {
            PanelMode::AlwaysVisible => true,
            PanelMode::Toggleable { section } => coordinator.is_expanded(section),
        }
    }

    /// Header click; returns whether it toggled anything
    pub fn on_header_click(&self, coordinator: &mut SectionCoordinator) -> bool {
        match self.mode {
            PanelMode::Toggleable { section } => {
                coordinator.toggle(section);
                true
            }
            PanelMode::AlwaysVisible => false,
        }
    }

    /// Chevron shown at the right of the header (toggleable panels only)
    pub fn chevron(&self, coordinator: &SectionCoordinator) -> Option<Icon> {
        match self.mode {
            PanelMode::AlwaysVisible => None,
            PanelMode::Toggleable { section } if coordinator.is_expanded(section) => {
                Some(Icon::ChevronDown)
            }
            PanelMode::Toggleable { .. } => Some(Icon::ChevronRight),
        }
    }

    /// Items currently on screen (empty while the body is hidden)
    pub fn visible_items(&self, coordinator: &SectionCoordinator) -> &'a [&'a str] {
        if self.is_body_visible(coordinator) {
            self.items
        } else {
            &[]
        }
    }

    /// Item grid columns for a given inner width
    pub fn item_columns(inner_width: u16) -> u16 {
        layout::columns_for(inner_width, &[(90, 3), (56, 2)], 1)
    }

    /// Calculate the required height at `width`
    pub fn height(&self, width: u16, coordinator: &SectionCoordinator) -> u16 {
        let items = self.visible_items(coordinator);
        if items.is_empty() {
            return COLLAPSED_HEIGHT;
        }
        let columns = Self::item_columns(Self::body_width(width));
        // +1 for the spacer under the header
        COLLAPSED_HEIGHT + 1 + layout::grid_rows(items.len(), columns)
    }

    fn body_width(width: u16) -> u16 {
        width.saturating_sub(4)
    }

    /// Render the panel
    pub fn render(&self, area: Rect, buf: &mut Buffer, coordinator: &SectionCoordinator) {
        let expanded = self.is_expanded(coordinator);
        let border_style = if self.focused {
            Style::new()
                .fg(theme::accent_color(self.accent))
                .add_modifier(Modifier::BOLD)
        } else if expanded {
            Style::new().fg(Color::White)
        } else {
            Style::new().fg(theme::MUTED)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }
        let body = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", glyph(self.icon)),
                theme::badge_style(self.accent),
            ),
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(body.x, body.y, &header, body.width.saturating_sub(2));

        if let Some(chevron) = self.chevron(coordinator) {
            buf.set_string(
                body.right().saturating_sub(1),
                body.y,
                glyph(chevron),
                Style::new().fg(Color::White),
            );
        }

        let items = self.visible_items(coordinator);
        let columns = Self::item_columns(body.width);
        let cell_width = layout::column_width(body.width, columns, layout::GRID_GAP);
        let style = Style::new().fg(Color::Gray);
        for (i, item) in items.iter().enumerate() {
            let (row, column) = layout::grid_position(i, columns);
            let y = body.y.saturating_add(2).saturating_add(row);
            if y >= body.bottom() {
                break;
            }
            let x = layout::column_x(body.x, column, cell_width, layout::GRID_GAP);
            buf.set_stringn(x, y, format!("• {item}"), usize::from(cell_width), style);
        }
    }
}
