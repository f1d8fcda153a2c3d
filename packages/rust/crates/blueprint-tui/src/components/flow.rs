use super::{layout, theme};
use blueprint_types::{Accent, FlowSpec};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// One numbered step of a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEntry<'a> {
    /// 1-based position
    pub position: usize,
    /// Step label
    pub label: &'a str,
}

/// A titled, always-visible numbered list of steps
#[derive(Debug, Clone, Copy)]
pub struct FlowRenderer<'a> {
    title: &'a str,
    accent: Accent,
    steps: &'a [&'a str],
    columns: u16,
}

impl<'a> FlowRenderer<'a> {
    /// Create a single-column flow
    pub fn new(title: &'a str, steps: &'a [&'a str], accent: Accent) -> Self {
        Self {
            title,
            accent,
            steps,
            columns: 1,
        }
    }

    /// Create a flow from its static spec
    pub fn from_spec(spec: &'a FlowSpec) -> Self {
        Self::new(spec.title, spec.steps, spec.accent)
    }

    /// Lay the steps out row-major over `columns` columns
    #[must_use]
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Steps with their 1-based positions, in order
    pub fn entries(&self) -> Vec<FlowEntry<'a>> {
        self.steps
            .iter()
            .copied()
            .enumerate()
            .map(|(i, label)| FlowEntry {
                position: i + 1,
                label,
            })
            .collect()
    }

    /// Calculate the required height
    pub fn height(&self) -> u16 {
        layout::grid_rows(self.steps.len(), self.columns).saturating_add(2)
    }

    /// Render the flow
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme::MUTED))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::new()
                    .fg(theme::accent_color(self.accent))
                    .add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(area);
        block.render(area, buf);

        let body = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let cell_width = layout::column_width(body.width, self.columns, layout::GRID_GAP * 2);

        for (i, entry) in self.entries().into_iter().enumerate() {
            let (row, column) = layout::grid_position(i, self.columns);
            let y = body.y.saturating_add(row);
            if y >= body.bottom() {
                break;
            }
            let x = layout::column_x(body.x, column, cell_width, layout::GRID_GAP * 2);
            let line = Line::from(vec![
                Span::styled(format!(" {} ", entry.position), theme::step_badge_style()),
                Span::raw(" "),
                Span::styled(entry.label, Style::new().fg(Color::Gray)),
            ]);
            buf.set_line(x, y, &line, cell_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_one_based_and_ordered() {
        let flow = FlowRenderer::new("Flow", &["A", "B", "C"], Accent::Gold);
        let positions: Vec<_> = flow.entries().iter().map(|e| e.position).collect();
        let labels: Vec<_> = flow.entries().iter().map(|e| e.label).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn test_height_accounts_for_columns() {
        let steps = &["1", "2", "3", "4", "5", "6"];
        assert_eq!(FlowRenderer::new("Flow", steps, Accent::Pink).height(), 8);
        assert_eq!(
            FlowRenderer::new("Flow", steps, Accent::Pink)
                .with_columns(3)
                .height(),
            4
        );
    }

    #[test]
    fn test_empty_flow() {
        let flow = FlowRenderer::new("Nothing", &[], Accent::Purple);
        assert!(flow.entries().is_empty());
        assert_eq!(flow.height(), 2);
    }
}
