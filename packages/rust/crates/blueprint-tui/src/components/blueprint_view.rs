use super::flow::FlowRenderer;
use super::icon::glyph;
use super::layout::{self, GRID_GAP};
use super::panel::PanelRenderer;
use super::swatch::{SWATCH_HEIGHT, SwatchCard};
use super::theme;
use crate::state::SectionCoordinator;
use blueprint_types::{Blueprint, Icon};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page width at which the phase panels sit two to a row
pub const PANEL_GRID_BREAKPOINT: u16 = 100;

/// Screen area that toggles a panel when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderHit {
    /// Area in page coordinates
    pub area: Rect,
    /// Index into the blueprint's panels
    pub panel: usize,
}

impl HeaderHit {
    /// Check whether a page position falls on this header
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// What a placed block draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Title and tagline
    Header,
    /// Section heading line
    Heading {
        /// Glyph before the text
        icon: Icon,
        /// Heading text
        text: &'static str,
    },
    /// Palette card by index
    Swatch(usize),
    /// Phase panel by index
    Panel(usize),
    /// User flow by index
    Flow(usize),
    /// Start-order checklist
    StartOrder {
        /// Step columns
        columns: u16,
    },
    /// Feature badges
    Footer,
}

/// A block and its area in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBlock {
    /// What is drawn
    pub kind: BlockKind,
    /// Where, in page coordinates
    pub area: Rect,
}

/// Full-height page layout for one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width in cells
    pub width: u16,
    /// Total page height in rows
    pub height: u16,
    /// Blocks in drawing order
    pub blocks: Vec<PlacedBlock>,
}

impl PageLayout {
    /// Area of the first block of `kind`
    pub fn area_of(&self, kind: BlockKind) -> Option<Rect> {
        self.blocks.iter().find(|b| b.kind == kind).map(|b| b.area)
    }

    /// Clickable header areas of every panel
    pub fn header_hits(&self) -> Vec<HeaderHit> {
        self.blocks
            .iter()
            .filter_map(|block| match block.kind {
                BlockKind::Panel(panel) => Some(HeaderHit {
                    area: Rect {
                        height: block.area.height.min(2),
                        ..block.area
                    },
                    panel,
                }),
                _ => None,
            })
            .collect()
    }
}

struct PageBuilder {
    width: u16,
    y: u16,
    blocks: Vec<PlacedBlock>,
}

impl PageBuilder {
    fn full(&mut self, kind: BlockKind, height: u16) {
        self.blocks.push(PlacedBlock {
            kind,
            area: Rect::new(0, self.y, self.width, height),
        });
        self.y = self.y.saturating_add(height);
    }

    fn gap(&mut self) {
        self.y = self.y.saturating_add(GRID_GAP);
    }

    /// Place `cells` side by side; every cell is stretched to the tallest
    fn row(&mut self, cells: &[(BlockKind, u16)], columns: u16) {
        if cells.is_empty() {
            return;
        }
        let width = layout::column_width(self.width, columns, GRID_GAP);
        let height = cells.iter().map(|(_, h)| *h).max().unwrap_or(0);
        for (column, (kind, _)) in (0u16..).zip(cells) {
            self.blocks.push(PlacedBlock {
                kind: *kind,
                area: Rect::new(
                    layout::column_x(0, column, width, GRID_GAP),
                    self.y,
                    width,
                    height,
                ),
            });
        }
        self.y = self.y.saturating_add(height);
    }

    fn grid(&mut self, cells: &[(BlockKind, u16)], columns: u16) {
        for chunk in cells.chunks(usize::from(columns.max(1))) {
            self.row(chunk, columns);
            self.gap();
        }
    }
}

/// The whole blueprint page: header, palette, phase panels, flows, start
/// order and footer, wired to one [`SectionCoordinator`].
#[derive(Debug, Clone, Copy)]
pub struct BlueprintView<'a> {
    blueprint: &'a Blueprint,
    coordinator: &'a SectionCoordinator,
    focused: Option<usize>,
}

impl<'a> BlueprintView<'a> {
    /// Create a view over `blueprint` reading expansion from `coordinator`
    pub fn new(blueprint: &'a Blueprint, coordinator: &'a SectionCoordinator) -> Self {
        Self {
            blueprint,
            coordinator,
            focused: None,
        }
    }

    /// Highlight the panel at `index`
    #[must_use]
    pub fn with_focus(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    /// Panel renderer for the panel at `index`
    pub fn panel(&self, index: usize) -> Option<PanelRenderer<'a>> {
        self.blueprint
            .panels
            .get(index)
            .map(|spec| PanelRenderer::from_spec(spec).focused(self.focused == Some(index)))
    }

    /// Flow and start-order column count at `width`
    pub fn flow_columns(width: u16) -> u16 {
        layout::columns_for(width, &[(120, 3), (80, 2)], 1)
    }

    /// Lay the page out at `width`
    pub fn layout(&self, width: u16) -> PageLayout {
        let mut page = PageBuilder {
            width,
            y: 0,
            blocks: Vec::new(),
        };

        page.full(BlockKind::Header, 3);

        page.full(
            BlockKind::Heading {
                icon: Icon::Palette,
                text: self.blueprint.foundation_heading,
            },
            1,
        );
        let swatch_columns = layout::columns_for(width, &[(80, 4)], 2);
        let swatches: Vec<_> = (0..self.blueprint.swatches.len())
            .map(|i| (BlockKind::Swatch(i), SWATCH_HEIGHT))
            .collect();
        page.grid(&swatches, swatch_columns);

        self.layout_panels(&mut page);

        page.full(
            BlockKind::Heading {
                icon: Icon::Users,
                text: self.blueprint.flows_heading,
            },
            1,
        );
        let flow_columns = Self::flow_columns(width);
        let flows: Vec<_> = self
            .blueprint
            .flows
            .iter()
            .enumerate()
            .map(|(i, spec)| (BlockKind::Flow(i), FlowRenderer::from_spec(spec).height()))
            .collect();
        page.grid(&flows, flow_columns);

        let start_order = FlowRenderer::from_spec(&self.blueprint.start_order)
            .with_columns(flow_columns);
        page.full(
            BlockKind::StartOrder {
                columns: flow_columns,
            },
            start_order.height(),
        );
        page.gap();

        page.full(BlockKind::Footer, 1);

        PageLayout {
            width,
            height: page.y,
            blocks: page.blocks,
        }
    }

    /// Phase panels in document order; an expanded panel takes a row to itself
    fn layout_panels(&self, page: &mut PageBuilder) {
        let columns = if page.width >= PANEL_GRID_BREAKPOINT { 2 } else { 1 };
        let cell_width = layout::column_width(page.width, columns, GRID_GAP);
        let mut pending: Vec<(BlockKind, u16)> = Vec::new();

        for i in 0..self.blueprint.panels.len() {
            let Some(panel) = self.panel(i) else {
                continue;
            };
            if columns > 1 && panel.is_expanded(self.coordinator) {
                page.row(&pending, columns);
                if !pending.is_empty() {
                    page.gap();
                }
                pending.clear();
                page.full(BlockKind::Panel(i), panel.height(page.width, self.coordinator));
                page.gap();
                continue;
            }
            pending.push((BlockKind::Panel(i), panel.height(cell_width, self.coordinator)));
            if pending.len() == usize::from(columns) {
                page.row(&pending, columns);
                page.gap();
                pending.clear();
            }
        }
        if !pending.is_empty() {
            page.row(&pending, columns);
            page.gap();
        }
    }

    /// Render every block of `layout`
    pub fn render(&self, layout: &PageLayout, buf: &mut Buffer) {
        for block in &layout.blocks {
            let area = block.area.intersection(buf.area);
            if area.is_empty() {
                continue;
            }
            match block.kind {
                BlockKind::Header => self.render_header(area, buf),
                BlockKind::Heading { icon, text } => {
                    let line = Line::from(vec![
                        Span::styled(glyph(icon), Style::new().fg(Color::White)),
                        Span::raw(" "),
                        Span::styled(
                            text,
                            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ]);
                    buf.set_line(area.x, area.y, &line, area.width);
                }
                BlockKind::Swatch(i) => {
                    if let Some(swatch) = self.blueprint.swatches.get(i) {
                        SwatchCard::new(swatch).render(area, buf);
                    }
                }
                BlockKind::Panel(i) => {
                    if let Some(panel) = self.panel(i) {
                        panel.render(area, buf, self.coordinator);
                    }
                }
                BlockKind::Flow(i) => {
                    if let Some(spec) = self.blueprint.flows.get(i) {
                        FlowRenderer::from_spec(spec).render(area, buf);
                    }
                }
                BlockKind::StartOrder { columns } => {
                    FlowRenderer::from_spec(&self.blueprint.start_order)
                        .with_columns(columns)
                        .render(area, buf);
                }
                BlockKind::Footer => self.render_footer(area, buf),
            }
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", glyph(Icon::Crown)),
                theme::step_badge_style(),
            ),
            Span::raw(" "),
            Span::styled(
                self.blueprint.title,
                Style::new().fg(theme::GOLD).add_modifier(Modifier::BOLD),
            ),
        ])
        .centered();
        let tagline = Line::from(Span::styled(
            self.blueprint.tagline,
            Style::new().fg(Color::Gray),
        ))
        .centered();

        Paragraph::new(vec![title, tagline]).render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, badge) in self.blueprint.badges.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::raw(format!("{} {}", glyph(badge.icon), badge.label)));
        }
        let line = Line::from(spans)
            .style(Style::new().fg(theme::MUTED))
            .centered();
        Paragraph::new(line).render(area, buf);
    }
}
