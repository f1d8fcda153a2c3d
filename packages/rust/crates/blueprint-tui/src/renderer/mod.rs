//! TUI Renderer - Main rendering loop and terminal management

use crate::{
    components::{BlueprintView, PageLayout},
    event::{Event, EventHandler, EventHandlerConfig, TuiEvent},
    state::AppState,
};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use std::io::{self, stdout};

const KEY_HINTS: &str =
    "[1/2/4/5: Toggle] [Tab: Focus] [Enter: Toggle focused] [j/k: Scroll] [q: Quit]";

/// Terminal modes switched on by the renderer; switched off again on drop.
///
/// The guard exists before the first mode change, so a setup step that fails
/// part-way still leaves a restored terminal behind.
struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    fn enter(enable_mouse: bool) -> io::Result<Self> {
        let mut guard = Self {
            mouse_captured: false,
        };
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        if enable_mouse {
            guard.mouse_captured = true;
            execute!(stdout(), EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(self.mouse_captured) {
            warn!("Failed to restore terminal: {e}");
        }
    }
}

/// Undo raw mode, mouse capture and the alternate screen
fn restore_terminal(mouse_captured: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse_captured {
        execute!(stdout(), DisableMouseCapture)?;
    }
    execute!(stdout(), LeaveAlternateScreen, Show)
}

/// TUI Renderer using Crossterm backend
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    event_handler: EventHandler,
    // Dropped last, after the terminal handle
    _guard: TerminalGuard,
}

impl TuiRenderer {
    /// Create a new TUI renderer
    pub fn new(config: &EventHandlerConfig) -> Result<Self, anyhow::Error> {
        let guard = TerminalGuard::enter(config.enable_mouse)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        let event_handler = EventHandler::new(config);

        Ok(Self {
            terminal,
            event_handler,
            _guard: guard,
        })
    }

    /// Run the main event loop
    pub fn run(&mut self, state: &mut AppState) -> Result<(), anyhow::Error> {
        loop {
            // Render current state
            self.terminal.draw(|f| {
                Self::render_frame(f, state);
            })?;

            // Handle events
            match self.event_handler.next() {
                Ok(Event::Input(event)) => state.apply(event),
                Ok(Event::Tick) => state.apply(TuiEvent::Tick),
                Ok(Event::Error(message)) => {
                    warn!("{message}");
                    break;
                }
                Err(_) => {
                    // Channel closed, exit
                    break;
                }
            }

            // Check if we should quit
            if state.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Render a single frame
    fn render_frame(f: &mut Frame, state: &mut AppState) {
        let area = f.area();
        let viewport = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let (layout, page) = render_page(&state.view(), area.width);
        state.set_frame(layout.height, viewport.height, layout.header_hits());
        blit(&page, state.scroll(), f.buffer_mut(), viewport);

        // Render status bar
        let status_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        let status_text = state.status_message().unwrap_or(KEY_HINTS);
        let style = Style::new().fg(Color::DarkGray);
        Paragraph::new(status_text)
            .style(style)
            .render(status_area, f.buffer_mut());
        Line::styled(format!(" {}/{} ", state.scroll(), state.max_scroll()), style)
            .right_aligned()
            .render(status_area, f.buffer_mut());
    }
}

/// Lay out and draw the whole page off-screen at `width`
pub fn render_page(view: &BlueprintView<'_>, width: u16) -> (PageLayout, Buffer) {
    let layout = view.layout(width);
    let mut page = Buffer::empty(Rect::new(0, 0, width, layout.height));
    view.render(&layout, &mut page);
    debug!("rendered page {}x{}", width, layout.height);
    (layout, page)
}

/// Plain-text rows of a rendered buffer, trailing blanks trimmed
pub fn render_text(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)).map(ratatui::buffer::Cell::symbol))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

/// Copy page rows `scroll..` into `area` of the frame buffer
fn blit(page: &Buffer, scroll: u16, target: &mut Buffer, area: Rect) {
    for dy in 0..area.height {
        let py = scroll.saturating_add(dy);
        if py >= page.area.height {
            break;
        }
        for dx in 0..area.width.min(page.area.width) {
            if let (Some(src), Some(dst)) = (
                page.cell((dx, py)),
                target.cell_mut((area.x + dx, area.y + dy)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
