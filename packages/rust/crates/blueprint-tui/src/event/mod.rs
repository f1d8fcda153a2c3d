//! Event handling for TUI - Keyboard, mouse and timing events

use blueprint_types::SectionId;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// TUI-specific event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// q, Esc or Ctrl-c pressed - exit
    Quit,
    /// Section shortcut (1, 2, 4, 5) pressed
    ToggleSection(SectionId),
    /// Enter or Space pressed - toggle focused panel
    ToggleFocused,
    /// Tab pressed - focus next panel
    NextPanel,
    /// Shift-Tab pressed - focus previous panel
    PrevPanel,
    /// Arrow down, j or wheel down
    ScrollDown,
    /// Arrow up, k or wheel up
    ScrollUp,
    /// Page Down
    PageDown,
    /// Page Up
    PageUp,
    /// Home or g
    Top,
    /// End or G
    Bottom,
    /// Left mouse button pressed at a screen cell
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Window resize
    Resize(u16, u16),
    /// Tick event (periodic)
    Tick,
}

/// Event from the input system
#[derive(Debug, Clone)]
pub enum Event {
    /// Input event (keyboard, mouse)
    Input(TuiEvent),
    /// Periodic tick
    Tick,
    /// Error occurred
    Error(String),
}

/// Convert Crossterm event to TuiEvent
pub fn map_crossterm_event(event: CrosstermEvent) -> Option<TuiEvent> {
    match event {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => map_key(code, modifiers),
        CrosstermEvent::Mouse(MouseEvent {
            kind, column, row, ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::Click { column, row }),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            _ => None,
        },
        CrosstermEvent::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<TuiEvent> {
    // Ctrl-c: Quit
    if modifiers.contains(KeyModifiers::CONTROL) {
        return (code == KeyCode::Char('c')).then_some(TuiEvent::Quit);
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(TuiEvent::Quit),
        KeyCode::Char(c @ ('1'..='9')) => SectionId::from_shortcut(c).map(TuiEvent::ToggleSection),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TuiEvent::ToggleFocused),
        KeyCode::Tab => Some(TuiEvent::NextPanel),
        KeyCode::BackTab => Some(TuiEvent::PrevPanel),
        KeyCode::Down | KeyCode::Char('j') => Some(TuiEvent::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(TuiEvent::ScrollUp),
        KeyCode::PageDown => Some(TuiEvent::PageDown),
        KeyCode::PageUp => Some(TuiEvent::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(TuiEvent::Top),
        KeyCode::End | KeyCode::Char('G') => Some(TuiEvent::Bottom),
        _ => None,
    }
}

/// Event handler configuration
#[derive(Debug, Clone)]
pub struct EventHandlerConfig {
    /// Tick rate in milliseconds
    pub tick_rate: Duration,
    /// Whether to enable mouse events
    pub enable_mouse: bool,
}

impl Default for EventHandlerConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            enable_mouse: true,
        }
    }
}

/// Event handler for TUI
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(config: &EventHandlerConfig) -> Self {
        let (sender, receiver) = mpsc::channel();

        // Spawn input thread
        let tick_rate = config.tick_rate;
        thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                // Calculate time until next tick
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                // Poll for events with timeout
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(raw) => {
                            if let Some(tui_event) = map_crossterm_event(raw) {
                                if sender.send(Event::Input(tui_event)).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(err) => {
                            let _ = sender.send(Event::Error(format!("Failed to read event: {err}")));
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        let _ = sender.send(Event::Error(format!("Failed to poll events: {err}")));
                        break;
                    }
                }

                // Check if tick should fire
                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Receive the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_event_handler_config() {
        let config = EventHandlerConfig::default();
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert!(config.enable_mouse);
    }

    #[test]
    fn test_shortcut_keys_toggle_sections() {
        assert_eq!(
            map_crossterm_event(key(KeyCode::Char('2'))),
            Some(TuiEvent::ToggleSection(SectionId::PageRedesigns))
        );
        assert_eq!(
            map_crossterm_event(key(KeyCode::Char('5'))),
            Some(TuiEvent::ToggleSection(SectionId::InteractivePrototypes))
        );
        assert_eq!(map_crossterm_event(key(KeyCode::Char('3'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_crossterm_event(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(map_crossterm_event(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_crossterm_event(ctrl_c), Some(TuiEvent::Quit));
        let ctrl_o = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
        assert_eq!(map_crossterm_event(ctrl_o), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_crossterm_event(release), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            map_crossterm_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            Some(TuiEvent::Click { column: 7, row: 3 })
        );
        assert_eq!(
            map_crossterm_event(mouse(MouseEventKind::Down(MouseButton::Right), 7, 3)),
            None
        );
        assert_eq!(
            map_crossterm_event(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(TuiEvent::ScrollDown)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_crossterm_event(key(KeyCode::Tab)), Some(TuiEvent::NextPanel));
        assert_eq!(map_crossterm_event(key(KeyCode::BackTab)), Some(TuiEvent::PrevPanel));
        assert_eq!(map_crossterm_event(key(KeyCode::Enter)), Some(TuiEvent::ToggleFocused));
        assert_eq!(map_crossterm_event(key(KeyCode::Char('G'))), Some(TuiEvent::Bottom));
        assert_eq!(
            map_crossterm_event(CrosstermEvent::Resize(80, 24)),
            Some(TuiEvent::Resize(80, 24))
        );
    }
}
