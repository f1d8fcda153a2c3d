//! Application state management for TUI

mod coordinator;
mod snapshot;

pub use coordinator::SectionCoordinator;
pub use snapshot::{FlowSnapshot, PanelSnapshot, StepSnapshot, ViewSnapshot};

use crate::components::{BlueprintView, HeaderHit, PanelRenderer};
use crate::event::TuiEvent;
use blueprint_types::{Blueprint, SectionId};
use log::{debug, info};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    blueprint: &'static Blueprint,
    coordinator: SectionCoordinator,
    focused: Option<usize>,
    scroll: u16,
    page_height: u16,
    viewport_height: u16,
    header_hits: Vec<HeaderHit>,
    should_quit: bool,
    status_message: Option<String>,
}

impl AppState {
    /// Create a new application state with every section collapsed
    pub fn new(blueprint: &'static Blueprint) -> Self {
        Self {
            blueprint,
            coordinator: SectionCoordinator::new(),
            focused: None,
            scroll: 0,
            page_height: 0,
            viewport_height: 0,
            header_hits: Vec::new(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Get title
    pub fn title(&self) -> &'static str {
        self.blueprint.title
    }

    /// Get the section coordinator
    pub fn coordinator(&self) -> &SectionCoordinator {
        &self.coordinator
    }

    /// Get status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set status message
    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Index of the focused panel
    pub fn focused_panel(&self) -> Option<usize> {
        self.focused
    }

    /// First page row on screen
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Largest scroll offset for the last drawn frame
    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// View of the document under the current expansion state
    pub fn view(&self) -> BlueprintView<'_> {
        BlueprintView::new(self.blueprint, &self.coordinator).with_focus(self.focused)
    }

    /// Serialisable projection of the current view
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(self.blueprint, &self.coordinator)
    }

    /// Record the geometry of the frame just drawn
    pub fn set_frame(&mut self, page_height: u16, viewport_height: u16, hits: Vec<HeaderHit>) {
        self.page_height = page_height;
        self.viewport_height = viewport_height;
        self.header_hits = hits;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Toggle a section and focus its panel
    pub fn toggle(&mut self, section: SectionId) {
        self.coordinator.toggle(section);
        match self.blueprint.panel_for(section) {
            Some((index, _)) => {
                self.focused = Some(index);
                self.report_toggle(index);
            }
            None => self.set_status(&format!("{section} toggled")),
        }
    }

    /// Toggle the focused panel
    pub fn toggle_focused(&mut self) {
        if let Some(index) = self.focused {
            self.click_panel(index);
        }
    }

    /// Handle a mouse click at a screen cell; returns whether a header was hit
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        if row >= self.viewport_height {
            return false;
        }
        let page_row = row.saturating_add(self.scroll);
        let Some(hit) = self
            .header_hits
            .iter()
            .find(|hit| hit.contains(column, page_row))
            .copied()
        else {
            return false;
        };
        debug!("click at ({column}, {row}) hit panel {}", hit.panel);
        self.focused = Some(hit.panel);
        self.click_panel(hit.panel)
    }

    fn click_panel(&mut self, index: usize) -> bool {
        let blueprint = self.blueprint;
        let Some(spec) = blueprint.panels.get(index) else {
            return false;
        };
        let toggled = PanelRenderer::from_spec(spec).on_header_click(&mut self.coordinator);
        if toggled {
            self.report_toggle(index);
        }
        toggled
    }

    fn report_toggle(&mut self, index: usize) {
        let blueprint = self.blueprint;
        let Some(spec) = blueprint.panels.get(index) else {
            return;
        };
        let panel = PanelRenderer::from_spec(spec);
        let verb = if panel.is_expanded(&self.coordinator) {
            "expanded"
        } else {
            "collapsed"
        };
        info!("{} {verb}", panel.title());
        self.set_status(&format!("{} {verb}", panel.title()));
    }

    /// Indices of panels that respond to toggles
    fn toggleable_panels(&self) -> Vec<usize> {
        self.blueprint
            .panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.mode.section().is_some())
            .map(|(i, _)| i)
            .collect()
    }

    /// Focus next toggleable panel
    pub fn focus_next(&mut self) {
        let panels = self.toggleable_panels();
        if panels.is_empty() {
            return;
        }
        let next = match self.focused.and_then(|f| panels.iter().position(|&i| i == f)) {
            Some(pos) => (pos + 1) % panels.len(),
            None => 0,
        };
        self.focused = Some(panels[next]);
    }

    /// Focus previous toggleable panel
    pub fn focus_prev(&mut self) {
        let panels = self.toggleable_panels();
        if panels.is_empty() {
            return;
        }
        let prev = match self.focused.and_then(|f| panels.iter().position(|&i| i == f)) {
            Some(0) | None => panels.len() - 1,
            Some(pos) => pos - 1,
        };
        self.focused = Some(panels[prev]);
    }

    /// Scroll down
    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    /// Scroll up
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Apply one input event
    pub fn apply(&mut self, event: TuiEvent) {
        let page = self.viewport_height.saturating_sub(1).max(1);
        match event {
            TuiEvent::Quit => self.quit(),
            TuiEvent::ToggleSection(section) => self.toggle(section),
            TuiEvent::ToggleFocused => self.toggle_focused(),
            TuiEvent::NextPanel => self.focus_next(),
            TuiEvent::PrevPanel => self.focus_prev(),
            TuiEvent::ScrollDown => self.scroll_down(1),
            TuiEvent::ScrollUp => self.scroll_up(1),
            TuiEvent::PageDown => self.scroll_down(page),
            TuiEvent::PageUp => self.scroll_up(page),
            TuiEvent::Top => self.scroll = 0,
            TuiEvent::Bottom => self.scroll = self.max_scroll(),
            TuiEvent::Click { column, row } => {
                self.click(column, row);
            }
            // Layout is recomputed on the next draw
            TuiEvent::Resize(_, _) | TuiEvent::Tick => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_types::BLUEPRINT;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(&BLUEPRINT);
        assert_eq!(state.title(), "Cabana VIP Blueprint");
        assert!(!state.should_quit());
        assert_eq!(state.coordinator().expanded(), None);
        assert_eq!(state.focused_panel(), None);
    }

    #[test]
    fn test_app_state_quit() {
        let mut state = AppState::new(&BLUEPRINT);
        state.apply(TuiEvent::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_toggle_focuses_and_reports() {
        let mut state = AppState::new(&BLUEPRINT);
        state.toggle(SectionId::MobileComponents);
        assert_eq!(state.focused_panel(), Some(2));
        assert_eq!(
            state.status_message(),
            Some("Phase 4: Mobile Components expanded")
        );

        state.toggle(SectionId::MobileComponents);
        assert_eq!(
            state.status_message(),
            Some("Phase 4: Mobile Components collapsed")
        );
    }

    #[test]
    fn test_focus_cycles_through_panels() {
        let mut state = AppState::new(&BLUEPRINT);
        state.focus_next();
        assert_eq!(state.focused_panel(), Some(0));
        state.focus_prev();
        assert_eq!(state.focused_panel(), Some(3));
        state.focus_next();
        assert_eq!(state.focused_panel(), Some(0));
    }

    #[test]
    fn test_scroll_is_clamped_to_page() {
        let mut state = AppState::new(&BLUEPRINT);
        state.set_frame(50, 20, Vec::new());
        state.apply(TuiEvent::Bottom);
        assert_eq!(state.scroll(), 30);
        state.apply(TuiEvent::ScrollDown);
        assert_eq!(state.scroll(), 30);
        state.apply(TuiEvent::Top);
        assert_eq!(state.scroll(), 0);
        state.apply(TuiEvent::ScrollUp);
        assert_eq!(state.scroll(), 0);

        // a page is the viewport minus one row of overlap
        state.apply(TuiEvent::PageDown);
        assert_eq!(state.scroll(), 19);
        state.apply(TuiEvent::PageDown);
        assert_eq!(state.scroll(), 30);
        state.apply(TuiEvent::PageUp);
        assert_eq!(state.scroll(), 11);
        state.apply(TuiEvent::PageUp);
        assert_eq!(state.scroll(), 0);

        // shrinking page pulls the scroll offset back
        state.apply(TuiEvent::Bottom);
        state.set_frame(30, 20, Vec::new());
        assert_eq!(state.scroll(), 10);
    }
}
