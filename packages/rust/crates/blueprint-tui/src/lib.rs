//! blueprint-tui - Terminal viewer for the Cabana VIP design blueprint
//!
//! Renders the blueprint document (palette, phase panels, user flows, start
//! order) and lets the user expand one phase panel at a time.

pub mod components;
pub mod event;
pub mod renderer;
pub mod state;

pub use components::{BlueprintView, FlowRenderer, PanelRenderer};
pub use event::{Event, EventHandler, EventHandlerConfig, TuiEvent};
pub use renderer::{TuiRenderer, render_page, render_text};
pub use state::{AppState, SectionCoordinator, ViewSnapshot};

use log::info;

/// Initialize logging; `RUST_LOG` overrides the default `warn` filter
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Main entry point for running the TUI application
pub fn run_tui(state: &mut AppState, config: &EventHandlerConfig) -> Result<(), anyhow::Error> {
    let mut renderer = TuiRenderer::new(config)?;

    info!("Starting TUI application: {}", state.title());

    // Run the main event loop
    renderer.run(state)
}

/// Render the current view as plain text at `width`
pub fn headless_text(state: &AppState, width: u16) -> Vec<String> {
    let (_, page) = render_page(&state.view(), width);
    render_text(&page)
}
