//! main.rs - Binary entry point for blueprint-tui
//!
//! Usage:
//!   Interactive:   blueprint-tui
//!   Pre-expanded:  blueprint-tui --toggle phase2
//!   Headless text: blueprint-tui --headless --width 120
//!   Headless JSON: blueprint-tui --headless --format json --toggle phase5

use anyhow::{Context, Result};
use blueprint_tui::{AppState, EventHandlerConfig, headless_text, run_tui};
use blueprint_types::{BLUEPRINT, SectionId};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::io::{self, Write};
use std::time::Duration;

/// Headless output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Rendered page as plain text
    Text,
    /// Current view as JSON
    Json,
}

/// Blueprint TUI - Terminal viewer for the Cabana VIP design blueprint
#[derive(clap::Parser, Debug)]
#[command(name = "blueprint-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print one frame and exit (no terminal takeover)
    #[arg(long, default_value = "false")]
    headless: bool,

    /// Headless output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Headless page width in columns
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..))]
    width: u16,

    /// Toggle a section at start-up (phase1, phase2, phase4, phase5); repeatable
    #[arg(long = "toggle", value_name = "SECTION")]
    toggles: Vec<SectionId>,

    /// Event poll tick in milliseconds
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    tick_rate: u64,

    /// Disable mouse capture
    #[arg(long, default_value = "false")]
    no_mouse: bool,
}

fn print_headless(state: &AppState, format: OutputFormat, width: u16) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for line in headless_text(state, width) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state.snapshot())
                .context("Failed to serialize view")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Start-up state with `toggles` applied in order
fn initial_state(toggles: &[SectionId]) -> AppState {
    let mut state = AppState::new(&BLUEPRINT);
    for section in toggles {
        state.toggle(*section);
    }
    state
}

fn main() -> Result<()> {
    // Initialize logging
    blueprint_tui::init_logger();

    let args = Args::parse();

    BLUEPRINT
        .validate()
        .context("Blueprint document is inconsistent")?;

    let mut state = initial_state(&args.toggles);
    info!("Expanded at start-up: {:?}", state.coordinator().expanded());

    if args.headless {
        return print_headless(&state, args.format, args.width);
    }

    let config = EventHandlerConfig {
        tick_rate: Duration::from_millis(args.tick_rate),
        enable_mouse: !args.no_mouse,
    };
    if let Err(e) = run_tui(&mut state, &config) {
        warn!("TUI failed: {e:#}. Falling back to headless output.");
        return print_headless(&state, args.format, args.width);
    }

    info!("blueprint-tui shutdown complete");
    Ok(())
}
