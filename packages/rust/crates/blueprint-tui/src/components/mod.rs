//! TUI Components - Blueprint panels, flows and page composition

mod blueprint_view;
mod flow;
pub mod icon;
pub mod layout;
mod panel;
mod swatch;
pub mod theme;

pub use blueprint_view::{
    BlockKind, BlueprintView, HeaderHit, PANEL_GRID_BREAKPOINT, PageLayout, PlacedBlock,
};
pub use flow::{FlowEntry, FlowRenderer};
pub use panel::{COLLAPSED_HEIGHT, PanelRenderer};
pub use swatch::{SWATCH_HEIGHT, SwatchCard};
