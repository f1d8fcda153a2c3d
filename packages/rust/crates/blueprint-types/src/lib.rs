//! blueprint-types - Shared type definitions for the Cabana blueprint viewer
//!
//! This crate provides the closed identifier set for the expandable phase
//! sections and the static content model the viewer renders.
//!
//! Content is plain `'static` data: it is defined once at process start and is
//! never created, mutated, or destroyed at runtime.

#![allow(clippy::doc_markdown)]

mod catalogue;
mod model;
mod section;

pub use catalogue::BLUEPRINT;
pub use model::{Accent, Badge, Blueprint, FlowSpec, Icon, PanelMode, PanelSpec, Swatch};
pub use section::SectionId;

use thiserror::Error;

/// Result type with blueprint-specific error
pub type BlueprintResult<T> = Result<T, BlueprintError>;

/// Errors raised while parsing external text or validating a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    /// Text that does not name any registered section
    #[error("unknown section '{0}' (expected one of: phase1, phase2, phase4, phase5)")]
    UnknownSection(String),

    /// Two panels are bound to the same section
    #[error("section {0} is bound to more than one panel")]
    DuplicateSection(SectionId),

    /// A registered section has no panel bound to it
    #[error("section {0} has no panel")]
    UnboundSection(SectionId),
}
