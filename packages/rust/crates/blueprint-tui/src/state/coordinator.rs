use blueprint_types::SectionId;
use log::debug;

/// Single source of truth for which section, if any, is expanded.
///
/// At most one section is expanded at any time: expanding a section
/// implicitly collapses the previous one, and toggling the expanded section
/// collapses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCoordinator {
    expanded: Option<SectionId>,
}

impl SectionCoordinator {
    /// Create a coordinator with every section collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is expanded, otherwise expand it
    pub fn toggle(&mut self, id: SectionId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        debug!("toggle {id}: expanded = {:?}", self.expanded);
    }

    /// Whether `id` is the expanded section
    #[must_use]
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded == Some(id)
    }

    /// The expanded section, if any
    #[must_use]
    pub fn expanded(&self) -> Option<SectionId> {
        self.expanded
    }
}
