//! Static content model

use crate::{BlueprintError, BlueprintResult, SectionId};
use serde::{Deserialize, Serialize};

/// Icon handle; mapped to a glyph by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Crown (title)
    Crown,
    /// Palette
    Palette,
    /// Page layout
    Layout,
    /// People
    Users,
    /// Phone
    Smartphone,
    /// Play button
    Play,
    /// Downward chevron
    ChevronDown,
    /// Rightward chevron
    ChevronRight,
    /// Sparkles
    Sparkles,
    /// Lightning bolt
    Zap,
    /// Heart
    Heart,
    /// Star
    Star,
}

/// Accent colour family applied to icon badges and flow titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Gold
    Gold,
    /// Pink
    Pink,
    /// Purple
    Purple,
    /// Violet
    Violet,
    /// Teal
    Teal,
}

/// How a panel decides whether its body is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PanelMode {
    /// Body shown only while the bound section is expanded; header toggles it
    Toggleable {
        /// Section this panel is bound to
        section: SectionId,
    },
    /// Body always shown; header is inert
    AlwaysVisible,
}

impl PanelMode {
    /// Bound section, if the panel is toggleable
    #[must_use]
    pub fn section(self) -> Option<SectionId> {
        match self {
            PanelMode::Toggleable { section } => Some(section),
            PanelMode::AlwaysVisible => None,
        }
    }
}

/// One colour in the design foundation palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Display name
    pub name: &'static str,
    /// CSS colour value (`#RRGGBB` or `rgba(r,g,b,a)`)
    pub value: &'static str,
}

/// A titled panel of catalogue items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelSpec {
    /// Header title
    pub title: &'static str,
    /// Header icon
    pub icon: Icon,
    /// Icon badge colour
    pub accent: Accent,
    /// Catalogue item labels, in display order
    pub items: &'static [&'static str],
    /// Toggle behaviour
    pub mode: PanelMode,
}

/// A titled, numbered list of steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowSpec {
    /// Flow title
    pub title: &'static str,
    /// Title colour
    pub accent: Accent,
    /// Steps, in order
    pub steps: &'static [&'static str],
}

/// Footer feature badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge icon
    pub icon: Icon,
    /// Badge label
    pub label: &'static str,
}

/// The complete blueprint document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    /// Page title
    pub title: &'static str,
    /// Line under the title
    pub tagline: &'static str,
    /// Heading above the colour palette
    pub foundation_heading: &'static str,
    /// Colour palette
    pub swatches: &'static [Swatch],
    /// Phase panels, in document order
    pub panels: &'static [PanelSpec],
    /// Heading above the user flows
    pub flows_heading: &'static str,
    /// User flows
    pub flows: &'static [FlowSpec],
    /// Start-order checklist
    pub start_order: FlowSpec,
    /// Footer badges
    pub badges: &'static [Badge],
}

impl Blueprint {
    /// Check that every section is bound to exactly one panel.
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError::DuplicateSection`] when two panels share a
    /// section and [`BlueprintError::UnboundSection`] when a section has no panel.
    pub fn validate(&self) -> BlueprintResult<()> {
        let mut bound = [false; SectionId::ALL.len()];
        for section in self.panels.iter().filter_map(|p| p.mode.section()) {
            let slot = &mut bound[section.ordinal()];
            if *slot {
                return Err(BlueprintError::DuplicateSection(section));
            }
            *slot = true;
        }

        match SectionId::ALL.into_iter().find(|s| !bound[s.ordinal()]) {
            Some(section) => Err(BlueprintError::UnboundSection(section)),
            None => Ok(()),
        }
    }

    /// Index and spec of the panel bound to `section`
    #[must_use]
    pub fn panel_for(&self, section: SectionId) -> Option<(usize, &'static PanelSpec)> {
        self.panels
            .iter()
            .enumerate()
            .find(|(_, p)| p.mode.section() == Some(section))
    }
}
