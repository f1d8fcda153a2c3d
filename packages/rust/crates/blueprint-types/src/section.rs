//! Section identifiers

use crate::BlueprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one expandable phase panel.
///
/// The set is closed: a value of this type is always one of the registered
/// sections, so no operation taking a `SectionId` needs runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionId {
    /// Phase 1: design system components
    #[serde(rename = "phase1")]
    DesignSystem,
    /// Phase 2: page redesigns
    #[serde(rename = "phase2")]
    PageRedesigns,
    /// Phase 4: mobile components
    #[serde(rename = "phase4")]
    MobileComponents,
    /// Phase 5: interactive prototypes
    #[serde(rename = "phase5")]
    InteractivePrototypes,
}

impl SectionId {
    /// Every registered section, in document order
    pub const ALL: [SectionId; 4] = [
        SectionId::DesignSystem,
        SectionId::PageRedesigns,
        SectionId::MobileComponents,
        SectionId::InteractivePrototypes,
    ];

    /// Stable string key (used on the command line and in JSON output)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            SectionId::DesignSystem => "phase1",
            SectionId::PageRedesigns => "phase2",
            SectionId::MobileComponents => "phase4",
            SectionId::InteractivePrototypes => "phase5",
        }
    }

    /// Keyboard shortcut; matches the phase number
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            SectionId::DesignSystem => '1',
            SectionId::PageRedesigns => '2',
            SectionId::MobileComponents => '4',
            SectionId::InteractivePrototypes => '5',
        }
    }

    /// Look up the section bound to a keyboard shortcut
    #[must_use]
    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.shortcut() == c)
    }

    /// Position of this section in [`SectionId::ALL`]
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BlueprintError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for section in SectionId::ALL {
            assert_eq!(section.key().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("PHASE4".parse::<SectionId>(), Ok(SectionId::MobileComponents));
        assert_eq!(" phase5 ".parse::<SectionId>(), Ok(SectionId::InteractivePrototypes));
    }

    #[test]
    fn test_from_str_rejects_unregistered_section() {
        let err = "phase3".parse::<SectionId>().unwrap_err();
        assert_eq!(err, BlueprintError::UnknownSection("phase3".to_string()));
        assert!(err.to_string().contains("phase3"));
    }

    #[test]
    fn test_shortcuts_match_phase_numbers() {
        assert_eq!(SectionId::from_shortcut('1'), Some(SectionId::DesignSystem));
        assert_eq!(SectionId::from_shortcut('2'), Some(SectionId::PageRedesigns));
        assert_eq!(SectionId::from_shortcut('3'), None);
        assert_eq!(SectionId::from_shortcut('4'), Some(SectionId::MobileComponents));
        assert_eq!(SectionId::from_shortcut('5'), Some(SectionId::InteractivePrototypes));
    }

    #[test]
    fn test_ordinal_matches_all_position() {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.ordinal(), i);
        }
    }

    #[test]
    fn test_serde_uses_string_key() {
        let json = serde_json::to_string(&SectionId::PageRedesigns).unwrap();
        assert_eq!(json, "\"phase2\"");
        let back: SectionId = serde_json::from_str("\"phase5\"").unwrap();
        assert_eq!(back, SectionId::InteractivePrototypes);
    }
}
