//! The blueprint document content

use crate::{Accent, Badge, Blueprint, FlowSpec, Icon, PanelMode, PanelSpec, SectionId, Swatch};

const SWATCHES: &[Swatch] = &[
    Swatch {
        name: "Primary Gold",
        value: "#FFD700",
    },
    Swatch {
        name: "Hot Pink",
        value: "#FF69B4",
    },
    Swatch {
        name: "Blue Violet",
        value: "#8A2BE2",
    },
    Swatch {
        name: "Glass Effect",
        value: "rgba(255,255,255,0.1)",
    },
];

const DESIGN_SYSTEM: &[&str] = &[
    "VIP Buttons (6 variants)",
    "Primary: Gold gradient with crown icon",
    "Secondary: Glass morphism with white text",
    "CTA: Animated shine effect",
    "Luxury Cards (4 types)",
    "Stats Card: Glass with holographic border",
    "Content Card: Premium with locked overlay",
    "Creator Card: VIP badge and subscriber count",
    "Navigation Components",
    "VIP Sidebar: Fixed left with blur background",
    "Mobile Nav: Bottom tab with premium icons",
    "Form Elements",
    "Premium Input: Glass with gold focus ring",
    "VIP Select: Custom dropdown with animations",
];

const PAGE_REDESIGNS: &[&str] = &[
    "Creator Dashboard Redesign",
    "3-column grid with glass cards",
    "Earnings with gold accents",
    "Premium charts with holographic effects",
    "Fan Discovery Pages",
    "TikTok-style vertical scroll",
    "Category tiles with creator previews",
    "Full-screen creator profiles",
    "Admin Dashboard VIP Theme",
    "Executive dark theme with gold accents",
    "Large stat cards with trend indicators",
    "User management with advanced filtering",
    "Premium charts and analytics",
];

const MOBILE_COMPONENTS: &[&str] = &[
    "Touch Targets: Minimum 44px spacing",
    "Swipe Gestures: Content cards and navigation",
    "Bottom Sheet: Modals slide up from bottom",
    "Haptic Feedback: Premium interactions",
    "Responsive Breakpoints",
    "Mobile-first design approach",
    "Touch-optimized interface elements",
    "Progressive enhancement for desktop",
];

const INTERACTIONS: &[&str] = &[
    "Page Transitions: Smooth cross-fades with scale",
    "Micro-animations: Button hovers, card reveals",
    "Loading States: Premium spinners and skeletons",
    "Success States: Confetti and celebration animations",
    "Hover Effects: Glow and shimmer animations",
    "Form Validation: Real-time with smooth transitions",
    "Content Reveal: Parallax and intersection observers",
    "Navigation: Smooth scrolling and page transitions",
];

const PANELS: &[PanelSpec] = &[
    PanelSpec {
        title: "Phase 1: Design System",
        icon: Icon::Palette,
        accent: Accent::Gold,
        items: DESIGN_SYSTEM,
        mode: PanelMode::Toggleable {
            section: SectionId::DesignSystem,
        },
    },
    PanelSpec {
        title: "Phase 2: Page Redesigns",
        icon: Icon::Layout,
        accent: Accent::Pink,
        items: PAGE_REDESIGNS,
        mode: PanelMode::Toggleable {
            section: SectionId::PageRedesigns,
        },
    },
    PanelSpec {
        title: "Phase 4: Mobile Components",
        icon: Icon::Smartphone,
        accent: Accent::Violet,
        items: MOBILE_COMPONENTS,
        mode: PanelMode::Toggleable {
            section: SectionId::MobileComponents,
        },
    },
    PanelSpec {
        title: "Phase 5: Interactive Prototypes",
        icon: Icon::Play,
        accent: Accent::Teal,
        items: INTERACTIONS,
        mode: PanelMode::Toggleable {
            section: SectionId::InteractivePrototypes,
        },
    },
];

const FLOWS: &[FlowSpec] = &[
    FlowSpec {
        title: "Creator Onboarding",
        accent: Accent::Gold,
        steps: &[
            "Welcome & Role Selection",
            "Profile Setup",
            "Content Upload",
            "Monetization Setup",
        ],
    },
    FlowSpec {
        title: "Fan Discovery",
        accent: Accent::Pink,
        steps: &[
            "Interest Selection",
            "Content Discovery",
            "Creator Following",
            "First Subscription",
        ],
    },
    FlowSpec {
        title: "Monetization Flow",
        accent: Accent::Purple,
        steps: &[
            "Content Creation",
            "Pricing Strategy",
            "Content Publishing",
            "Analytics Review",
        ],
    },
];

const START_ORDER: FlowSpec = FlowSpec {
    title: "Start Order",
    accent: Accent::Gold,
    steps: &[
        "Create new Framer project: 'Cabana VIP Design System'",
        "Build color palette and typography first",
        "Create 6 button variants as master components",
        "Design Creator Dashboard as first full page",
        "Add mobile breakpoints and responsive behavior",
        "Create interactive prototype with transitions",
    ],
};

const BADGES: &[Badge] = &[
    Badge {
        icon: Icon::Star,
        label: "Premium Design",
    },
    Badge {
        icon: Icon::Sparkles,
        label: "Luxury Experience",
    },
    Badge {
        icon: Icon::Heart,
        label: "User-Centric",
    },
];

/// The Cabana VIP design system blueprint
pub static BLUEPRINT: Blueprint = Blueprint {
    title: "Cabana VIP Blueprint",
    tagline: "Complete Framer design system for luxury adult content platform",
    foundation_heading: "Design Foundation",
    swatches: SWATCHES,
    panels: PANELS,
    flows_heading: "Phase 3: User Flow Mapping",
    flows: FLOWS,
    start_order: START_ORDER,
    badges: BADGES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_is_valid() {
        assert_eq!(BLUEPRINT.validate(), Ok(()));
    }

    #[test]
    fn test_panels_follow_section_order() {
        let sections: Vec<_> = BLUEPRINT
            .panels
            .iter()
            .filter_map(|p| p.mode.section())
            .collect();
        assert_eq!(sections, SectionId::ALL);
    }

    #[test]
    fn test_start_order_has_six_steps() {
        assert_eq!(BLUEPRINT.start_order.steps.len(), 6);
        assert_eq!(BLUEPRINT.flows.len(), 3);
        assert!(BLUEPRINT.flows.iter().all(|f| f.steps.len() == 4));
    }
}
