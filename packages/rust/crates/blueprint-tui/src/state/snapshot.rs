use super::SectionCoordinator;
use crate::components::{FlowRenderer, PanelRenderer};
use blueprint_types::{Blueprint, FlowSpec, SectionId};
use serde::Serialize;

/// Serialisable projection of what the view currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Document title
    pub title: &'static str,
    /// Expanded section, if any
    pub expanded: Option<SectionId>,
    /// Phase panels in document order
    pub panels: Vec<PanelSnapshot>,
    /// User flows
    pub flows: Vec<FlowSnapshot>,
    /// Start-order checklist
    pub start_order: FlowSnapshot,
}

/// One panel as currently shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    /// Bound section; `None` for always-visible panels
    pub section: Option<SectionId>,
    /// Panel title
    pub title: &'static str,
    /// Whether the body is shown
    pub body_visible: bool,
    /// Items currently shown
    pub visible_items: Vec<&'static str>,
}

/// One flow with numbered steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    /// Flow title
    pub title: &'static str,
    /// Numbered steps in order
    pub steps: Vec<StepSnapshot>,
}

/// A numbered step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSnapshot {
    /// 1-based position
    pub position: usize,
    /// Step text
    pub label: &'static str,
}

impl ViewSnapshot {
    /// Capture the view of `blueprint` under `coordinator`
    pub fn capture(blueprint: &'static Blueprint, coordinator: &SectionCoordinator) -> Self {
        let panels = blueprint
            .panels
            .iter()
            .map(|spec| {
                let panel = PanelRenderer::from_spec(spec);
                PanelSnapshot {
                    section: spec.mode.section(),
                    title: spec.title,
                    body_visible: panel.is_body_visible(coordinator),
                    visible_items: panel.visible_items(coordinator).to_vec(),
                }
            })
            .collect();

        Self {
            title: blueprint.title,
            expanded: coordinator.expanded(),
            panels,
            flows: blueprint.flows.iter().map(FlowSnapshot::capture).collect(),
            start_order: FlowSnapshot::capture(&blueprint.start_order),
        }
    }
}

impl FlowSnapshot {
    fn capture(spec: &'static FlowSpec) -> Self {
        Self {
            title: spec.title,
            steps: FlowRenderer::from_spec(spec)
                .entries()
                .into_iter()
                .map(|entry| StepSnapshot {
                    position: entry.position,
                    label: entry.label,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_types::BLUEPRINT;

    #[test]
    fn test_snapshot_hides_collapsed_items() {
        let snapshot = ViewSnapshot::capture(&BLUEPRINT, &SectionCoordinator::new());
        assert_eq!(snapshot.expanded, None);
        assert_eq!(snapshot.panels.len(), 4);
        assert!(snapshot.panels.iter().all(|p| p.visible_items.is_empty()));
        assert_eq!(snapshot.start_order.steps.len(), 6);
        assert_eq!(snapshot.start_order.steps[5].position, 6);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut coordinator = SectionCoordinator::new();
        coordinator.toggle(SectionId::MobileComponents);
        let snapshot = ViewSnapshot::capture(&BLUEPRINT, &coordinator);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["expanded"], "phase4");
        assert_eq!(json["panels"][2]["section"], "phase4");
        assert_eq!(json["panels"][2]["body_visible"], true);
        assert_eq!(
            json["panels"][2]["visible_items"][0],
            "Touch Targets: Minimum 44px spacing"
        );
        assert_eq!(json["panels"][0]["body_visible"], false);
        assert_eq!(json["flows"][0]["steps"][0]["position"], 1);
    }
}
