use blueprint_tui::components::{BlockKind, BlueprintView, FlowRenderer, PanelRenderer};
use blueprint_tui::{SectionCoordinator, render_text};
use blueprint_types::{Accent, BLUEPRINT, Icon, PanelMode, SectionId};
use ratatui::{Terminal, backend::TestBackend};

fn draw<F>(width: u16, height: u16, render: F) -> Vec<String>
where
    F: FnOnce(&mut ratatui::Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();
    render_text(terminal.backend().buffer())
}

#[test]
fn test_flow_numbers_steps_in_order() {
    let flow = FlowRenderer::new("Flow", &["A", "B", "C"], Accent::Gold);

    let entries = flow.entries();
    assert_eq!(entries.len(), 3);
    for (entry, (position, label)) in entries.iter().zip([(1, "A"), (2, "B"), (3, "C")]) {
        assert_eq!(entry.position, position);
        assert_eq!(entry.label, label);
    }

    let lines = draw(24, flow.height(), |f| flow.render(f.area(), f.buffer_mut()));
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Flow"));
    assert!(lines[1].contains(" 1  A"));
    assert!(lines[2].contains(" 2  B"));
    assert!(lines[3].contains(" 3  C"));

    // always visible: no chevron affordance
    assert!(lines.iter().all(|l| !l.contains('▸') && !l.contains('▾')));
}

#[test]
fn test_panel_body_hidden_until_expanded() {
    let panel = PanelRenderer::new(
        "Catalogue",
        Icon::Palette,
        &["Alpha", "Beta"],
        Accent::Gold,
        PanelMode::Toggleable {
            section: SectionId::DesignSystem,
        },
    );
    let mut coordinator = SectionCoordinator::new();

    let height = panel.height(40, &coordinator);
    let lines = draw(40, height, |f| panel.render(f.area(), f.buffer_mut(), &coordinator));
    let text = lines.join("\n");
    assert!(text.contains("Catalogue"));
    assert!(text.contains('▸'));
    assert!(!text.contains("Alpha"));

    assert!(panel.on_header_click(&mut coordinator));
    let height = panel.height(40, &coordinator);
    let lines = draw(40, height, |f| panel.render(f.area(), f.buffer_mut(), &coordinator));
    let text = lines.join("\n");
    assert!(text.contains('▾'));
    assert!(text.contains("• Alpha"));
    assert!(text.contains("• Beta"));
}

#[test]
fn test_always_visible_panel_shows_items_without_chevron() {
    let panel = PanelRenderer::new(
        "Static",
        Icon::Star,
        &["Only item"],
        Accent::Teal,
        PanelMode::AlwaysVisible,
    );
    let coordinator = SectionCoordinator::new();
    let height = panel.height(40, &coordinator);
    let lines = draw(40, height, |f| panel.render(f.area(), f.buffer_mut(), &coordinator));
    let text = lines.join("\n");
    assert!(text.contains("• Only item"));
    assert!(!text.contains('▸'));
    assert!(!text.contains('▾'));
}

#[test]
fn test_view_wires_every_panel_to_one_coordinator() {
    let mut coordinator = SectionCoordinator::new();
    coordinator.toggle(SectionId::MobileComponents);
    let view = BlueprintView::new(&BLUEPRINT, &coordinator);

    let visible: Vec<bool> = (0..BLUEPRINT.panels.len())
        .map(|i| view.panel(i).unwrap().is_body_visible(&coordinator))
        .collect();
    assert_eq!(visible, [false, false, true, false]);
}

#[test]
fn test_view_places_every_block_once() {
    let coordinator = SectionCoordinator::new();
    let layout = BlueprintView::new(&BLUEPRINT, &coordinator).layout(120);

    for i in 0..BLUEPRINT.swatches.len() {
        assert!(layout.area_of(BlockKind::Swatch(i)).is_some());
    }
    for i in 0..BLUEPRINT.flows.len() {
        assert!(layout.area_of(BlockKind::Flow(i)).is_some());
    }
    assert!(layout.area_of(BlockKind::Header).is_some());
    assert!(layout.area_of(BlockKind::StartOrder { columns: 3 }).is_some());

    for (i, a) in layout.blocks.iter().enumerate() {
        for b in &layout.blocks[i + 1..] {
            assert!(!a.area.intersects(b.area), "{:?} overlaps {:?}", a.kind, b.kind);
        }
    }
}
