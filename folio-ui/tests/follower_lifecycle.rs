use std::{cell::RefCell, rc::Rc};

use folio_ui::{
    Element, ElementKind, ElementTree, FollowerConfig, ManualFrameClock, MarkerStyle,
    MountedFollower, NonInteractive, PointerHub, PxPosition, render_html,
};

fn page_with_controls() -> (ElementTree, Vec<(folio_ui::NodeId, bool)>) {
    let mut tree = ElementTree::new();
    let mut probes = Vec::new();
    tree.with_node(Element::new(ElementKind::Main).class("main-content"), |tree| {
        probes.push((tree.leaf(Element::new(ElementKind::Paragraph).text("plain")), false));
        tree.with_node(Element::new(ElementKind::Anchor).attr("href", "#"), |tree| {
            probes.push((tree.leaf(Element::new(ElementKind::Span).class("icon")), true));
        });
        tree.with_node(Element::new(ElementKind::Form), |tree| {
            probes.push((tree.leaf(Element::new(ElementKind::Input)), true));
            probes.push((tree.leaf(Element::new(ElementKind::TextArea)), true));
            probes.push((tree.leaf(Element::new(ElementKind::Label).text("Name *")), false));
        });
        tree.with_node(Element::new(ElementKind::Button), |_| {});
    });
    (tree, probes)
}

#[test]
fn hover_follows_every_pointer_over_event() {
    let hub = PointerHub::new();
    let clock = Rc::new(ManualFrameClock::new());
    let scales = Rc::new(RefCell::new(Vec::new()));
    let sink = scales.clone();
    let _mounted = MountedFollower::mount(
        &hub,
        clock.clone(),
        FollowerConfig::default(),
        move |marker: &MarkerStyle| sink.borrow_mut().push(marker.scale),
    );

    let (tree, probes) = page_with_controls();
    for (node, interactive) in &probes {
        hub.dispatch_over(&tree.node(*node));
        clock.advance();
        let expected = if *interactive { 1.5 } else { 1.0 };
        assert_eq!(scales.borrow().last().copied(), Some(expected));
    }
    assert!(render_html(&tree).starts_with("<main class=\"main-content\">"));
}

#[test]
fn follower_settles_on_final_pointer_position_then_stops_cleanly() {
    let hub = PointerHub::new();
    let clock = Rc::new(ManualFrameClock::new());
    let mounted = MountedFollower::mount(&hub, clock.clone(), FollowerConfig::default(), |_: &MarkerStyle| {});

    for step in 0..20 {
        hub.dispatch_move(PxPosition::new(f64::from(step) * 10.0, 300.0));
        clock.advance();
    }
    let target = PxPosition::new(190.0, 300.0);
    let mut ticks = 0;
    while mounted.state().current.max_axis_distance(target) >= 0.01 {
        clock.advance();
        ticks += 1;
        assert!(ticks < 200);
    }

    let probe = mounted.probe();
    let final_state = mounted.unmount();
    assert_eq!(final_state.target, target);

    hub.dispatch_move(PxPosition::ZERO);
    hub.dispatch_over(&NonInteractive);
    assert_eq!(clock.advance(), 0);
    assert_eq!(probe.state(), final_state);
}
