use approx::assert_abs_diff_eq;
use zoompane_rs::api::ZoomCoordinator;
use zoompane_rs::core::{Extent, ScrollOffset};
use zoompane_rs::host::{ContentRule, FixtureHost};

const SCROLL_POSITION_ABSOLUTE_TOLERANCE: f64 = 2.0;

#[test]
fn zoom_reconciles_nested_panes_inner_first() {
    // A wide, short outer pane around a narrow, tall inner pane: the inner
    // pane carries the horizontal scroll, the outer pane the vertical one.
    let mut host = FixtureHost::new(Extent::new(800.0, 800.0));
    let inner = host.add_pane(Extent::new(200.0, 800.0));
    let outer = host.add_pane(Extent::new(800.0, 200.0));
    let element = host.zoomable();

    let mut coordinator = ZoomCoordinator::new(host);
    coordinator.set_zoomable_element(element);
    coordinator
        .host_mut()
        .scroll_to(inner, ScrollOffset::new(110.0, 0.0));
    coordinator
        .host_mut()
        .scroll_to(outer, ScrollOffset::new(0.0, 60.0));

    coordinator.set_zoom_level(1.5).expect("valid zoom");

    let inner_scroll = coordinator.host().scroll(inner);
    let outer_scroll = coordinator.host().scroll(outer);
    assert_abs_diff_eq!(
        inner_scroll.x,
        165.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );
    assert_abs_diff_eq!(
        outer_scroll.y,
        90.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );

    let marker = coordinator.host().projected_position((109.0, 59.0));
    assert_abs_diff_eq!(marker.0, 0.0, epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE);
    assert_abs_diff_eq!(marker.1, 0.0, epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE);
}

#[test]
fn zoom_in_gaining_vertical_scroll_leaves_new_axis_at_origin() {
    // The inner pane has no vertical overflow before the zoom; once the
    // scaled content overflows it, the freshly scrollable axis stays at 0.
    let mut host = FixtureHost::new(Extent::new(800.0, 800.0));
    let inner = host.add_pane(Extent::new(200.0, 800.0));
    let outer = host.add_pane(Extent::new(800.0, 200.0));
    let element = host.zoomable();

    let mut coordinator = ZoomCoordinator::new(host);
    coordinator.set_zoomable_element(element);
    coordinator
        .host_mut()
        .scroll_to(inner, ScrollOffset::new(110.0, 0.0));
    coordinator
        .host_mut()
        .scroll_to(outer, ScrollOffset::new(0.0, 60.0));

    coordinator.set_zoom_level(1.5).expect("valid zoom");

    let inner_scroll = coordinator.host().scroll(inner);
    assert_eq!(inner_scroll.y, 0.0);
    assert_abs_diff_eq!(
        inner_scroll.x,
        165.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );
    assert_abs_diff_eq!(
        coordinator.host().scroll(outer).y,
        90.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );
}

#[test]
fn panes_scrolling_different_directions_stay_independent() {
    let mut host = FixtureHost::new(Extent::new(800.0, 800.0));
    let inner = host.add_pane(Extent::new(500.0, 800.0));
    let outer = host.add_pane(Extent::new(200.0, 200.0));
    let element = host.zoomable();

    let mut coordinator = ZoomCoordinator::new(host);
    coordinator.set_zoomable_element(element);
    coordinator
        .host_mut()
        .scroll_to(inner, ScrollOffset::new(50.0, 0.0));
    coordinator
        .host_mut()
        .scroll_to(outer, ScrollOffset::new(60.0, 60.0));

    coordinator.set_zoom_level(1.5).expect("valid zoom");

    let inner_scroll = coordinator.host().scroll(inner);
    let outer_scroll = coordinator.host().scroll(outer);
    assert_abs_diff_eq!(
        inner_scroll.x,
        75.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );
    assert_abs_diff_eq!(
        outer_scroll.x,
        90.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );
    assert_abs_diff_eq!(
        outer_scroll.y,
        90.0,
        epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE
    );

    let marker = coordinator.host().projected_position((109.0, 59.0));
    assert_abs_diff_eq!(marker.0, 0.0, epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE);
    assert_abs_diff_eq!(marker.1, 0.0, epsilon = SCROLL_POSITION_ABSOLUTE_TOLERANCE);
}

#[test]
fn pane_with_fixed_content_is_left_untouched_by_zoom() {
    // Chrome around the editing surface: its content does not contain the
    // zoomable element, so its offset must survive the zoom unchanged.
    let mut host = FixtureHost::new(Extent::new(400.0, 400.0));
    let inner = host.add_pane(Extent::new(100.0, 100.0));
    let chrome = host.add_pane_with_rule(
        Extent::new(100.0, 100.0),
        ContentRule::Fixed(Extent::new(300.0, 300.0)),
    );
    let element = host.zoomable();

    let mut coordinator = ZoomCoordinator::new(host);
    coordinator.set_zoomable_element(element);
    coordinator
        .host_mut()
        .scroll_to(inner, ScrollOffset::new(100.0, 100.0));
    coordinator
        .host_mut()
        .scroll_to(chrome, ScrollOffset::new(40.0, 40.0));

    coordinator.set_zoom_level(2.0).expect("valid zoom");

    assert_eq!(
        coordinator.host().scroll(chrome),
        ScrollOffset::new(40.0, 40.0)
    );
    let inner_scroll = coordinator.host().scroll(inner);
    assert_abs_diff_eq!(inner_scroll.x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(inner_scroll.y, 200.0, epsilon = 1e-9);
}

#[test]
fn three_level_chain_reconciles_every_pane() {
    let mut host = FixtureHost::new(Extent::new(1000.0, 1000.0));
    let inner = host.add_pane(Extent::new(100.0, 100.0));
    let middle = host.add_pane(Extent::new(200.0, 200.0));
    let outer = host.add_pane(Extent::new(400.0, 400.0));
    let element = host.zoomable();

    let mut coordinator = ZoomCoordinator::new(host);
    coordinator.set_zoomable_element(element);
    coordinator
        .host_mut()
        .scroll_to(inner, ScrollOffset::new(300.0, 300.0));
    coordinator
        .host_mut()
        .scroll_to(middle, ScrollOffset::new(200.0, 200.0));
    coordinator
        .host_mut()
        .scroll_to(outer, ScrollOffset::new(100.0, 100.0));

    coordinator.set_zoom_level(2.0).expect("valid zoom");

    assert_abs_diff_eq!(coordinator.host().scroll(inner).x, 600.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coordinator.host().scroll(middle).x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coordinator.host().scroll(outer).x, 200.0, epsilon = 1e-9);
}
