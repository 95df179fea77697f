use super::*;
use crate::layout::SectionBounds;

fn layout() -> PageLayout {
    PageLayout::stacked(
        0.0,
        &[
            (SectionId::About, 600.0),
            (SectionId::Education, 400.0),
            (SectionId::Skills, 400.0),
        ],
    )
}

#[test]
fn known_anchor_requests_smooth_scroll_to_section_top() {
    let mut nav = NavigationController::new();
    let request = nav.navigate("skills", &layout()).expect("request");
    assert_eq!(request.section, SectionId::Skills);
    assert_eq!(request.target_offset, 1000.0);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
    assert_eq!(nav.take_pending(), Some(request));
    assert_eq!(nav.take_pending(), None);
}

#[test]
fn unknown_anchor_changes_nothing() {
    let mut nav = NavigationController::new();
    nav.navigate("about", &layout()).expect("about");
    let before = nav.pending();
    assert_eq!(nav.navigate("blog", &layout()), None);
    assert_eq!(nav.pending(), before);
}

#[test]
fn known_id_without_rendered_anchor_is_a_no_op() {
    let mut nav = NavigationController::new();
    assert_eq!(nav.navigate("contact", &layout()), None);
    assert_eq!(nav.pending(), None);
}

#[test]
fn instant_navigation_keeps_requested_behavior() {
    let mut layout = PageLayout::new();
    layout.insert(SectionId::Contact, SectionBounds::new(3200.0, 500.0));
    let mut nav = NavigationController::new();
    let request = nav
        .navigate_to(SectionId::Contact, &layout, ScrollBehavior::Instant)
        .expect("request");
    assert_eq!(request.behavior, ScrollBehavior::Instant);
    assert_eq!(request.target_offset, 3200.0);
}

#[test]
fn exactly_one_link_is_selected() {
    let nav = NavigationController::new();
    let links = nav.links(SectionId::Projects);
    assert_eq!(links.len(), SectionId::ALL.len());
    let selected: Vec<_> = links.iter().filter(|link| link.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].section, SectionId::Projects);
    assert_eq!(selected[0].label, "Projects");
}
