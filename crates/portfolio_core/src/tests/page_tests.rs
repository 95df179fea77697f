use super::*;
use crate::contact_form::{FormPhase, Notice, CONFIRMATION_NOTICE};
use crate::submission::{ContactSubmitter, SimulatedSubmitter, SIMULATED_SUBMIT_DELAY};
use tokio::time::Instant;

fn page_layout() -> PageLayout {
    PageLayout::stacked(
        64.0,
        &[
            (SectionId::About, 720.0),
            (SectionId::Education, 560.0),
            (SectionId::Skills, 620.0),
            (SectionId::Projects, 680.0),
            (SectionId::Certifications, 420.0),
            (SectionId::Activities, 420.0),
            (SectionId::Contact, 900.0),
        ],
    )
}

fn mounted() -> PageView {
    let mut page = PageView::default();
    assert!(page.mount());
    page
}

fn fill(page: &mut PageView) {
    page.update_field(ContactField::Name, "Ada");
    page.update_field(ContactField::Email, "ada@example.com");
    page.update_field(ContactField::Subject, "Hello");
    page.update_field(ContactField::Message, "Loved the projects section.");
}

#[test]
fn initial_load_reveals_hero_and_highlights_about() {
    let mut page = mounted();
    let layout = page_layout();
    page.on_scroll(0.0, &layout);
    page.on_viewport(Viewport::new(0.0, 800.0), &layout);

    assert_eq!(page.active_section(), SectionId::About);
    assert!(page.is_revealed(SectionId::About));
    assert!(!page.is_revealed(SectionId::Contact));
    let selected: Vec<_> = page.nav_links().into_iter().filter(|l| l.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].section, SectionId::About);
}

#[test]
fn hero_is_hidden_before_mount() {
    let page = PageView::default();
    assert_eq!(page.lifecycle(), Lifecycle::Created);
    assert!(!page.is_revealed(SectionId::About));
}

#[test]
fn scrolling_to_projects_activates_and_reveals_it() {
    let mut page = mounted();
    let layout = page_layout();
    let projects = layout.get(SectionId::Projects).expect("projects");
    let offset = projects.offset_top - NAV_BAR_OFFSET + 10.0;

    assert_eq!(page.on_scroll(offset, &layout), Some(SectionId::Projects));
    let revealed = page.on_viewport(Viewport::new(offset, 800.0), &layout);
    assert!(revealed.contains(&SectionId::Projects));
    assert!(page.is_revealed(SectionId::Projects));
}

#[test]
fn navigation_request_targets_section_top() {
    let mut page = mounted();
    let layout = page_layout();
    let request = page.navigate("certifications", &layout).expect("known anchor");
    assert_eq!(
        request.target_offset,
        layout.get(SectionId::Certifications).expect("anchor").offset_top
    );
    assert_eq!(page.take_scroll_request(), Some(request));

    assert_eq!(page.navigate("nowhere", &layout), None);
    assert_eq!(page.take_scroll_request(), None);
}

#[test]
fn unmount_releases_everything_exactly_once() {
    let mut page = mounted();
    fill(&mut page);
    let pending = page.submit_contact().expect("submit");

    let teardown = page.unmount().expect("first unmount");
    assert!(teardown.observer_disconnected);
    assert!(teardown.scroll_listener_detached);
    assert_eq!(teardown.cancelled_submission, Some(pending.ticket));
    assert_eq!(page.unmount(), None);
    assert_eq!(page.lifecycle(), Lifecycle::Unmounted);
}

#[test]
fn events_after_unmount_are_ignored() {
    let mut page = mounted();
    let layout = page_layout();
    page.on_viewport(Viewport::new(0.0, 800.0), &layout);
    fill(&mut page);
    let pending = page.submit_contact().expect("submit");
    page.unmount();

    assert!(page.visible_sections().is_empty());
    assert_eq!(page.on_scroll(3000.0, &layout), None);
    assert_eq!(page.active_section(), SectionId::About);
    assert!(page.on_viewport(Viewport::new(3000.0, 800.0), &layout).is_empty());
    assert_eq!(page.navigate("contact", &layout), None);
    assert!(!page.finish_submission(pending.ticket, Ok(ContactReceipt::simulated())));
    assert!(page.contact().notice().is_none());
}

#[test]
fn remount_starts_with_an_empty_reveal_history() {
    let mut page = mounted();
    let layout = page_layout();
    page.on_viewport(Viewport::new(0.0, 800.0), &layout);
    assert!(!page.visible_sections().is_empty());
    page.unmount();
    assert!(page.mount());
    assert!(page.visible_sections().is_empty());
}

#[test]
fn empty_required_field_never_enters_submitting() {
    let mut page = mounted();
    fill(&mut page);
    page.update_field(ContactField::Subject, "");
    assert!(page.submit_contact().is_err());
    assert_eq!(page.contact().phase(), FormPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn full_form_submission_clears_fields_after_the_delay() {
    let mut page = mounted();
    fill(&mut page);
    let pending = page.submit_contact().expect("submit");
    assert!(page.contact().is_submitting());

    let started = Instant::now();
    let outcome = SimulatedSubmitter::default().submit(&pending.message).await;
    assert!(started.elapsed() >= SIMULATED_SUBMIT_DELAY);

    assert!(page.finish_submission(pending.ticket, outcome));
    assert_eq!(page.contact().phase(), FormPhase::Idle);
    assert!(page.contact().form().is_empty());
    assert_eq!(
        page.contact().notice(),
        Some(&Notice::Confirmation(CONFIRMATION_NOTICE.to_string()))
    );
}

#[test]
fn card_reveals_are_staggered_per_section() {
    let first = PageView::card_reveal(SectionId::Education, 0);
    let third = PageView::card_reveal(SectionId::Education, 2);
    assert_eq!(first.from, SlideFrom::Left);
    assert_eq!(first.delay, Duration::from_millis(100));
    assert_eq!(third.delay, Duration::from_millis(500));
    assert_eq!(
        PageView::card_reveal(SectionId::Activities, 3).delay,
        Duration::from_millis(400)
    );
    assert_eq!(
        PageView::card_reveal(SectionId::Activities, 0).from,
        SlideFrom::Right
    );
}
