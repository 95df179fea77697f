//! One page-view instance: owns all transient UI state between mount and unmount.

use std::{collections::BTreeSet, time::Duration};

use shared::{
    domain::{ContactField, SectionId},
    protocol::ContactReceipt,
};
use tracing::{debug, info};

use crate::{
    active_section::{ActiveSectionDetector, NAV_BAR_OFFSET},
    contact_form::{ContactFormController, FormError, PendingSubmission, SubmissionTicket},
    layout::{PageLayout, Viewport},
    navigation::{NavLink, NavigationController, ScrollBehavior, ScrollRequest},
    submission::SubmissionError,
    visibility::{ObserverOptions, VisibilityTracker},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageOptions {
    pub observer: ObserverOptions,
    pub reference_offset: f32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            observer: ObserverOptions::default(),
            reference_offset: NAV_BAR_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// Resources released by an unmount. The host aborts the cancelled submission's task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
    pub observer_disconnected: bool,
    pub scroll_listener_detached: bool,
    pub cancelled_submission: Option<SubmissionTicket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Below,
    Left,
    Right,
}

/// Entry animation for one card of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardReveal {
    pub from: SlideFrom,
    pub delay: Duration,
}

/// Stagger schedule per section: (direction, first delay, step) in milliseconds.
fn stagger(section: SectionId) -> (SlideFrom, u64, u64) {
    match section {
        SectionId::About => (SlideFrom::Below, 300, 200),
        SectionId::Education => (SlideFrom::Left, 100, 200),
        SectionId::Skills | SectionId::Projects => (SlideFrom::Below, 100, 200),
        SectionId::Certifications => (SlideFrom::Left, 100, 100),
        SectionId::Activities => (SlideFrom::Right, 100, 100),
        SectionId::Contact => (SlideFrom::Left, 200, 200),
    }
}

pub struct PageView {
    lifecycle: Lifecycle,
    loaded: bool,
    scroll_listener: bool,
    tracker: VisibilityTracker,
    detector: ActiveSectionDetector,
    navigation: NavigationController,
    contact: ContactFormController,
}

impl PageView {
    pub fn new(options: PageOptions) -> Self {
        Self {
            lifecycle: Lifecycle::Created,
            loaded: false,
            scroll_listener: false,
            tracker: VisibilityTracker::new(options.observer),
            detector: ActiveSectionDetector::with_reference_offset(options.reference_offset),
            navigation: NavigationController::new(),
            contact: ContactFormController::new(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Attaches the visibility observer to every section and the scroll listener.
    pub fn mount(&mut self) -> bool {
        if self.is_mounted() {
            return false;
        }
        for section in SectionId::ALL {
            self.tracker.observe(section);
        }
        self.scroll_listener = true;
        self.loaded = true;
        self.lifecycle = Lifecycle::Mounted;
        info!("portfolio page mounted");
        true
    }

    /// Releases observer, listener, and any in-flight submission. Only the first
    /// call after a mount does anything.
    pub fn unmount(&mut self) -> Option<Teardown> {
        if !self.is_mounted() {
            return None;
        }
        let teardown = Teardown {
            observer_disconnected: self.tracker.disconnect(),
            scroll_listener_detached: std::mem::replace(&mut self.scroll_listener, false),
            cancelled_submission: self.contact.cancel(),
        };
        self.navigation.take_pending();
        self.loaded = false;
        self.lifecycle = Lifecycle::Unmounted;
        info!(
            cancelled_submission = teardown.cancelled_submission.map(|t| t.0),
            "portfolio page unmounted"
        );
        Some(teardown)
    }

    /// Scroll event. Ignored unless the listener is attached.
    pub fn on_scroll(&mut self, scroll_offset: f32, layout: &PageLayout) -> Option<SectionId> {
        if !self.scroll_listener {
            return None;
        }
        self.detector.on_scroll(scroll_offset, layout)
    }

    /// Intersection pass for the current viewport. Returns sections revealed by it.
    pub fn on_viewport(&mut self, viewport: Viewport, layout: &PageLayout) -> Vec<SectionId> {
        self.tracker.evaluate(viewport, layout)
    }

    pub fn navigate(&mut self, anchor: &str, layout: &PageLayout) -> Option<ScrollRequest> {
        if !self.is_mounted() {
            return None;
        }
        self.navigation.navigate(anchor, layout)
    }

    pub fn navigate_to(
        &mut self,
        section: SectionId,
        layout: &PageLayout,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        if !self.is_mounted() {
            return None;
        }
        self.navigation.navigate_to(section, layout, behavior)
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.navigation.take_pending()
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        self.navigation.links(self.detector.active())
    }

    pub fn active_section(&self) -> SectionId {
        self.detector.active()
    }

    pub fn visible_sections(&self) -> &BTreeSet<SectionId> {
        self.tracker.seen()
    }

    /// Whether `section`'s reveal animation is unlocked. The hero section reveals on
    /// load; the rest once the tracker has seen them.
    pub fn is_revealed(&self, section: SectionId) -> bool {
        match section {
            SectionId::About => self.loaded,
            other => self.tracker.has_seen(other),
        }
    }

    pub fn card_reveal(section: SectionId, index: usize) -> CardReveal {
        let (from, first, step) = stagger(section);
        CardReveal {
            from,
            delay: Duration::from_millis(first + step * index as u64),
        }
    }

    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.update_field(field, value);
    }

    pub fn submit_contact(&mut self) -> Result<PendingSubmission, FormError> {
        self.contact.begin_submit()
    }

    /// Completion from the backend. Dropped once the view is torn down.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<ContactReceipt, SubmissionError>,
    ) -> bool {
        if !self.is_mounted() {
            debug!(ticket = ticket.0, "dropping completion for unmounted page");
            return false;
        }
        self.contact.finish(ticket, outcome)
    }

    pub fn dismiss_notice(&mut self) {
        self.contact.dismiss_notice();
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new(PageOptions::default())
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
