//! Page state for the portfolio viewer: scroll-driven section tracking, navigation,
//! and the contact form with its submission boundary.
//!
//! Everything here is renderer-agnostic. A host feeds in layout measurements and
//! scroll offsets, and reads back which sections are revealed and which link is
//! highlighted.

pub mod active_section;
pub mod contact_form;
pub mod content;
pub mod layout;
pub mod navigation;
pub mod page;
pub mod submission;
pub mod visibility;

pub use active_section::{ActiveSectionDetector, NAV_BAR_OFFSET};
pub use contact_form::{
    ContactForm, ContactFormController, FormError, FormPhase, Notice, PendingSubmission,
    SubmissionTicket, CONFIRMATION_NOTICE,
};
pub use content::{ContentError, PortfolioContent};
pub use layout::{PageLayout, SectionBounds, Viewport};
pub use navigation::{NavLink, NavigationController, ScrollBehavior, ScrollRequest};
pub use page::{CardReveal, Lifecycle, PageOptions, PageView, SlideFrom, Teardown};
pub use submission::{
    ContactSubmitter, HttpSubmitter, SimulatedSubmitter, SubmissionError, SubmissionTask,
    SIMULATED_SUBMIT_DELAY,
};
pub use visibility::{IntersectionEntry, ObserverOptions, VisibilityTracker};
