use shared::domain::SectionId;
use tracing::debug;

use crate::layout::PageLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Ask the renderer to bring `section`'s top edge to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    pub target_offset: f32,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    pending: Option<ScrollRequest>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `anchor` against the rendered layout. Unknown names and sections
    /// without an anchor are a silent no-op.
    pub fn navigate(&mut self, anchor: &str, layout: &PageLayout) -> Option<ScrollRequest> {
        let Some(section) = SectionId::from_anchor(anchor) else {
            debug!(anchor, "ignoring navigation to unknown anchor");
            return None;
        };
        self.navigate_to(section, layout, ScrollBehavior::Smooth)
    }

    pub fn navigate_to(
        &mut self,
        section: SectionId,
        layout: &PageLayout,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        let bounds = layout.get(section)?;
        let request = ScrollRequest {
            section,
            target_offset: bounds.offset_top,
            behavior,
        };
        debug!(section = %section, target = request.target_offset, "scroll requested");
        self.pending = Some(request);
        Some(request)
    }

    pub fn pending(&self) -> Option<ScrollRequest> {
        self.pending
    }

    /// Hands the pending request to the renderer exactly once.
    pub fn take_pending(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    pub fn links(&self, active: SectionId) -> Vec<NavLink> {
        SectionId::ALL
            .into_iter()
            .map(|section| NavLink {
                section,
                label: section.label(),
                selected: section == active,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
