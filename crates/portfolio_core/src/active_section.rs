use shared::domain::SectionId;
use tracing::trace;

use crate::layout::PageLayout;

/// Distance below the scroll offset used as the reference point, roughly the
/// height of the fixed navigation bar.
pub const NAV_BAR_OFFSET: f32 = 100.0;

/// First section (in declaration order) whose extent contains `position`.
pub fn section_at(position: f32, layout: &PageLayout) -> Option<SectionId> {
    layout
        .iter()
        .find(|(_, bounds)| bounds.contains(position))
        .map(|(section, _)| section)
}

#[derive(Debug, Clone)]
pub struct ActiveSectionDetector {
    active: SectionId,
    reference_offset: f32,
}

impl ActiveSectionDetector {
    pub fn new() -> Self {
        Self::with_reference_offset(NAV_BAR_OFFSET)
    }

    pub fn with_reference_offset(reference_offset: f32) -> Self {
        Self {
            active: SectionId::ALL[0],
            reference_offset,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn reference_offset(&self) -> f32 {
        self.reference_offset
    }

    /// Handles one scroll tick. The active section is only overwritten on a
    /// positive match; returns the new section when it changed.
    pub fn on_scroll(&mut self, scroll_offset: f32, layout: &PageLayout) -> Option<SectionId> {
        let position = scroll_offset + self.reference_offset;
        let found = section_at(position, layout)?;
        if found == self.active {
            return None;
        }
        trace!(from = %self.active, to = %found, position, "active section changed");
        self.active = found;
        Some(found)
    }
}

impl Default for ActiveSectionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/active_section_tests.rs"]
mod tests;
