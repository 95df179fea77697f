//! One-shot reveal tracking.
//!
//! The tracker records every section that has reached the intersection threshold
//! at least once. Membership only grows while the tracker is connected; it is a
//! history of what the reader has seen, not a live visibility flag.

use std::collections::BTreeSet;

use shared::domain::SectionId;
use tracing::debug;

use crate::layout::{PageLayout, SectionBounds, Viewport};

pub const DEFAULT_THRESHOLD: f32 = 0.1;
/// Negative margins shrink the root on every side.
pub const DEFAULT_ROOT_MARGIN: f32 = -50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f32,
    pub root_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub intersection_ratio: f32,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Measures `bounds` against the margin-adjusted viewport. The ratio is the
    /// fraction of the target's height that lies inside the root.
    pub fn measure(
        target: SectionId,
        bounds: SectionBounds,
        viewport: Viewport,
        options: ObserverOptions,
    ) -> Self {
        let root_top = viewport.scroll_offset - options.root_margin;
        let root_bottom = viewport.scroll_offset + viewport.height + options.root_margin;

        if root_bottom < root_top {
            return Self {
                target,
                intersection_ratio: 0.0,
                is_intersecting: false,
            };
        }

        if bounds.offset_height <= 0.0 {
            let inside = bounds.offset_top >= root_top && bounds.offset_top <= root_bottom;
            return Self {
                target,
                intersection_ratio: if inside { 1.0 } else { 0.0 },
                is_intersecting: inside,
            };
        }

        let overlap_top = bounds.offset_top.max(root_top);
        let overlap_bottom = bounds.bottom().min(root_bottom);
        let overlap = (overlap_bottom - overlap_top).max(0.0);
        Self {
            target,
            intersection_ratio: (overlap / bounds.offset_height).clamp(0.0, 1.0),
            is_intersecting: overlap > 0.0,
        }
    }

    fn meets(&self, threshold: f32) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserverOptions,
    observed: BTreeSet<SectionId>,
    seen: BTreeSet<SectionId>,
    connected: bool,
}

impl VisibilityTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: BTreeSet::new(),
            seen: BTreeSet::new(),
            connected: false,
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn observe(&mut self, target: SectionId) {
        self.connected = true;
        self.observed.insert(target);
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_observing(&self, target: SectionId) -> bool {
        self.connected && self.observed.contains(&target)
    }

    /// Stops all observation and forgets the reveal history.
    /// Returns `false` if the tracker was already disconnected.
    pub fn disconnect(&mut self) -> bool {
        if !self.connected {
            return false;
        }
        self.connected = false;
        self.observed.clear();
        self.seen.clear();
        true
    }

    /// Applies observer notifications. Entries for targets that are not observed,
    /// or that arrive after disconnect, are dropped. Returns newly revealed sections.
    pub fn record(&mut self, entries: &[IntersectionEntry]) -> Vec<SectionId> {
        if !self.connected {
            return Vec::new();
        }
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.target) || !entry.meets(self.options.threshold) {
                continue;
            }
            if self.seen.insert(entry.target) {
                debug!(section = %entry.target, ratio = entry.intersection_ratio, "section revealed");
                revealed.push(entry.target);
            }
        }
        revealed
    }

    /// Measures every observed target present in `layout` and records the result.
    pub fn evaluate(&mut self, viewport: Viewport, layout: &PageLayout) -> Vec<SectionId> {
        if !self.connected {
            return Vec::new();
        }
        let entries: Vec<IntersectionEntry> = layout
            .iter()
            .filter(|(section, _)| self.observed.contains(section))
            .map(|(section, bounds)| {
                IntersectionEntry::measure(section, bounds, viewport, self.options)
            })
            .collect();
        self.record(&entries)
    }

    pub fn has_seen(&self, section: SectionId) -> bool {
        self.seen.contains(&section)
    }

    pub fn seen(&self) -> &BTreeSet<SectionId> {
        &self.seen
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
