use std::collections::BTreeMap;

use shared::domain::SectionId;

/// Vertical extent of a rendered section, in page (content) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f32,
    pub offset_height: f32,
}

impl SectionBounds {
    pub fn new(offset_top: f32, offset_height: f32) -> Self {
        Self {
            offset_top,
            offset_height: offset_height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.offset_top + self.offset_height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f32) -> bool {
        position >= self.offset_top && position < self.bottom()
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_offset: f32, height: f32) -> Self {
        Self {
            scroll_offset,
            height: height.max(0.0),
        }
    }
}

/// Measured anchors of the current render. A section missing from the layout has
/// no anchor and is skipped by every lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    anchors: BTreeMap<SectionId, SectionBounds>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layout of vertically stacked sections starting at `start`.
    pub fn stacked(start: f32, heights: &[(SectionId, f32)]) -> Self {
        let mut layout = Self::new();
        let mut top = start;
        for (section, height) in heights {
            layout.insert(*section, SectionBounds::new(top, *height));
            top += height.max(0.0);
        }
        layout
    }

    pub fn insert(&mut self, section: SectionId, bounds: SectionBounds) {
        self.anchors.insert(section, bounds);
    }

    pub fn get(&self, section: SectionId) -> Option<SectionBounds> {
        self.anchors.get(&section).copied()
    }

    pub fn has_anchor(&self, section: SectionId) -> bool {
        self.anchors.contains_key(&section)
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Anchors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionBounds)> + '_ {
        self.anchors.iter().map(|(section, bounds)| (*section, *bounds))
    }

    pub fn content_height(&self) -> f32 {
        self.anchors
            .values()
            .map(SectionBounds::bottom)
            .fold(0.0, f32::max)
    }
}
