//! Frame-clock bookkeeping for section and card entry animations.

use std::{collections::HashMap, time::Duration};

use eframe::egui;
use portfolio_core::{PageView, SlideFrom};
use shared::domain::SectionId;

pub const SECTION_FADE: Duration = Duration::from_millis(1000);
pub const CARD_FADE: Duration = Duration::from_millis(500);
const SLIDE_DISTANCE: f32 = 40.0;

/// Records the frame time at which each section was first revealed.
#[derive(Debug, Default)]
pub struct RevealClock {
    revealed_at: HashMap<SectionId, f64>,
}

impl RevealClock {
    pub fn mark(&mut self, section: SectionId, now: f64) {
        self.revealed_at.entry(section).or_insert(now);
    }

    pub fn is_marked(&self, section: SectionId) -> bool {
        self.revealed_at.contains_key(&section)
    }

    /// Eased progress in `0..=1` of an animation that starts `delay` after the reveal.
    pub fn progress(&self, section: SectionId, delay: Duration, duration: Duration, now: f64) -> f32 {
        let Some(start) = self.revealed_at.get(&section) else {
            return 0.0;
        };
        let elapsed = now - start - delay.as_secs_f64();
        if elapsed <= 0.0 {
            return 0.0;
        }
        let t = (elapsed / duration.as_secs_f64()).min(1.0) as f32;
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Whether any animation of a revealed section is still running.
    pub fn is_animating(&self, now: f64) -> bool {
        let longest = SECTION_FADE.max(CARD_FADE + Duration::from_millis(2000));
        self.revealed_at
            .values()
            .any(|start| now - start < longest.as_secs_f64())
    }
}

/// Opacity and offset of one card at `now`.
pub fn card_motion(clock: &RevealClock, section: SectionId, index: usize, now: f64) -> (f32, egui::Vec2) {
    let reveal = PageView::card_reveal(section, index);
    let t = clock.progress(section, reveal.delay, CARD_FADE, now);
    let remaining = SLIDE_DISTANCE * (1.0 - t);
    let offset = match reveal.from {
        SlideFrom::Below => egui::vec2(0.0, remaining),
        SlideFrom::Left => egui::vec2(-remaining, 0.0),
        SlideFrom::Right => egui::vec2(remaining, 0.0),
    };
    (t, offset)
}
