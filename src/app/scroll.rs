//! Page scroll position, eased progress and active navigation section.

use crate::content::{Section, NAV_ITEMS};
use std::time::Duration;

const SPRING_STIFFNESS: f64 = 100.0;
const SPRING_DAMPING: f64 = 30.0;
const REST_DELTA: f64 = 0.001;
/// Integration step for the spring; large frame gaps are split into these.
const SPRING_STEP: f64 = 1.0 / 240.0;

/// Damped spring chasing a target value (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    stiffness: f64,
    damping: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            stiffness,
            damping,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_at_rest(&self, target: f64) -> bool {
        (self.value - target).abs() < REST_DELTA && self.velocity.abs() < REST_DELTA
    }

    /// Advance by `dt` toward `target`, snapping once within the rest delta.
    pub fn step(&mut self, target: f64, dt: Duration) {
        let mut remaining = dt.as_secs_f64().min(0.25);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_STEP);
            let accel =
                -self.stiffness * (self.value - target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest(target) {
            self.value = target;
            self.velocity = 0.0;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: u16,
    content_rows: u16,
    viewport_rows: u16,
    spring: Spring,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn content_rows(&self) -> u16 {
        self.content_rows
    }

    pub fn max_offset(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// New page or viewport size; the offset is clamped to the new range.
    pub fn set_extent(&mut self, content_rows: u16, viewport_rows: u16) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.offset = row.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = target as u16;
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_rows.saturating_sub(1).max(1) as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_rows.saturating_sub(1).max(1) as i32));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Raw scroll progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 0.0;
        }
        self.offset as f64 / max as f64
    }

    /// Progress as drawn by the progress bar, eased by the spring.
    pub fn eased_progress(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }

    pub fn tick(&mut self, dt: Duration) {
        let target = self.progress();
        self.spring.step(target, dt);
    }
}

/// The last navigation section whose top is at or above `offset`.
pub fn active_section(section_tops: &[(Section, u16)], offset: u16) -> Option<Section> {
    section_tops
        .iter()
        .filter(|(section, top)| NAV_ITEMS.contains(section) && *top <= offset)
        .max_by_key(|(_, top)| *top)
        .map(|(section, _)| *section)
}
