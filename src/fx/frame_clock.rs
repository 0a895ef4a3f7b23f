//! Frame rate limiting for the starfield.

use std::time::{Duration, Instant};

/// Skips frames that arrive sooner than `1 / target_fps` after the last
/// rendered one. The reference time is snapped to a whole number of
/// intervals so the cadence doesn't drift.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameThrottle {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a frame should be drawn at `now`.
    pub fn should_render(&mut self, now: Instant) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return true;
        };

        let delta = now.saturating_duration_since(last);
        if delta < self.interval {
            return false;
        }

        let interval_nanos = self.interval.as_nanos().max(1);
        let remainder = Duration::from_nanos((delta.as_nanos() % interval_nanos) as u64);
        self.last = Some(now - remainder);
        true
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_always_renders() {
        let mut throttle = FrameThrottle::new(60);
        assert!(throttle.should_render(Instant::now()));
    }

    #[test]
    fn test_frames_inside_interval_are_skipped() {
        let start = Instant::now();
        let mut throttle = FrameThrottle::new(10);
        assert!(throttle.should_render(start));
        assert!(!throttle.should_render(start + Duration::from_millis(99)));
        assert!(throttle.should_render(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_reference_time_keeps_the_remainder() {
        let start = Instant::now();
        let mut throttle = FrameThrottle::new(10);
        throttle.should_render(start);

        // 250ms late: reference snaps to 200ms, next frame due at 300ms
        assert!(throttle.should_render(start + Duration::from_millis(250)));
        assert!(!throttle.should_render(start + Duration::from_millis(299)));
        assert!(throttle.should_render(start + Duration::from_millis(300)));
    }
}
