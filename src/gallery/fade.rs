/// Cross-fade bookkeeping for slide changes
///
/// The navigation core only records which slide is fading out and when the
/// change happened; the view turns that into per-slide opacity.

use std::time::{Duration, Instant};

/// Length of the cross-fade between two slides
pub const CROSSFADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Slide that was visible before the change
    pub from: usize,
    started: Instant,
}

impl Fade {
    pub fn start(from: usize, now: Instant) -> Self {
        Self { from, started: now }
    }

    /// Progress in `[0.0, 1.0]`; 1.0 once the fade is complete
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / CROSSFADE.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}
