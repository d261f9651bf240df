/// Per-frame delta time source for sprite animation.

use std::time::{Duration, Instant};

/// Frame clock
///
/// `tick()` measures wall time since the previous tick; tests and
/// fixed-step loops use `set_delta_time` instead.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    delta: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: None,
            delta: Duration::ZERO,
        }
    }

    /// Start a new frame; the first tick yields a zero delta
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.delta
    }

    /// Force the delta of the current frame, in milliseconds
    pub fn set_delta_time(&mut self, delta_ms: f32) {
        self.delta = Duration::from_secs_f32(delta_ms.max(0.0) / 1000.0);
    }

    /// Delta of the current frame, in milliseconds
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
