//! Timing and frame pacing.

use std::thread;
use std::time::{Duration, Instant};

use super::settings::EngineParams;

pub struct TimeSystem {
    max_fps: u32,
    timestep: Duration,
    last_frame_timepoint: Instant,
}

impl TimeSystem {
    pub fn new(setup: EngineParams) -> Self {
        TimeSystem {
            max_fps: setup.max_fps,
            timestep: Duration::new(0, 0),
            last_frame_timepoint: Instant::now(),
        }
    }

    /// Returns the time budget of one frame, or `None` if the pacing is disabled.
    #[inline]
    pub fn frame_budget(&self) -> Option<Duration> {
        if self.max_fps > 0 {
            Some(Duration::from_secs(1) / self.max_fps)
        } else {
            None
        }
    }

    /// Marks the beginning of a frame.
    #[inline]
    pub fn begin(&mut self) {
        self.last_frame_timepoint = Instant::now();
    }

    /// Sleeps the rest of the frame budget, then records the duration of the frame.
    pub fn advance(&mut self) {
        if let Some(budget) = self.frame_budget() {
            let remaining = remaining(budget, self.last_frame_timepoint.elapsed());
            if remaining > Duration::new(0, 0) {
                thread::sleep(remaining);
            }
        }

        self.timestep = self.last_frame_timepoint.elapsed();
    }

    /// Gets current fps.
    #[inline]
    pub fn fps(&self) -> u32 {
        let nanos = self.timestep.as_secs() * 1_000_000_000 + u64::from(self.timestep.subsec_nanos());
        if nanos == 0 {
            0
        } else {
            (1_000_000_000 / nanos) as u32
        }
    }

    /// Gets the duration duraing last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }
}

/// Returns `max(0, budget - elapsed)`.
#[inline]
pub fn remaining(budget: Duration, elapsed: Duration) -> Duration {
    budget
        .checked_sub(elapsed)
        .unwrap_or_else(|| Duration::new(0, 0))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn remaining_is_clamped() {
        let budget = Duration::from_millis(16);
        assert_eq!(
            remaining(budget, Duration::from_millis(6)),
            Duration::from_millis(10)
        );
        assert_eq!(remaining(budget, budget), Duration::new(0, 0));
        assert_eq!(
            remaining(budget, Duration::from_millis(40)),
            Duration::new(0, 0)
        );
    }

    #[test]
    fn budget() {
        let time = TimeSystem::new(EngineParams { max_fps: 50 });
        assert_eq!(time.frame_budget(), Some(Duration::from_millis(20)));

        let time = TimeSystem::new(EngineParams { max_fps: 0 });
        assert_eq!(time.frame_budget(), None);
    }

    #[test]
    fn advance_paces_frames() {
        let mut time = TimeSystem::new(EngineParams { max_fps: 100 });
        time.begin();
        time.advance();
        assert!(time.frame_duration() >= Duration::from_millis(10));
        assert!(time.fps() <= 100);
    }
}
