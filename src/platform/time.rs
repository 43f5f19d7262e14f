//! Animation clock

use std::time::Instant;

use crate::sim::FrameTime;

/// Monotonic seconds since startup, sampled once per frame
#[derive(Debug, Clone)]
pub struct AnimationClock {
    start: Instant,
    last: Option<f32>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last: None,
        }
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Sample the clock for a new frame
    pub fn tick(&mut self) -> FrameTime {
        let now = self.elapsed();
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        FrameTime::new(now, dt)
    }
}
