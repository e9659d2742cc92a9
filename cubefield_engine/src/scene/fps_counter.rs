/// Frames-per-second accumulator.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    accumulated: Duration,
    frames: u32,
    last_fps: Option<f32>,
}

impl FpsCounter {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            frames: 0,
            last_fps: None,
        }
    }

    /// Count one frame that took `elapsed`
    ///
    /// Returns the average rate once per reporting interval.
    pub fn tick(&mut self, elapsed: Duration) -> Option<f32> {
        self.accumulated += elapsed;
        self.frames += 1;
        if self.accumulated < self.interval || self.accumulated.is_zero() {
            return None;
        }
        let fps = self.frames as f32 / self.accumulated.as_secs_f32();
        self.accumulated = Duration::ZERO;
        self.frames = 0;
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recent reported rate
    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
