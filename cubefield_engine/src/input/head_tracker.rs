/// Head-tracking input sources
///
/// A tracker reports how far the head turned since its previous poll, in
/// radians. When no tracker is wanted, or the requested one cannot be
/// opened, the input state simply holds `None`.

use std::f32::consts::TAU;
use std::time::Duration;
use glam::Vec2;
use crate::error::{Error, Result};

/// Angular input source
pub trait HeadTracker {
    /// Human readable name for logs
    fn name(&self) -> &str;

    /// Angular change `(yaw, pitch)` in radians since the previous poll,
    /// or `None` when the head did not move
    fn poll(&mut self, elapsed: Duration) -> Option<Vec2>;
}

/// Which tracker the viewer should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadTrackerMode {
    #[default]
    None,
    /// Synthetic sway, useful to exercise the tracker path without hardware
    Simulated,
    /// A physical head-mounted display
    Device,
}

/// Open the tracker for `mode`
///
/// # Errors
///
/// `Error::DeviceUnavailable` for `HeadTrackerMode::Device`: no hardware
/// backend is compiled in.
pub fn open_head_tracker(mode: HeadTrackerMode) -> Result<Option<Box<dyn HeadTracker>>> {
    match mode {
        HeadTrackerMode::None => Ok(None),
        HeadTrackerMode::Simulated => Ok(Some(Box::new(SimulatedHeadTracker::default()))),
        HeadTrackerMode::Device => Err(Error::DeviceUnavailable(
            "no head-tracking device backend available".to_string(),
        )),
    }
}

/// Open the tracker for `mode`, falling back to no tracker on failure
pub fn open_head_tracker_or_none(mode: HeadTrackerMode) -> Option<Box<dyn HeadTracker>> {
    match open_head_tracker(mode) {
        Ok(tracker) => {
            if let Some(tracker) = &tracker {
                crate::engine_info!("cubefield::HeadTracker", "Using head tracker '{}'", tracker.name());
            }
            tracker
        }
        Err(err) => {
            crate::engine_warn!(
                "cubefield::HeadTracker",
                "{}, continuing with mouse input only",
                err
            );
            None
        }
    }
}

// ===== SIMULATED TRACKER =====

/// Sinusoidal yaw sway
#[derive(Debug, Clone)]
pub struct SimulatedHeadTracker {
    amplitude: f32,
    period: Duration,
    time: f32,
    last_yaw: f32,
}

impl SimulatedHeadTracker {
    /// `amplitude` in radians, one full sway every `period`
    pub fn new(amplitude: f32, period: Duration) -> Self {
        Self {
            amplitude,
            period,
            time: 0.0,
            last_yaw: 0.0,
        }
    }

    /// Current absolute yaw in radians
    pub fn yaw(&self) -> f32 {
        self.last_yaw
    }
}

impl Default for SimulatedHeadTracker {
    fn default() -> Self {
        Self::new(0.35, Duration::from_secs(6))
    }
}

impl HeadTracker for SimulatedHeadTracker {
    fn name(&self) -> &str {
        "simulated"
    }

    fn poll(&mut self, elapsed: Duration) -> Option<Vec2> {
        let period = self.period.as_secs_f32();
        if period <= 0.0 {
            return None;
        }
        self.time = (self.time + elapsed.as_secs_f32()) % period;
        let yaw = self.amplitude * (TAU * self.time / period).sin();
        let delta = yaw - self.last_yaw;
        self.last_yaw = yaw;
        if delta == 0.0 {
            None
        } else {
            Some(Vec2::new(delta, 0.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_none_and_simulated() {
        assert!(open_head_tracker(HeadTrackerMode::None).unwrap().is_none());
        let tracker = open_head_tracker(HeadTrackerMode::Simulated).unwrap().unwrap();
        assert_eq!(tracker.name(), "simulated");
    }

    #[test]
    fn test_device_is_unavailable_and_degrades() {
        assert!(matches!(
            open_head_tracker(HeadTrackerMode::Device),
            Err(Error::DeviceUnavailable(_))
        ));
        assert!(open_head_tracker_or_none(HeadTrackerMode::Device).is_none());
    }

    #[test]
    fn test_simulated_deltas_sum_to_yaw() {
        let mut tracker = SimulatedHeadTracker::new(0.5, Duration::from_secs(4));
        let mut total = 0.0;
        for _ in 0..30 {
            if let Some(delta) = tracker.poll(Duration::from_millis(50)) {
                assert_eq!(delta.y, 0.0);
                total += delta.x;
            }
        }
        assert!((total - tracker.yaw()).abs() < 1e-5);
        assert!(tracker.yaw().abs() <= 0.5);
    }

    #[test]
    fn test_simulated_without_time_reports_nothing() {
        let mut tracker = SimulatedHeadTracker::default();
        assert_eq!(tracker.poll(Duration::ZERO), None);
    }
}
