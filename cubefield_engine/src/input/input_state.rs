/// Per-frame input snapshot consumed by the camera and the frame loop.
///
/// Keys are tracked by logical meaning, not by physical key code. Mouse and
/// head-tracker deltas accumulate over one frame and are cleared by
/// [`InputState::end_frame`].

use std::time::Duration;
use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::MouseButton;
use super::head_tracker::HeadTracker;

/// Logical movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

pub struct InputState {
    keys_down: FxHashSet<Key>,
    mouse_buttons_down: FxHashSet<MouseButton>,
    mouse_position: Vec2,
    mouse_delta: Vec2,
    head_tracker: Option<Box<dyn HeadTracker>>,
    head_tracker_delta: Option<Vec2>,
    pending_resize: Option<(u32, u32)>,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: FxHashSet::default(),
            mouse_buttons_down: FxHashSet::default(),
            mouse_position: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            head_tracker: None,
            head_tracker_delta: None,
            pending_resize: None,
            quit_requested: false,
        }
    }

    // ===== KEYBOARD =====

    pub fn set_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    // ===== MOUSE =====

    /// Accumulate relative pointer motion for this frame
    pub fn add_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Relative motion since the last `end_frame`
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn is_mouse_moving(&self) -> bool {
        self.mouse_delta != Vec2::ZERO
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons_down.insert(button);
        } else {
            self.mouse_buttons_down.remove(&button);
        }
    }

    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    // ===== HEAD TRACKER =====

    /// Install or remove the head tracker
    pub fn set_head_tracker(&mut self, tracker: Option<Box<dyn HeadTracker>>) {
        self.head_tracker = tracker;
        self.head_tracker_delta = None;
    }

    pub fn has_head_tracker(&self) -> bool {
        self.head_tracker.is_some()
    }

    pub fn head_tracker_name(&self) -> Option<&str> {
        self.head_tracker.as_deref().map(|tracker| tracker.name())
    }

    /// Poll the tracker once for this frame
    pub fn poll_head_tracker(&mut self, elapsed: Duration) {
        self.head_tracker_delta = match self.head_tracker.as_mut() {
            Some(tracker) => tracker.poll(elapsed),
            None => None,
        };
    }

    /// Angular change in radians reported by the tracker this frame
    pub fn head_tracker_delta(&self) -> Option<Vec2> {
        self.head_tracker_delta
    }

    // ===== WINDOW =====

    pub fn request_resize(&mut self, width: u32, height: u32) {
        self.pending_resize = Some((width, height));
    }

    /// Latest resize since the previous call, if any
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.pending_resize.take()
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    // ===== FRAME =====

    /// Clear per-frame deltas; held keys and buttons persist
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.head_tracker_delta = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod tests;
