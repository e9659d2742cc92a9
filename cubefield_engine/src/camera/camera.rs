/// First-person camera.
///
/// Owns the pose (position + orientation) and turns one frame of input into
/// a new pose: translate first, then rotate, then clamp the position into
/// the world box and recompute the look-at target.

use glam::{Mat4, Vec2, Vec3};
use crate::input::{InputState, Key};
use super::orientation::{Orientation, VerticalAxis};

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    eye_target: Vec3,
    sensitivity: f32,
    speed: f32,
}

impl Camera {
    /// Create a camera at `position` looking at `eye_target`
    ///
    /// `sensitivity` scales input deltas into degrees, `speed` is the
    /// distance covered per frame while a movement key is held.
    pub fn new(
        position: Vec3,
        eye_target: Vec3,
        vertical_axis: VerticalAxis,
        sensitivity: f32,
        speed: f32,
    ) -> Self {
        let orientation = Orientation::from_direction(vertical_axis, eye_target - position);
        // A target on top of the camera has no direction to keep
        let eye_target = if eye_target == position {
            position + orientation.direction()
        } else {
            eye_target
        };
        Self {
            position,
            orientation,
            eye_target,
            sensitivity,
            speed,
        }
    }

    // ===== PER-FRAME UPDATE =====

    /// Apply one frame of input, then keep the position inside `[min, max]`
    pub fn move_and_clamp(&mut self, input: &InputState, min: Vec3, max: Vec3) {
        self.move_position(input);
        self.move_orientation(input);
        self.position = self.position.max(min).min(max);
        self.update_eye_target();
    }

    /// Translate along the look and strafe directions for held keys
    pub fn move_position(&mut self, input: &InputState) {
        let forward = self.orientation.direction() * self.speed;
        let lateral = self.orientation.lateral() * self.speed;

        if input.is_key_down(Key::Forward) {
            self.position += forward;
        }
        if input.is_key_down(Key::Backward) {
            self.position -= forward;
        }
        if input.is_key_down(Key::StrafeLeft) {
            self.position += lateral;
        }
        if input.is_key_down(Key::StrafeRight) {
            self.position -= lateral;
        }
    }

    /// Rotate from mouse motion and head-tracker deltas
    pub fn move_orientation(&mut self, input: &InputState) {
        let mouse = input.mouse_delta();
        if mouse != Vec2::ZERO {
            self.orientate(mouse.x, mouse.y);
        }
        if let Some(radians) = input.head_tracker_delta() {
            if radians != Vec2::ZERO {
                let degrees = -radians * (180.0 / std::f32::consts::PI);
                self.orientate(degrees.x, degrees.y);
            }
        }
    }

    /// Feed a raw delta into the orientation model
    pub fn orientate(&mut self, dx: f32, dy: f32) {
        self.orientation.orientate(dx, dy, self.sensitivity);
    }

    /// Recompute the look-at target as `position + orientation`
    pub fn update_eye_target(&mut self) {
        self.eye_target = self.position + self.orientation.direction();
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_eye_target();
    }

    /// Look along `direction`; the angles are re-derived
    pub fn set_orientation(&mut self, direction: Vec3) {
        self.orientation.set_direction(direction);
        self.update_eye_target();
    }

    /// Set pitch and yaw in degrees
    pub fn set_angles(&mut self, phi: f32, theta: f32) {
        self.orientation.set_angles(phi, theta);
        self.update_eye_target();
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction
    pub fn orientation(&self) -> Vec3 {
        self.orientation.direction()
    }

    pub fn orientation_model(&self) -> &Orientation {
        &self.orientation
    }

    pub fn lateral(&self) -> Vec3 {
        self.orientation.lateral()
    }

    pub fn eye_target(&self) -> Vec3 {
        self.eye_target
    }

    pub fn vertical_axis(&self) -> VerticalAxis {
        self.orientation.vertical_axis()
    }

    /// Pitch in degrees
    pub fn phi(&self) -> f32 {
        self.orientation.phi()
    }

    /// Yaw in degrees
    pub fn theta(&self) -> f32 {
        self.orientation.theta()
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Right-handed look-at from position and eye target
    ///
    /// The up vector is the camera's own up (`direction × lateral`), which
    /// matches the vertical axis in general and stays valid when looking
    /// straight along it.
    pub fn view_matrix(&self) -> Mat4 {
        let up = self.orientation.direction().cross(self.orientation.lateral());
        Mat4::look_at_rh(self.position, self.eye_target, up)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
