/// Spherical orientation model
///
/// Converts accumulated pitch (`phi`) and yaw (`theta`) angles, both in
/// degrees, into a unit look direction for one of three vertical-axis
/// conventions, and back.

use glam::Vec3;

/// Default pitch limit in degrees
pub const DEFAULT_PHI_LIMIT: f32 = 89.0;

/// Below this length a horizontal projection or cross product is treated as zero
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Clamp a pitch angle (degrees) into `[-limit, limit]`
///
/// Idempotent: `clamp_phi(clamp_phi(p, l), l) == clamp_phi(p, l)`.
pub fn clamp_phi(phi: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    phi.max(-limit).min(limit)
}

// ===== VERTICAL AXIS =====

/// Which world basis axis points "up"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAxis {
    X,
    Y,
    Z,
}

impl VerticalAxis {
    /// Axis of a vector with exactly one non-zero component
    pub fn from_vector(v: Vec3) -> Option<Self> {
        match (v.x != 0.0, v.y != 0.0, v.z != 0.0) {
            (true, false, false) => Some(VerticalAxis::X),
            (false, true, false) => Some(VerticalAxis::Y),
            (false, false, true) => Some(VerticalAxis::Z),
            _ => None,
        }
    }

    /// Unit vector of this axis
    pub fn unit(self) -> Vec3 {
        match self {
            VerticalAxis::X => Vec3::X,
            VerticalAxis::Y => Vec3::Y,
            VerticalAxis::Z => Vec3::Z,
        }
    }

    /// Look direction for angles given in radians
    pub fn direction(self, phi: f32, theta: f32) -> Vec3 {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        match self {
            VerticalAxis::X => Vec3::new(sin_phi, cos_phi * cos_theta, cos_phi * sin_theta),
            VerticalAxis::Y => Vec3::new(cos_phi * sin_theta, sin_phi, cos_phi * cos_theta),
            VerticalAxis::Z => Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi),
        }
    }

    /// Split a direction into (vertical, cos-theta, sin-theta) components
    fn components(self, d: Vec3) -> (f32, f32, f32) {
        match self {
            VerticalAxis::X => (d.x, d.y, d.z),
            VerticalAxis::Y => (d.y, d.z, d.x),
            VerticalAxis::Z => (d.z, d.x, d.y),
        }
    }

    /// Recover `(phi, theta)` in radians from a unit direction
    ///
    /// When the direction is parallel to the vertical axis, theta is
    /// undefined and `fallback_theta` is returned in its place.
    pub fn angles(self, direction: Vec3, fallback_theta: f32) -> (f32, f32) {
        let (vertical, cos_part, sin_part) = self.components(direction);
        let phi = vertical.clamp(-1.0, 1.0).asin();
        let theta = if cos_part.hypot(sin_part) < DEGENERATE_EPSILON {
            fallback_theta
        } else {
            sin_part.atan2(cos_part)
        };
        (phi, theta)
    }
}

// ===== ORIENTATION =====

/// Look direction with the angles it was derived from
///
/// `direction` and `(phi, theta)` are kept consistent after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    vertical_axis: VerticalAxis,
    phi: f32,
    theta: f32,
    phi_limit: f32,
    direction: Vec3,
    lateral: Vec3,
}

impl Orientation {
    /// Build from angles in degrees (phi is taken as given, not clamped)
    pub fn from_angles(vertical_axis: VerticalAxis, phi: f32, theta: f32) -> Self {
        let mut orientation = Self {
            vertical_axis,
            phi,
            theta,
            phi_limit: DEFAULT_PHI_LIMIT,
            direction: Vec3::ZERO,
            lateral: Vec3::ZERO,
        };
        orientation.refresh_direction();
        orientation
    }

    /// Build from a look direction (need not be normalized)
    ///
    /// A zero-length direction yields `phi = theta = 0`.
    pub fn from_direction(vertical_axis: VerticalAxis, direction: Vec3) -> Self {
        let mut orientation = Self::from_angles(vertical_axis, 0.0, 0.0);
        orientation.set_direction(direction);
        orientation
    }

    /// Apply an input delta: `phi -= dy * s`, `theta -= dx * s`, then clamp phi
    pub fn orientate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.phi = clamp_phi(self.phi - dy * sensitivity, self.phi_limit);
        self.theta -= dx * sensitivity;
        self.refresh_direction();
    }

    /// Set both angles in degrees
    pub fn set_angles(&mut self, phi: f32, theta: f32) {
        self.phi = phi;
        self.theta = theta;
        self.refresh_direction();
    }

    /// Set the look direction; the angles are re-derived from it
    pub fn set_direction(&mut self, direction: Vec3) {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }
        let (phi, theta) = self.vertical_axis.angles(direction, self.theta.to_radians());
        self.phi = phi.to_degrees();
        self.theta = theta.to_degrees();
        self.direction = direction;
        self.refresh_lateral();
    }

    /// Change the pitch limit (degrees), re-clamping the current pitch
    pub fn set_phi_limit(&mut self, limit: f32) {
        self.phi_limit = limit.abs();
        self.phi = clamp_phi(self.phi, self.phi_limit);
        self.refresh_direction();
    }

    pub fn vertical_axis(&self) -> VerticalAxis {
        self.vertical_axis
    }

    /// Pitch in degrees
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Yaw in degrees
    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi_limit(&self) -> f32 {
        self.phi_limit
    }

    /// Unit look direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit strafe direction, `normalize(cross(up, direction))`
    pub fn lateral(&self) -> Vec3 {
        self.lateral
    }

    fn refresh_direction(&mut self) {
        self.direction = self
            .vertical_axis
            .direction(self.phi.to_radians(), self.theta.to_radians());
        self.refresh_lateral();
    }

    fn refresh_lateral(&mut self) {
        let up = self.vertical_axis.unit();
        let cross = up.cross(self.direction);
        if cross.length() >= DEGENERATE_EPSILON {
            self.lateral = cross.normalize();
        } else if self.lateral == Vec3::ZERO {
            // Looking straight along the axis before any lateral exists: use the heading
            let heading = self.vertical_axis.direction(0.0, self.theta.to_radians());
            self.lateral = up.cross(heading).normalize_or_zero();
        }
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
