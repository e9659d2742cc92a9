/// Perspective projection parameters.

use glam::Mat4;

/// Right-handed perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub const DEFAULT_FOV_Y: f32 = 70.0;
    pub const DEFAULT_NEAR: f32 = 0.01;

    /// Default projection for a viewport and a far plane
    pub fn new(width: u32, height: u32, far: f32) -> Self {
        Self {
            fov_y: Self::DEFAULT_FOV_Y,
            aspect: aspect_ratio(width, height),
            near: Self::DEFAULT_NEAR,
            far,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Width over height; a zero height (minimized window) counts as 1
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_aspect_ratio() {
        let mut projection = Projection::new(1280, 800, 256.0);
        assert_eq!(projection.aspect, 1.6);
        projection.set_viewport(100, 0);
        assert_eq!(projection.aspect, 100.0);
    }

    #[test]
    fn test_near_plane_maps_to_zero_depth() {
        let projection = Projection::new(800, 800, 100.0);
        let clip = projection.matrix() * Vec4::new(0.0, 0.0, -projection.near, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-4);
    }
}
