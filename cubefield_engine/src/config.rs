//! Scene configuration
//!
//! Every scene-wide parameter with its default. Values come from the
//! command line and are checked once by [`SceneConfig::validate`] before a
//! scene is built.

use std::path::PathBuf;
use crate::error::{Error, Result};

/// How object positions are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Uniformly random inside the world volume
    #[default]
    Random,
    /// Regular lattice filling the world volume
    Grid,
}

/// Which primitive each object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectShape {
    /// Textured cube
    #[default]
    Crate,
    /// Cube with a flat color per face
    Cube,
    Sphere,
    /// Random choice among the three above
    Mixed,
}

/// Spatial index implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexKind {
    #[default]
    Octree,
    BruteForce,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub objects_count: u32,
    /// Edge of the cubic world volume `[0, world_size]^3`
    pub world_size: u32,
    pub octant_size: u32,
    /// Draw radius in octants around the camera
    pub octants_drawn_count: u32,
    /// Edge length of each object
    pub object_size: f32,
    pub texture_path: PathBuf,
    pub shader_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Degrees of rotation per unit of input delta
    pub sensitivity: f32,
    /// World units per frame while a movement key is held
    pub speed: f32,
    pub placement: Placement,
    pub shape: ObjectShape,
    /// 0 picks a seed from the clock
    pub seed: u64,
    pub index: IndexKind,
    /// Draw the textured ground plane under the world
    pub ground: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_count: 1000,
            world_size: 128,
            octant_size: 8,
            octants_drawn_count: 2,
            object_size: 1.0,
            texture_path: PathBuf::from("assets/textures/crate.png"),
            shader_dir: PathBuf::from("assets/shaders"),
            width: 1280,
            height: 800,
            sensitivity: 0.5,
            speed: 0.5,
            placement: Placement::Random,
            shape: ObjectShape::Crate,
            seed: 0,
            index: IndexKind::Octree,
            ground: true,
        }
    }
}

impl SceneConfig {
    /// Check every value, reporting the first problem found
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("world size", self.world_size),
            ("octant size", self.octant_size),
            ("octants drawn count", self.octants_drawn_count),
        ] {
            if !value.is_power_of_two() {
                return Err(Error::InvalidConfig(format!("{} must be a power of two, got {}", name, value)));
            }
        }
        if self.octant_size > self.world_size {
            return Err(Error::InvalidConfig(format!(
                "octant size {} is larger than world size {}",
                self.octant_size, self.world_size
            )));
        }
        if self.objects_count == 0 {
            return Err(Error::InvalidConfig("objects count must be at least 1".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size {}x{} must not be empty",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("object size", self.object_size),
            ("sensitivity", self.sensitivity),
            ("speed", self.speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }

    pub fn world_size_f32(&self) -> f32 {
        self.world_size as f32
    }

    /// Far clip distance covering the whole world from any point in it
    pub fn far_plane(&self) -> f32 {
        self.world_size as f32 * 2.0
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
