/// Command line surface of the viewer.

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use cubefield_engine::cubefield::input::HeadTrackerMode;
use cubefield_engine::cubefield::{IndexKind, ObjectShape, Placement};

const DEFAULT_TEXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/textures/crate.png");
const DEFAULT_SHADER_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders");

#[derive(Parser, Debug)]
#[command(name = "cubefield", version, about = "Walk through a field of cubes (arrows/WASD/ZQSD to move, mouse to look, Esc to quit)")]
pub struct Cli {
    /// Borderless fullscreen window
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Head-tracking source
    #[arg(long, value_enum, default_value_t = TrackerArg::None)]
    pub head_tracker: TrackerArg,

    /// Shorthand for `--head-tracker simulated`
    #[arg(short = 'o')]
    pub simulated_tracker: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Texture for crates and the ground
    #[arg(long, default_value = DEFAULT_TEXTURE)]
    pub texture: PathBuf,

    /// Directory holding color.wgsl and texture.wgsl
    #[arg(long, default_value = DEFAULT_SHADER_DIR)]
    pub shader_dir: PathBuf,

    /// Number of objects in the world
    #[arg(long, default_value_t = 1000)]
    pub objects: u32,

    /// Edge length of the world cube (power of two)
    #[arg(long, default_value_t = 128, value_parser = power_of_two)]
    pub world_size: u32,

    /// Edge length of one octant (power of two)
    #[arg(long, default_value_t = 8, value_parser = power_of_two)]
    pub octant_size: u32,

    /// Draw radius in octants around the camera (power of two)
    #[arg(long, default_value_t = 2, value_parser = power_of_two)]
    pub octants_drawn: u32,

    #[arg(long, value_enum, default_value_t = ShapeArg::Crate)]
    pub shape: ShapeArg,

    #[arg(long, value_enum, default_value_t = PlacementArg::Random)]
    pub placement: PlacementArg,

    /// Placement seed, 0 picks one from the clock
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Spatial index used for the visibility query
    #[arg(long, value_enum, default_value_t = IndexArg::Octree)]
    pub index: IndexArg,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Degrees of rotation per unit of mouse motion
    #[arg(long, default_value_t = 0.5)]
    pub sensitivity: f32,

    /// Distance moved per frame while a key is held
    #[arg(long, default_value_t = 0.5)]
    pub speed: f32,

    /// Skip the textured ground plane
    #[arg(long)]
    pub no_ground: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerArg {
    None,
    Simulated,
    Device,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeArg {
    Crate,
    Cube,
    Sphere,
    Mixed,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementArg {
    Random,
    Grid,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexArg {
    Octree,
    Brute,
}

impl Cli {
    pub fn head_tracker_mode(&self) -> HeadTrackerMode {
        if self.simulated_tracker {
            return HeadTrackerMode::Simulated;
        }
        match self.head_tracker {
            TrackerArg::None => HeadTrackerMode::None,
            TrackerArg::Simulated => HeadTrackerMode::Simulated,
            TrackerArg::Device => HeadTrackerMode::Device,
        }
    }
}

impl From<ShapeArg> for ObjectShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Crate => ObjectShape::Crate,
            ShapeArg::Cube => ObjectShape::Cube,
            ShapeArg::Sphere => ObjectShape::Sphere,
            ShapeArg::Mixed => ObjectShape::Mixed,
        }
    }
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Random => Placement::Random,
            PlacementArg::Grid => Placement::Grid,
        }
    }
}

impl From<IndexArg> for IndexKind {
    fn from(arg: IndexArg) -> Self {
        match arg {
            IndexArg::Octree => IndexKind::Octree,
            IndexArg::Brute => IndexKind::BruteForce,
        }
    }
}

fn power_of_two(value: &str) -> Result<u32, String> {
    let number: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", value))?;
    if number.is_power_of_two() {
        Ok(number)
    } else {
        Err(format!("{} is not a power of two", number))
    }
}
