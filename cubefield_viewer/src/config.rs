/// Viewer configuration: the scene parameters plus window options.

use cubefield_engine::cubefield::input::HeadTrackerMode;
use cubefield_engine::cubefield::scene::TITLE;
use cubefield_engine::cubefield::{Result, SceneConfig};
use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub scene: SceneConfig,
    pub fullscreen: bool,
    pub title: String,
    pub head_tracker: HeadTrackerMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            fullscreen: false,
            title: TITLE.to_string(),
            head_tracker: HeadTrackerMode::None,
        }
    }
}

impl ViewerConfig {
    /// Build and validate the configuration from parsed arguments
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for values the scene cannot run with.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let scene = SceneConfig {
            objects_count: cli.objects,
            world_size: cli.world_size,
            octant_size: cli.octant_size,
            octants_drawn_count: cli.octants_drawn,
            texture_path: cli.texture.clone(),
            shader_dir: cli.shader_dir.clone(),
            width: cli.width,
            height: cli.height,
            sensitivity: cli.sensitivity,
            speed: cli.speed,
            placement: cli.placement.into(),
            shape: cli.shape.into(),
            seed: cli.seed,
            index: cli.index.into(),
            ground: !cli.no_ground,
            ..SceneConfig::default()
        };
        scene.validate()?;

        Ok(Self {
            scene,
            fullscreen: cli.fullscreen,
            head_tracker: cli.head_tracker_mode(),
            ..Self::default()
        })
    }
}
