/// Scene controller.
///
/// Owns every scene object, the spatial index, the camera and the GPU
/// resources the objects share. One call to [`Scene::frame`] runs the
/// per-frame pipeline:
///
/// 1. move the camera from the frame's input and clamp it into the world
/// 2. query the index for objects within the draw radius
/// 3. draw the ground and every visible object
/// 4. present, then feed the FPS counter
///
/// The scene never owns the device; it is passed to every call that needs it.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::SlotMap;
use crate::camera::{Camera, Projection, VerticalAxis};
use crate::config::{IndexKind, ObjectShape, SceneConfig};
use crate::drawable::{Crate, Cube, Drawable, Plane, Sphere};
use crate::error::Result;
use crate::graphics_device::{FrameStats, GraphicsDevice, ShaderKey};
use crate::input::InputState;
use crate::resource::{ShaderLibrary, Texture, TextureCache, COLOR_SHADER, TEXTURE_SHADER};
use super::brute_force_scene_index::BruteForceSceneIndex;
use super::fps_counter::FpsCounter;
use super::octree_scene_index::OctreeSceneIndex;
use super::placement::{generate_positions, pick_shape};
use super::scene_index::{SceneIndex, SceneObjectKey};

const SOURCE: &str = "cubefield::Scene";

/// Base text of the window title
pub const TITLE: &str = "Cubefield";

/// Outcome of one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Objects returned by the index query
    pub visible: usize,
    /// Draw calls accepted by the device (ground included)
    pub drawn: usize,
    /// A draw call failed and the rest of the frame was skipped
    pub draw_failed: bool,
    /// Whether the frame reached the screen
    pub presented: bool,
    /// New window title, once per FPS reporting interval
    pub title: Option<String>,
    pub stats: Option<FrameStats>,
}

pub struct Scene {
    config: SceneConfig,
    camera: Camera,
    projection: Projection,
    index: Box<dyn SceneIndex>,
    objects: SlotMap<SceneObjectKey, Box<dyn Drawable>>,
    ground: Option<Plane>,
    textures: TextureCache,
    shaders: ShaderLibrary,
    fps: FpsCounter,
    visible: Vec<SceneObjectKey>,
    world_min: Vec3,
    world_max: Vec3,
    frame_count: u64,
}

impl Scene {
    /// Build a scene: load shaders and the texture, place the objects,
    /// upload them and fill the index.
    ///
    /// Any failure releases what was already created and is returned; there
    /// is no partially built scene.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig`, `Error::ResourceLoad`, `Error::ShaderCompilation`
    /// or a device error.
    pub fn build(config: &SceneConfig, device: &mut dyn GraphicsDevice, textures: TextureCache) -> Result<Self> {
        if let Err(err) = config.validate() {
            crate::engine_bail!(SOURCE, err);
        }

        let world_size = config.world_size_f32();
        let index: Box<dyn SceneIndex> = match config.index {
            IndexKind::Octree => Box::new(OctreeSceneIndex::new(world_size, config.octant_size as f32)?),
            IndexKind::BruteForce => Box::new(BruteForceSceneIndex::new(config.octant_size as f32)?),
        };

        let center = Vec3::splat(world_size / 2.0);
        let (width, height) = (config.width, config.height);
        let mut scene = Self {
            config: config.clone(),
            camera: Camera::new(
                center,
                center - Vec3::Z,
                VerticalAxis::Y,
                config.sensitivity,
                config.speed,
            ),
            projection: Projection::new(width, height, config.far_plane()),
            index,
            objects: SlotMap::with_key(),
            ground: None,
            textures,
            shaders: ShaderLibrary::new(&config.shader_dir),
            fps: FpsCounter::default(),
            visible: Vec::new(),
            world_min: Vec3::ZERO,
            world_max: Vec3::splat(world_size),
            frame_count: 0,
        };

        if let Err(err) = scene.populate(device) {
            crate::engine_error!(SOURCE, "Scene construction failed: {}", err);
            scene.destroy(device);
            return Err(err);
        }
        Ok(scene)
    }

    fn populate(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let color = self.shaders.load(device, COLOR_SHADER, false)?;
        let textured = self.shaders.load(device, TEXTURE_SHADER, true)?;
        let texture = self.textures.get_or_load(device, &self.config.texture_path)?;

        let seed = match self.config.seed {
            0 => clock_seed(),
            seed => seed,
        };
        crate::engine_info!(
            SOURCE,
            "Placing {} objects ({:?}, {:?}) in a {}^3 world, seed {}",
            self.config.objects_count,
            self.config.shape,
            self.config.placement,
            self.config.world_size,
            seed
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = generate_positions(
            self.config.placement,
            self.config.objects_count,
            self.config.world_size_f32(),
            &mut rng,
        );

        for position in positions {
            let shape = pick_shape(self.config.shape, &mut rng);
            let mut object = self.make_object(shape, position, color, textured, &texture);
            object.load(device)?;
            let key = self.objects.insert(object);
            self.index.insert(key, position);
        }

        if self.config.ground {
            let world_size = self.config.world_size_f32();
            let repeat = (world_size / self.config.octant_size as f32).max(1.0);
            let mut ground = Plane::new(
                Vec3::new(world_size / 2.0, 0.0, world_size / 2.0),
                world_size,
                world_size,
                repeat,
                repeat,
                textured,
                texture.clone(),
            );
            ground.load(device)?;
            self.ground = Some(ground);
        }

        crate::engine_info!(
            SOURCE,
            "Scene ready: {} objects in {} index, draw radius {} octants of {}",
            self.index.len(),
            self.index.name(),
            self.config.octants_drawn_count,
            self.config.octant_size
        );
        crate::engine_debug!(SOURCE, "Textures:\n{}", self.textures.describe());
        Ok(())
    }

    fn make_object(
        &self,
        shape: ObjectShape,
        position: Vec3,
        color: ShaderKey,
        textured: ShaderKey,
        texture: &Arc<Texture>,
    ) -> Box<dyn Drawable> {
        let size = self.config.object_size;
        match shape {
            ObjectShape::Cube => Box::new(Cube::new(position, size, color)),
            ObjectShape::Sphere => Box::new(Sphere::new(position, size, color)),
            ObjectShape::Crate | ObjectShape::Mixed => {
                Box::new(Crate::new(position, size, textured, texture.clone()))
            }
        }
    }

    // ===== FRAME =====

    /// Run one frame with the input gathered since the previous one
    ///
    /// Draw or present failures are logged and only cost this frame.
    pub fn frame(&mut self, input: &InputState, device: &mut dyn GraphicsDevice, elapsed: Duration) -> FrameReport {
        self.camera.move_and_clamp(input, self.world_min, self.world_max);

        self.visible.clear();
        self.index.query_near(
            self.camera.position(),
            self.config.octants_drawn_count,
            &mut self.visible,
        );

        let mut report = FrameReport {
            visible: self.visible.len(),
            ..Default::default()
        };

        match self.render(device, &mut report) {
            Ok(stats) => {
                report.presented = true;
                report.stats = Some(stats);
            }
            Err(err) => {
                crate::engine_error!(SOURCE, "Frame {} not presented: {}", self.frame_count, err);
            }
        }

        if let Some(fps) = self.fps.tick(elapsed) {
            crate::engine_debug!(
                SOURCE,
                "{:.1} FPS, {} visible objects, camera at {:?}",
                fps,
                report.visible,
                self.camera.position()
            );
            report.title = Some(format!("{} - {:.0} FPS", TITLE, fps));
        }

        crate::engine_trace!(
            SOURCE,
            "Frame {}: camera {:?} looking {:?}, {} visible",
            self.frame_count,
            self.camera.position(),
            self.camera.orientation(),
            report.visible
        );
        self.frame_count += 1;
        report
    }

    /// Draw the ground and the visible objects
    ///
    /// A failing draw ends the draw loop; the frame is still closed so the
    /// device is ready for the next one.
    fn render(&self, device: &mut dyn GraphicsDevice, report: &mut FrameReport) -> Result<FrameStats> {
        device.begin_frame()?;

        let projection = self.projection.matrix();
        let view = self.camera.view_matrix();
        if let Err(err) = self.draw_all(device, &projection, &view, &mut report.drawn) {
            crate::engine_error!(
                SOURCE,
                "Draw failed after {} calls in frame {}: {}",
                report.drawn,
                self.frame_count,
                err
            );
            report.draw_failed = true;
        }
        device.end_frame()
    }

    fn draw_all(&self, device: &mut dyn GraphicsDevice, projection: &Mat4, view: &Mat4, drawn: &mut usize) -> Result<()> {
        if let Some(ground) = &self.ground {
            ground.draw(device, projection, view)?;
            *drawn += 1;
        }
        for key in &self.visible {
            if let Some(object) = self.objects.get(*key) {
                object.draw(device, projection, view)?;
                *drawn += 1;
            }
        }
        Ok(())
    }

    // ===== LIFECYCLE =====

    /// Window resized: keep the projection's aspect ratio in sync
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_viewport(width, height);
        crate::engine_debug!(SOURCE, "Viewport resized to {}x{}", width, height);
    }

    /// Release every GPU resource owned by the scene
    pub fn destroy(&mut self, device: &mut dyn GraphicsDevice) {
        for (_, object) in self.objects.iter_mut() {
            object.release(device);
        }
        self.objects.clear();
        self.index.clear();
        self.visible.clear();
        if let Some(mut ground) = self.ground.take() {
            ground.release(device);
        }
        self.textures.release_all(device);
        self.shaders.release_all(device);
        crate::engine_debug!(SOURCE, "Scene destroyed after {} frames", self.frame_count);
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn index(&self) -> &dyn SceneIndex {
        self.index.as_ref()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, key: SceneObjectKey) -> Option<&dyn Drawable> {
        self.objects.get(key).map(|object| object.as_ref())
    }

    /// Objects found by the most recent frame's query
    pub fn visible(&self) -> &[SceneObjectKey] {
        &self.visible
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn has_ground(&self) -> bool {
        self.ground.is_some()
    }

    pub fn world_bounds(&self) -> (Vec3, Vec3) {
        (self.world_min, self.world_max)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Seed from the wall clock, never 0
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
