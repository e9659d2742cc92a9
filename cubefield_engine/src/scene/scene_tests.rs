use std::path::PathBuf;
use std::time::Duration;
use crate::config::{IndexKind, ObjectShape, Placement, SceneConfig};
use crate::error::Error;
use crate::graphics_device::MockGraphicsDevice;
use crate::input::{InputState, Key};
use crate::resource::TextureCache;
use crate::scene::scene_index::{chebyshev_distance, octant_of};
use super::*;

const FRAME: Duration = Duration::from_millis(16);

/// Shader sources and a crate texture in a fresh temp directory
fn assets(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cubefield_scene_{}_{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("color.wgsl"), "// color").unwrap();
    std::fs::write(dir.join("texture.wgsl"), "// texture").unwrap();
    let mut image = image::RgbaImage::new(2, 2);
    for pixel in image.pixels_mut() {
        *pixel = image::Rgba([160, 110, 60, 255]);
    }
    image.save(dir.join("crate.png")).unwrap();
    dir
}

fn config_in(dir: &PathBuf) -> SceneConfig {
    SceneConfig {
        objects_count: 200,
        world_size: 64,
        octant_size: 8,
        octants_drawn_count: 1,
        texture_path: dir.join("crate.png"),
        shader_dir: dir.clone(),
        width: 640,
        height: 480,
        seed: 42,
        ..Default::default()
    }
}

fn build(config: &SceneConfig) -> (Scene, MockGraphicsDevice) {
    let mut device = MockGraphicsDevice::new(config.width, config.height);
    let scene = Scene::build(config, &mut device, TextureCache::new()).unwrap();
    (scene, device)
}

/// Keys of every object within the draw radius, by exhaustive check
fn expected_visible(scene: &Scene) -> Vec<SceneObjectKey> {
    let octant_size = scene.config().octant_size as f32;
    let radius = scene.config().octants_drawn_count;
    let camera = octant_of(scene.camera().position(), octant_size);
    let mut keys: Vec<_> = scene
        .objects
        .iter()
        .filter(|(_, object)| chebyshev_distance(octant_of(object.position(), octant_size), camera) <= radius)
        .map(|(key, _)| key)
        .collect();
    keys.sort();
    keys
}

fn sorted_visible(scene: &Scene) -> Vec<SceneObjectKey> {
    let mut keys = scene.visible().to_vec();
    keys.sort();
    keys
}

// ============================================================================
// Build
// ============================================================================

#[test]
fn test_build_uploads_objects_and_ground() {
    let dir = assets("build");
    let (scene, device) = build(&config_in(&dir));

    assert_eq!(scene.object_count(), 200);
    assert_eq!(scene.index().len(), 200);
    assert_eq!(scene.index().name(), "octree");
    assert!(scene.has_ground());
    assert_eq!(device.shaders.len(), 2);
    assert_eq!(device.textures.len(), 1);
    // One mesh per object plus the ground
    assert_eq!(device.meshes.len(), 201);
    assert_eq!(scene.camera().position(), Vec3::splat(32.0));
    assert!((scene.camera().orientation() - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn test_objects_stay_inside_the_world() {
    let dir = assets("inside");
    let (scene, _device) = build(&config_in(&dir));

    for (_, object) in scene.objects.iter() {
        let position = object.position();
        assert!(position.cmpge(Vec3::ZERO).all() && position.cmplt(Vec3::splat(64.0)).all());
    }
}

#[test]
fn test_all_objects_share_one_texture() {
    let dir = assets("shared");
    let (scene, _device) = build(&config_in(&dir));
    let name = dir.join("crate.png").display().to_string();

    assert_eq!(scene.textures().len(), 1);
    // Cache entry plus 200 crates plus the ground
    assert_eq!(scene.textures().use_count(&name), 202);
}

#[test]
fn test_mixed_shapes_use_every_primitive() {
    let dir = assets("mixed");
    let config = SceneConfig {
        shape: ObjectShape::Mixed,
        ..config_in(&dir)
    };
    let (_scene, device) = build(&config);

    for kind in ["crate", "cube", "sphere", "plane"] {
        assert!(
            device.meshes.values().any(|mesh| mesh.name == kind),
            "no {} mesh",
            kind
        );
    }
}

#[test]
fn test_same_seed_gives_same_layout() {
    let dir = assets("seed");
    let (first, _) = build(&config_in(&dir));
    let (second, _) = build(&config_in(&dir));

    for (key, object) in first.objects.iter() {
        assert_eq!(second.objects[key].position(), object.position());
    }
}

#[test]
fn test_grid_placement_without_ground() {
    let dir = assets("grid");
    let config = SceneConfig {
        objects_count: 64,
        placement: Placement::Grid,
        ground: false,
        ..config_in(&dir)
    };
    let (scene, device) = build(&config);

    assert!(!scene.has_ground());
    assert_eq!(device.meshes.len(), 64);
}

// ============================================================================
// Build failures
// ============================================================================

#[test]
fn test_invalid_config_creates_nothing() {
    let dir = assets("invalid");
    let config = SceneConfig {
        octant_size: 12,
        ..config_in(&dir)
    };
    let mut device = MockGraphicsDevice::new(640, 480);

    let result = Scene::build(&config, &mut device, TextureCache::new());
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert_eq!(device.live_resources(), 0);
}

#[test]
fn test_missing_texture_releases_shaders() {
    let dir = assets("no_texture");
    let config = SceneConfig {
        texture_path: dir.join("missing.png"),
        ..config_in(&dir)
    };
    let mut device = MockGraphicsDevice::new(640, 480);

    let result = Scene::build(&config, &mut device, TextureCache::new());
    match result {
        Err(Error::ResourceLoad { resource, .. }) => assert!(resource.ends_with("missing.png")),
        other => panic!("expected ResourceLoad, got {:?}", other.map(|_| ())),
    }
    assert_eq!(device.live_resources(), 0);
}

#[test]
fn test_missing_shader_file_fails() {
    let dir = assets("no_shader");
    std::fs::remove_file(dir.join("texture.wgsl")).unwrap();
    let mut device = MockGraphicsDevice::new(640, 480);

    let result = Scene::build(&config_in(&dir), &mut device, TextureCache::new());
    assert!(matches!(result, Err(Error::ResourceLoad { .. })));
    assert_eq!(device.live_resources(), 0);
}

#[test]
fn test_rejected_shader_fails() {
    let dir = assets("bad_shader");
    let mut device = MockGraphicsDevice::new(640, 480);
    device.fail_shader(TEXTURE_SHADER);

    let result = Scene::build(&config_in(&dir), &mut device, TextureCache::new());
    assert!(matches!(result, Err(Error::ShaderCompilation { .. })));
    assert_eq!(device.live_resources(), 0);
}

// ============================================================================
// Frame
// ============================================================================

#[test]
fn test_frame_draws_exactly_the_near_objects() {
    let dir = assets("frame");
    let (mut scene, mut device) = build(&config_in(&dir));

    let report = scene.frame(&InputState::new(), &mut device, FRAME);

    let expected = expected_visible(&scene);
    assert_eq!(sorted_visible(&scene), expected);
    assert_eq!(report.visible, expected.len());
    assert_eq!(report.drawn, expected.len() + 1);
    assert!(report.presented);
    assert!(!report.draw_failed);
    assert_eq!(device.frames_presented, 1);
    assert_eq!(device.draws.len(), expected.len() + 1);
    assert_eq!(report.stats.map(|s| s.draw_calls as usize), Some(expected.len() + 1));
}

#[test]
fn test_octree_and_brute_force_agree_while_moving() {
    let dir = assets("agree");
    let (mut octree, mut device) = build(&config_in(&dir));
    let (mut brute, _) = build(&SceneConfig {
        index: IndexKind::BruteForce,
        ..config_in(&dir)
    });
    assert_eq!(brute.index().name(), "brute-force");

    let mut input = InputState::new();
    input.set_key(Key::Forward, true);
    for step in 0..80 {
        if step % 20 == 0 {
            input.add_mouse_motion(37.0, 11.0);
        }
        octree.frame(&input, &mut device, FRAME);
        brute.frame(&input, &mut device, FRAME);
        input.end_frame();

        assert_eq!(octree.camera().position(), brute.camera().position());
        assert_eq!(sorted_visible(&octree), sorted_visible(&brute));
        assert_eq!(sorted_visible(&octree), expected_visible(&octree));
    }
}

#[test]
fn test_camera_is_clamped_to_the_world() {
    let dir = assets("clamp");
    let (mut scene, mut device) = build(&config_in(&dir));
    let mut input = InputState::new();
    input.set_key(Key::Forward, true);

    // 0.5 per frame from z = 32 reaches the far wall well within 200 frames
    for _ in 0..200 {
        scene.frame(&input, &mut device, FRAME);
    }

    let position = scene.camera().position();
    assert_eq!(position.z, 0.0);
    assert!((position.x - 32.0).abs() < 1e-3);
    assert_eq!(position.y, 32.0);
    assert!((scene.camera().eye_target() - (position + Vec3::NEG_Z)).length() < 1e-4);
}

#[test]
fn test_draw_failure_still_presents() {
    let dir = assets("draw_fail");
    let (mut scene, mut device) = build(&config_in(&dir));
    device.fail_draws = true;

    let report = scene.frame(&InputState::new(), &mut device, FRAME);

    assert!(report.draw_failed);
    assert_eq!(report.drawn, 0);
    assert!(report.presented);
    assert!(!device.is_in_frame());
    assert_eq!(device.frames_presented, 1);
}

#[test]
fn test_present_failure_skips_only_that_frame() {
    let dir = assets("present_fail");
    let (mut scene, mut device) = build(&config_in(&dir));
    device.fail_present = true;

    let report = scene.frame(&InputState::new(), &mut device, FRAME);
    assert!(!report.presented);
    assert!(report.stats.is_none());

    device.fail_present = false;
    let report = scene.frame(&InputState::new(), &mut device, FRAME);
    assert!(report.presented);
    assert_eq!(device.frames_presented, 1);
    assert_eq!(scene.frame_count(), 2);
}

#[test]
fn test_title_reports_fps_once_per_second() {
    let dir = assets("title");
    let (mut scene, mut device) = build(&config_in(&dir));
    let input = InputState::new();
    let quarter = Duration::from_millis(250);

    for _ in 0..3 {
        assert_eq!(scene.frame(&input, &mut device, quarter).title, None);
    }
    let report = scene.frame(&input, &mut device, quarter);
    assert_eq!(report.title.as_deref(), Some("Cubefield - 4 FPS"));
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_resize_updates_aspect() {
    let dir = assets("resize");
    let (mut scene, _device) = build(&config_in(&dir));

    scene.resize(800, 400);
    assert_eq!(scene.projection().aspect, 2.0);
    assert_eq!(scene.projection().far, 128.0);
}

#[test]
fn test_destroy_releases_everything() {
    let dir = assets("destroy");
    let (mut scene, mut device) = build(&config_in(&dir));
    scene.frame(&InputState::new(), &mut device, FRAME);

    scene.destroy(&mut device);

    assert_eq!(device.live_resources(), 0);
    assert_eq!(scene.object_count(), 0);
    assert!(scene.index().is_empty());
    assert!(scene.visible().is_empty());
    assert!(scene.textures().is_empty());
}
