use glam::{Vec2, Vec3, Vec4Swizzles};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::input::{HeadTracker, InputState, Key};
use super::*;

const EPSILON: f32 = 1e-4;

fn assert_vec_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
}

fn default_camera() -> Camera {
    Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), VerticalAxis::Y, 0.5, 1.0)
}

fn position_after(keys: &[Key]) -> Vec3 {
    let mut camera = default_camera();
    let mut input = InputState::new();
    for key in keys {
        input.set_key(*key, true);
    }
    camera.move_position(&input);
    camera.position()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_looking_down_negative_z() {
    let camera = default_camera();
    assert!(camera.phi().abs() < EPSILON);
    assert!((camera.theta() - 180.0).abs() < EPSILON);
    assert_vec_near(camera.orientation(), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_eye_target_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    for axis in [VerticalAxis::X, VerticalAxis::Y, VerticalAxis::Z] {
        for _ in 0..200 {
            let position = Vec3::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            );
            let offset = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            if offset.length() < 0.1 {
                continue;
            }
            let target = position + offset.normalize();
            let mut camera = Camera::new(position, target, axis, 0.5, 1.0);
            camera.update_eye_target();
            assert!((camera.eye_target() - target).length() < 1e-3);
        }
    }
}

#[test]
fn test_far_target_keeps_direction() {
    let mut camera = Camera::new(Vec3::ONE, Vec3::new(11.0, 1.0, 1.0), VerticalAxis::Z, 0.5, 1.0);
    camera.update_eye_target();
    assert_vec_near(camera.eye_target(), Vec3::new(2.0, 1.0, 1.0));
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_forward_moves_along_orientation() {
    assert_vec_near(position_after(&[Key::Forward]), Vec3::new(0.0, 0.0, -1.0));
    assert_vec_near(position_after(&[Key::Backward]), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_strafe_left_moves_left() {
    assert_vec_near(position_after(&[Key::StrafeLeft]), Vec3::new(-1.0, 0.0, 0.0));
    assert_vec_near(position_after(&[Key::StrafeRight]), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_forward_and_strafe_combine_linearly() {
    let forward = position_after(&[Key::Forward]);
    let left = position_after(&[Key::StrafeLeft]);
    let both = position_after(&[Key::Forward, Key::StrafeLeft]);
    assert_vec_near(both, forward + left);
}

#[test]
fn test_opposite_keys_cancel() {
    assert_vec_near(position_after(&[Key::Forward, Key::Backward]), Vec3::ZERO);
}

#[test]
fn test_move_clamps_into_bounds() {
    let mut rng = StdRng::seed_from_u64(5);
    let min = Vec3::ZERO;
    let max = Vec3::splat(16.0);
    let mut input = InputState::new();
    input.set_key(Key::Forward, true);
    let mut camera = Camera::new(Vec3::splat(8.0), Vec3::new(8.0, 8.0, 0.0), VerticalAxis::Y, 1.0, 3.0);

    for _ in 0..500 {
        input.add_mouse_motion(rng.random_range(-90.0..90.0), rng.random_range(-90.0..90.0));
        if rng.random_bool(0.3) {
            camera.set_position(Vec3::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            ));
        }
        camera.move_and_clamp(&input, min, max);
        input.end_frame();

        let p = camera.position();
        assert!(p.cmpge(min).all() && p.cmple(max).all(), "{:?} out of bounds", p);
        assert_vec_near(camera.eye_target(), p + camera.orientation());
    }
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_mouse_right_turns_right() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.add_mouse_motion(20.0, 0.0);
    camera.move_orientation(&input);
    assert!((camera.theta() - 170.0).abs() < EPSILON);
    assert!(camera.orientation().x > 0.0);
}

#[test]
fn test_mouse_down_looks_down() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.add_mouse_motion(0.0, 20.0);
    camera.move_orientation(&input);
    assert!((camera.phi() + 10.0).abs() < EPSILON);
    assert!(camera.orientation().y < 0.0);
}

struct TurnTracker;

impl HeadTracker for TurnTracker {
    fn name(&self) -> &str {
        "turn"
    }

    fn poll(&mut self, _elapsed: std::time::Duration) -> Option<Vec2> {
        Some(Vec2::new(10f32.to_radians(), 0.0))
    }
}

#[test]
fn test_head_tracker_delta_is_converted_and_inverted() {
    let mut camera = default_camera();
    let mut input = InputState::new();
    input.set_head_tracker(Some(Box::new(TurnTracker)));
    input.poll_head_tracker(std::time::Duration::from_millis(16));
    camera.move_orientation(&input);
    // 10 degrees, inverted, then scaled by sensitivity 0.5
    assert!((camera.theta() - 185.0).abs() < 1e-3);
}

#[test]
fn test_no_input_keeps_pose() {
    let mut camera = default_camera();
    let input = InputState::new();
    camera.move_and_clamp(&input, Vec3::splat(-10.0), Vec3::splat(10.0));
    assert_vec_near(camera.position(), Vec3::ZERO);
    assert_vec_near(camera.eye_target(), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_set_angles_updates_target() {
    let mut camera = default_camera();
    camera.set_angles(0.0, 90.0);
    assert_vec_near(camera.orientation(), Vec3::X);
    assert_vec_near(camera.eye_target(), Vec3::X);
}

// ============================================================================
// View matrix
// ============================================================================

#[test]
fn test_view_matrix_puts_target_in_front() {
    let mut camera = Camera::new(Vec3::new(4.0, 2.0, 4.0), Vec3::new(5.0, 2.0, 4.0), VerticalAxis::Y, 0.5, 1.0);
    camera.update_eye_target();
    let view = camera.view_matrix();
    let target_in_view = (view * camera.eye_target().extend(1.0)).xyz();
    assert_vec_near(target_in_view, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_view_matrix_with_target_on_camera() {
    let camera = Camera::new(Vec3::ZERO, Vec3::ZERO, VerticalAxis::Y, 0.5, 0.5);
    assert!(camera.view_matrix().is_finite());
    assert_vec_near(camera.eye_target(), camera.position() + camera.orientation());
}

#[test]
fn test_view_matrix_looking_along_vertical_axis() {
    let camera = Camera::new(Vec3::ONE, Vec3::new(1.0, 5.0, 1.0), VerticalAxis::Y, 0.5, 1.0);
    let view = camera.view_matrix();
    assert!(view.is_finite());
    let target_in_view = (view * Vec3::new(1.0, 2.0, 1.0).extend(1.0)).xyz();
    assert_vec_near(target_in_view, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_view_matrix_up_follows_vertical_axis() {
    let camera = default_camera();
    let above = (camera.view_matrix() * Vec3::new(0.0, 1.0, -1.0).extend(1.0)).xyz();
    assert!(above.y > 0.0);
}
