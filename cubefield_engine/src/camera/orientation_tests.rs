//! Unit tests for orientation.rs
//!
//! Covers the forward/inverse spherical formulas for all three vertical-axis
//! conventions, the pitch clamp and the lateral direction.

use crate::camera::orientation::{clamp_phi, Orientation, VerticalAxis, DEFAULT_PHI_LIMIT};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const AXES: [VerticalAxis; 3] = [VerticalAxis::X, VerticalAxis::Y, VerticalAxis::Z];
const EPSILON: f32 = 1e-4;

fn assert_vec_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
}

// ============================================================================
// CLAMP TESTS
// ============================================================================

#[test]
fn test_clamp_phi_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let phi: f32 = rng.random_range(-720.0..720.0);
        let once = clamp_phi(phi, DEFAULT_PHI_LIMIT);
        assert_eq!(clamp_phi(once, DEFAULT_PHI_LIMIT), once);
        assert!(once.abs() <= DEFAULT_PHI_LIMIT);
    }
}

#[test]
fn test_clamp_phi_keeps_values_in_range() {
    assert_eq!(clamp_phi(45.0, 89.0), 45.0);
    assert_eq!(clamp_phi(-89.0, 89.0), -89.0);
    assert_eq!(clamp_phi(120.0, 89.0), 89.0);
    assert_eq!(clamp_phi(-500.0, 89.0), -89.0);
}

// ============================================================================
// VERTICAL AXIS TESTS
// ============================================================================

#[test]
fn test_vertical_axis_from_vector() {
    assert_eq!(VerticalAxis::from_vector(Vec3::new(0.0, 1.0, 0.0)), Some(VerticalAxis::Y));
    assert_eq!(VerticalAxis::from_vector(Vec3::new(0.0, 0.0, -2.0)), Some(VerticalAxis::Z));
    assert_eq!(VerticalAxis::from_vector(Vec3::new(3.0, 0.0, 0.0)), Some(VerticalAxis::X));
    assert_eq!(VerticalAxis::from_vector(Vec3::new(1.0, 1.0, 0.0)), None);
    assert_eq!(VerticalAxis::from_vector(Vec3::ZERO), None);
}

#[test]
fn test_pure_pitch_points_along_vertical_axis() {
    for axis in AXES {
        let up = axis.direction(90f32.to_radians(), 0.3);
        assert_vec_near(up, axis.unit());
    }
}

#[test]
fn test_forward_formula_per_axis() {
    let phi = 30f32.to_radians();
    let theta = 60f32.to_radians();
    let (sp, cp) = phi.sin_cos();
    let (st, ct) = theta.sin_cos();
    assert_vec_near(VerticalAxis::X.direction(phi, theta), Vec3::new(sp, cp * ct, cp * st));
    assert_vec_near(VerticalAxis::Y.direction(phi, theta), Vec3::new(cp * st, sp, cp * ct));
    assert_vec_near(VerticalAxis::Z.direction(phi, theta), Vec3::new(cp * ct, cp * st, sp));
}

#[test]
fn test_inverse_recovers_angles_in_every_quadrant() {
    for axis in AXES {
        for theta_deg in [-170.0f32, -100.0, -45.0, 0.0, 45.0, 100.0, 170.0] {
            for phi_deg in [-80.0f32, -20.0, 0.0, 35.0, 88.0] {
                let dir = axis.direction(phi_deg.to_radians(), theta_deg.to_radians());
                let (phi, theta) = axis.angles(dir, 0.0);
                assert!((phi.to_degrees() - phi_deg).abs() < 1e-2, "{:?} phi {}", axis, phi_deg);
                assert!((theta.to_degrees() - theta_deg).abs() < 1e-2, "{:?} theta {}", axis, theta_deg);
            }
        }
    }
}

#[test]
fn test_inverse_straight_up_keeps_fallback_theta() {
    for axis in AXES {
        let (phi, theta) = axis.angles(axis.unit(), 1.25);
        assert!((phi.to_degrees() - 90.0).abs() < 1e-3);
        assert_eq!(theta, 1.25);
        assert!(!phi.is_nan());
    }
}

// ============================================================================
// ORIENTATION TESTS
// ============================================================================

#[test]
fn test_orientate_keeps_unit_length() {
    let mut rng = StdRng::seed_from_u64(42);
    for axis in AXES {
        let mut orientation = Orientation::from_angles(axis, 0.0, 0.0);
        for _ in 0..500 {
            let dx: f32 = rng.random_range(-200.0..200.0);
            let dy: f32 = rng.random_range(-200.0..200.0);
            orientation.orientate(dx, dy, 0.5);
            assert!((orientation.direction().length() - 1.0).abs() < EPSILON);
            assert!((orientation.lateral().length() - 1.0).abs() < EPSILON);
            assert!(orientation.phi().abs() <= DEFAULT_PHI_LIMIT);
        }
    }
}

#[test]
fn test_orientate_update_rule() {
    let mut orientation = Orientation::from_angles(VerticalAxis::Y, 10.0, 20.0);
    orientation.orientate(4.0, 2.0, 0.5);
    assert!((orientation.phi() - 9.0).abs() < EPSILON);
    assert!((orientation.theta() - 18.0).abs() < EPSILON);
}

#[test]
fn test_orientate_leaves_theta_unbounded() {
    let mut orientation = Orientation::from_angles(VerticalAxis::Y, 0.0, 0.0);
    for _ in 0..10 {
        orientation.orientate(-100.0, 0.0, 1.0);
    }
    assert!((orientation.theta() - 1000.0).abs() < 1e-2);
}

#[test]
fn test_orientate_clamps_phi() {
    let mut orientation = Orientation::from_angles(VerticalAxis::Z, 0.0, 0.0);
    orientation.orientate(0.0, -1000.0, 1.0);
    assert_eq!(orientation.phi(), DEFAULT_PHI_LIMIT);
    orientation.orientate(0.0, 1000.0, 1.0);
    assert_eq!(orientation.phi(), -DEFAULT_PHI_LIMIT);
}

#[test]
fn test_looking_down_negative_z_with_y_up() {
    let orientation = Orientation::from_direction(VerticalAxis::Y, Vec3::new(0.0, 0.0, -1.0));
    assert!(orientation.phi().abs() < EPSILON);
    assert!((orientation.theta().abs() - 180.0).abs() < EPSILON);
    assert_vec_near(orientation.direction(), Vec3::new(0.0, 0.0, -1.0));
    // Strafe-left direction for a right-handed frame
    assert_vec_near(orientation.lateral(), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_lateral_is_perpendicular() {
    let mut rng = StdRng::seed_from_u64(3);
    for axis in AXES {
        for _ in 0..100 {
            let orientation = Orientation::from_angles(
                axis,
                rng.random_range(-89.0..89.0),
                rng.random_range(-360.0..360.0),
            );
            assert!(orientation.lateral().dot(orientation.direction()).abs() < EPSILON);
            assert!(orientation.lateral().dot(axis.unit()).abs() < EPSILON);
        }
    }
}

#[test]
fn test_lateral_kept_when_looking_straight_up() {
    let mut orientation = Orientation::from_angles(VerticalAxis::Y, 0.0, 90.0);
    let before = orientation.lateral();
    orientation.set_direction(Vec3::Y);
    assert_vec_near(orientation.lateral(), before);
    assert!((orientation.theta() - 90.0).abs() < EPSILON);
}

#[test]
fn test_zero_direction_is_ignored() {
    let mut orientation = Orientation::from_angles(VerticalAxis::X, 10.0, 10.0);
    let before = orientation;
    orientation.set_direction(Vec3::ZERO);
    assert_eq!(orientation, before);
}

#[test]
fn test_set_phi_limit_reclamps() {
    let mut orientation = Orientation::from_angles(VerticalAxis::Y, 80.0, 0.0);
    orientation.set_phi_limit(45.0);
    assert_eq!(orientation.phi(), 45.0);
    assert_eq!(orientation.phi_limit(), 45.0);
}
