//! Unit tests for geometry.rs

use crate::resource::geometry::*;

// ============================================================================
// Cube / crate
// ============================================================================

#[test]
fn test_cube_has_twelve_triangles_within_bounds() {
    let vertices = cube_vertices(2.0);
    assert_eq!(vertices.len(), CUBE_VERTEX_COUNT);
    for v in &vertices {
        for c in v.position {
            assert!(c == 1.0 || c == -1.0);
        }
    }
}

#[test]
fn test_cube_is_scaled_by_half_size() {
    let vertices = cube_vertices(0.5);
    assert!(vertices.iter().all(|v| v.position.iter().all(|c| c.abs() == 0.25)));
}

#[test]
fn test_cube_faces_are_flat_colored() {
    let vertices = cube_vertices(1.0);
    for face in vertices.chunks(6) {
        assert!(face.iter().all(|v| v.color == face[0].color));
    }
    assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
    assert_eq!(vertices[6].color, [0.0, 1.0, 0.0]);
    assert_eq!(vertices[12].color, [0.0, 0.0, 1.0]);
}

#[test]
fn test_cube_faces_are_planar() {
    let vertices = crate_vertices(2.0);
    for face in vertices.chunks(6) {
        // One coordinate is constant across the face
        let constant_axes = (0..3)
            .filter(|&axis| face.iter().all(|v| v.position[axis] == face[0].position[axis]))
            .count();
        assert_eq!(constant_axes, 1);
    }
}

#[test]
fn test_crate_maps_full_texture_on_each_face() {
    let vertices = crate_vertices(1.0);
    assert_eq!(vertices.len(), CUBE_VERTEX_COUNT);
    for face in vertices.chunks(6) {
        let uvs: Vec<[f32; 2]> = face.iter().map(|v| v.uv).collect();
        assert!(uvs.contains(&[0.0, 0.0]));
        assert!(uvs.contains(&[1.0, 1.0]));
        assert!(face.iter().all(|v| v.color == [1.0, 1.0, 1.0]));
    }
}

// ============================================================================
// Plane
// ============================================================================

#[test]
fn test_plane_is_flat_and_repeats_texture() {
    let vertices = plane_vertices(128.0, 64.0, 16.0, 8.0);
    assert_eq!(vertices.len(), 6);
    assert!(vertices.iter().all(|v| v.position[1] == 0.0));
    let max_x = vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
    let max_z = vertices.iter().map(|v| v.position[2]).fold(f32::MIN, f32::max);
    assert_eq!(max_x, 64.0);
    assert_eq!(max_z, 32.0);
    assert!(vertices.iter().any(|v| v.uv == [16.0, 8.0]));
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn test_sphere_vertices_lie_on_radius() {
    let vertices = sphere_vertices(2.0, 8, 12, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
    assert_eq!(vertices.len(), 8 * 12 * 6);
    for v in &vertices {
        let [x, y, z] = v.position;
        let length = (x * x + y * y + z * z).sqrt();
        assert!((length - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_sphere_color_gradient() {
    let vertices = sphere_vertices(1.0, 4, 4, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
    let top = vertices.iter().find(|v| v.uv[1] == 0.0).unwrap();
    let bottom = vertices.iter().find(|v| v.uv[1] == 1.0).unwrap();
    assert_eq!(top.color, [1.0, 0.0, 0.0]);
    assert_eq!(bottom.color, [0.0, 0.0, 1.0]);
}

#[test]
fn test_sphere_minimum_tessellation() {
    let vertices = sphere_vertices(1.0, 0, 0, [1.0; 3], [1.0; 3]);
    assert_eq!(vertices.len(), 2 * 3 * 6);
}
