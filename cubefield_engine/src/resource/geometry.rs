//! Vertex generation for the scene primitives.
//!
//! Every primitive is a non-indexed triangle list centred on the origin;
//! drawables translate it to their world position at draw time.

use std::f32::consts::{PI, TAU};
use crate::graphics_device::Vertex;

/// Unit cube corners per face, counter-clockwise from the face's (0, 0) texel
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]],
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
];

/// Opposite faces share a color
const CUBE_FACE_COLORS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Two triangles per quad: (a, b, c) and (a, d, c)
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 3, 2];

pub const CUBE_VERTEX_COUNT: usize = 36;

fn scaled(corner: [f32; 3], half: f32) -> [f32; 3] {
    [corner[0] * half, corner[1] * half, corner[2] * half]
}

/// Cube of edge `size` with a flat color per face
pub fn cube_vertices(size: f32) -> Vec<Vertex> {
    let half = size / 2.0;
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for (face, color) in CUBE_FACES.iter().zip(CUBE_FACE_COLORS.iter()) {
        for &i in &QUAD_TRIANGLES {
            vertices.push(Vertex::new(scaled(face[i], half), *color, QUAD_UVS[i]));
        }
    }
    vertices
}

/// Cube of edge `size` with the whole texture mapped on each face
pub fn crate_vertices(size: f32) -> Vec<Vertex> {
    let half = size / 2.0;
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for face in CUBE_FACES.iter() {
        for &i in &QUAD_TRIANGLES {
            vertices.push(Vertex::textured(scaled(face[i], half), QUAD_UVS[i]));
        }
    }
    vertices
}

/// Horizontal plane (y = 0) of `width` x `depth`, texture repeated
/// `repeat_width` x `repeat_depth` times
pub fn plane_vertices(width: f32, depth: f32, repeat_width: f32, repeat_depth: f32) -> Vec<Vertex> {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let corners = [[-hw, 0.0, -hd], [hw, 0.0, -hd], [hw, 0.0, hd], [-hw, 0.0, hd]];
    let uvs = [
        [0.0, 0.0],
        [repeat_width, 0.0],
        [repeat_width, repeat_depth],
        [0.0, repeat_depth],
    ];
    QUAD_TRIANGLES
        .iter()
        .map(|&i| Vertex::textured(corners[i], uvs[i]))
        .collect()
}

/// UV sphere of diameter `size`
///
/// Color fades from `top_color` at the north pole to `bottom_color` at the
/// south pole. `rings` and `segments` are raised to at least 2 and 3.
pub fn sphere_vertices(
    size: f32,
    rings: u32,
    segments: u32,
    top_color: [f32; 3],
    bottom_color: [f32; 3],
) -> Vec<Vertex> {
    let rings = rings.max(2);
    let segments = segments.max(3);
    let radius = size / 2.0;

    let point = |ring: u32, segment: u32| -> Vertex {
        let v = ring as f32 / rings as f32;
        let u = segment as f32 / segments as f32;
        let (sin_lat, cos_lat) = (v * PI).sin_cos();
        let (sin_lon, cos_lon) = (u * TAU).sin_cos();
        let position = [radius * sin_lat * cos_lon, radius * cos_lat, radius * sin_lat * sin_lon];
        let color = [
            top_color[0] + (bottom_color[0] - top_color[0]) * v,
            top_color[1] + (bottom_color[1] - top_color[1]) * v,
            top_color[2] + (bottom_color[2] - top_color[2]) * v,
        ];
        Vertex::new(position, color, [u, v])
    };

    let mut vertices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let quad = [
                point(ring, segment),
                point(ring, segment + 1),
                point(ring + 1, segment + 1),
                point(ring + 1, segment),
            ];
            vertices.extend(QUAD_TRIANGLES.iter().map(|&i| quad[i]));
        }
    }
    vertices
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
