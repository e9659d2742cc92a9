/// Object placement inside the world volume.

use glam::Vec3;
use rand::Rng;
use crate::config::{ObjectShape, Placement};

/// `count` positions inside `[0, world_size)^3`
///
/// `Grid` fills a cubic lattice of `ceil(cbrt(count))` cells per axis, one
/// object at the center of each cell, in x-then-y-then-z order.
pub fn generate_positions<R: Rng>(placement: Placement, count: u32, world_size: f32, rng: &mut R) -> Vec<Vec3> {
    match placement {
        Placement::Random => (0..count)
            .map(|_| {
                Vec3::new(
                    rng.random_range(0.0..world_size),
                    rng.random_range(0.0..world_size),
                    rng.random_range(0.0..world_size),
                )
            })
            .collect(),
        Placement::Grid => {
            let side = grid_side(count);
            let spacing = world_size / side as f32;
            (0..count)
                .map(|i| {
                    let cell = Vec3::new(
                        (i % side) as f32,
                        ((i / side) % side) as f32,
                        (i / (side * side)) as f32,
                    );
                    (cell + Vec3::splat(0.5)) * spacing
                })
                .collect()
        }
    }
}

/// Smallest `n` with `n^3 >= count`
fn grid_side(count: u32) -> u32 {
    let mut side = (count as f64).cbrt().round().max(1.0) as u32;
    while (side as u64).pow(3) < count as u64 {
        side += 1;
    }
    side
}

/// Concrete shape for one object (`Mixed` picks at random)
pub fn pick_shape<R: Rng>(shape: ObjectShape, rng: &mut R) -> ObjectShape {
    match shape {
        ObjectShape::Mixed => match rng.random_range(0..3u8) {
            0 => ObjectShape::Crate,
            1 => ObjectShape::Cube,
            _ => ObjectShape::Sphere,
        },
        other => other,
    }
}
