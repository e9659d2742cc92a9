/// Spatial index over scene objects.
///
/// Objects are points. Space is cut into cubic octants of a fixed size and
/// each object belongs to exactly one octant, `floor(position / octant_size)`.
/// A query returns every object whose octant lies within a Chebyshev radius
/// of the octant containing the query point.
///
/// Ownership: the scene creates and owns its index.

use glam::{IVec3, Vec3};
use slotmap::new_key_type;

new_key_type! {
    /// Key of an object in the scene's object table
    pub struct SceneObjectKey;
}

/// Octant coordinates are clamped to this magnitude so that adding a query
/// radius can never overflow
const OCTANT_COORD_LIMIT: i32 = 1 << 29;

/// Octant containing `position`
pub fn octant_of(position: Vec3, octant_size: f32) -> IVec3 {
    let octant = (position / octant_size).floor();
    let limit = OCTANT_COORD_LIMIT as f32;
    octant.clamp(Vec3::splat(-limit), Vec3::splat(limit)).as_ivec3()
}

/// Max of per-axis absolute differences
///
/// Computed in 64 bits; the result is exact for any pair of `i32` octants.
pub fn chebyshev_distance(a: IVec3, b: IVec3) -> u32 {
    (a.as_i64vec3() - b.as_i64vec3()).abs().max_element() as u32
}

/// Inclusive box of octant coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctantBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl OctantBox {
    /// Every octant within `radius` of `center`
    pub fn around(center: IVec3, radius: u32) -> Self {
        let radius = IVec3::splat(radius.min(OCTANT_COORD_LIMIT as u32) as i32);
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    pub fn contains(&self, octant: IVec3) -> bool {
        octant.cmpge(self.min).all() && octant.cmple(self.max).all()
    }

    pub fn contains_box(&self, other: &OctantBox) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }

    pub fn intersects(&self, other: &OctantBox) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// Trait for spatial indexing of scene objects.
pub trait SceneIndex: Send + Sync {
    /// Short name for logs ("octree", "brute-force")
    fn name(&self) -> &'static str;

    /// Edge length of one octant in world units
    fn octant_size(&self) -> f32;

    /// Insert an object at a fixed world position.
    fn insert(&mut self, key: SceneObjectKey, position: Vec3);

    /// Append to `results` every object whose octant is within
    /// `octant_radius` of the octant containing `point`.
    ///
    /// Each object appears once. Order is unspecified.
    fn query_near(&self, point: Vec3, octant_radius: u32, results: &mut Vec<SceneObjectKey>);

    /// Number of indexed objects
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all objects from the index.
    fn clear(&mut self);
}
