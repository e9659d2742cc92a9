/// BruteForceSceneIndex - linear scan over every object.
///
/// No acceleration at all. Used as the reference answer for the octree and
/// selectable at runtime for comparison.

use glam::{IVec3, Vec3};
use crate::error::{Error, Result};
use super::scene_index::{octant_of, OctantBox, SceneIndex, SceneObjectKey};

pub struct BruteForceSceneIndex {
    octant_size: f32,
    objects: Vec<(SceneObjectKey, IVec3)>,
}

impl BruteForceSceneIndex {
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `octant_size` is not a positive finite number.
    pub fn new(octant_size: f32) -> Result<Self> {
        if !(octant_size.is_finite() && octant_size > 0.0) {
            return Err(Error::InvalidConfig(format!("octant size {} must be positive", octant_size)));
        }
        Ok(Self {
            octant_size,
            objects: Vec::new(),
        })
    }
}

impl SceneIndex for BruteForceSceneIndex {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn octant_size(&self) -> f32 {
        self.octant_size
    }

    fn insert(&mut self, key: SceneObjectKey, position: Vec3) {
        self.objects.push((key, octant_of(position, self.octant_size)));
    }

    fn query_near(&self, point: Vec3, octant_radius: u32, results: &mut Vec<SceneObjectKey>) {
        let query = OctantBox::around(octant_of(point, self.octant_size), octant_radius);
        results.extend(
            self.objects
                .iter()
                .filter(|(_, octant)| query.contains(*octant))
                .map(|(key, _)| *key),
        );
    }

    fn len(&self) -> usize {
        self.objects.len()
    }

    fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_query_uses_chebyshev_box() {
        let mut keys = SlotMap::<SceneObjectKey, ()>::with_key();
        let mut index = BruteForceSceneIndex::new(8.0).unwrap();
        let near = keys.insert(());
        let corner = keys.insert(());
        let far = keys.insert(());
        index.insert(near, Vec3::new(10.0, 10.0, 10.0));
        index.insert(corner, Vec3::new(-9.0, 20.0, -1.0));
        index.insert(far, Vec3::new(24.0, 0.0, 0.0));

        let mut results = Vec::new();
        index.query_near(Vec3::ZERO, 2, &mut results);

        assert!(results.contains(&near));
        assert!(results.contains(&corner));
        assert!(!results.contains(&far));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_rejects_bad_octant_size() {
        assert!(BruteForceSceneIndex::new(0.0).is_err());
        assert!(BruteForceSceneIndex::new(f32::NAN).is_err());
    }
}
