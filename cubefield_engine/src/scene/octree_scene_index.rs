/// OctreeSceneIndex - static octree over the octant grid.
///
/// The world volume `[0, world_size]^3` is divided into octants. The tree is
/// pre-allocated at construction time: every internal node has 8 children
/// and covers a power-of-two block of octants, leaves cover one octant (or
/// a small block once the depth cap is reached). Objects are stored in the
/// leaf containing their octant.
///
/// Objects whose octant falls outside the tree are stored at the root and
/// tested one by one at query time, so queries stay exact for any position.

use glam::{IVec3, Vec3};
use crate::error::{Error, Result};
use super::scene_index::{octant_of, OctantBox, SceneIndex, SceneObjectKey};

/// Index of the root node in the flat node array.
const ROOT: usize = 0;

/// Deepest tree built; 8^5 leaves at most.
pub const MAX_DEPTH: u32 = 5;

const MAX_OCTANTS_PER_AXIS: u32 = 1 << 28;

/// Node classification against a query box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
    Outside,
    Inside,
    Partial,
}

/// A single node in the octree.
struct OctreeNode {
    /// Octants covered by this node
    bounds: OctantBox,
    /// Index of the first child in the flat array (0 = leaf)
    first_child: usize,
    /// Objects with their octant (leaves, plus out-of-bounds objects at the root)
    objects: Vec<(SceneObjectKey, IVec3)>,
}

/// Static octree spatial index.
pub struct OctreeSceneIndex {
    /// Flat array of all octree nodes (pre-allocated, depth-first)
    nodes: Vec<OctreeNode>,
    /// Depth of the leaves (root = depth 0)
    max_depth: u32,
    octant_size: f32,
    /// subtree_sizes[d] = total node count for a subtree of depth d.
    subtree_sizes: Vec<usize>,
    len: usize,
}

impl OctreeSceneIndex {
    /// Create an octree covering `[0, world_size]^3` cut into octants of
    /// `octant_size`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if either size is not a positive finite number.
    pub fn new(world_size: f32, octant_size: f32) -> Result<Self> {
        if !(world_size.is_finite() && world_size > 0.0) {
            return Err(Error::InvalidConfig(format!("world size {} must be positive", world_size)));
        }
        if !(octant_size.is_finite() && octant_size > 0.0) {
            return Err(Error::InvalidConfig(format!("octant size {} must be positive", octant_size)));
        }

        let octants_per_axis = ((world_size / octant_size).ceil() as u32).clamp(1, MAX_OCTANTS_PER_AXIS);
        let needed_depth = octants_per_axis.next_power_of_two().trailing_zeros();
        let max_depth = needed_depth.min(MAX_DEPTH);
        let grid_side = 1i32 << needed_depth;

        let total_nodes = Self::total_node_count(max_depth);
        let mut nodes = Vec::with_capacity(total_nodes);
        let root_bounds = OctantBox {
            min: IVec3::ZERO,
            max: IVec3::splat(grid_side - 1),
        };
        Self::build_recursive(&mut nodes, root_bounds, 0, max_depth);

        debug_assert_eq!(nodes.len(), total_nodes);

        let subtree_sizes: Vec<usize> = (0..=max_depth).map(Self::total_node_count).collect();

        Ok(Self {
            nodes,
            max_depth,
            octant_size,
            subtree_sizes,
            len: 0,
        })
    }

    /// Total number of nodes for a given depth: (8^(d+1) - 1) / 7
    fn total_node_count(max_depth: u32) -> usize {
        let mut count = 0usize;
        let mut level_count = 1usize;
        for _ in 0..=max_depth {
            count += level_count;
            level_count *= 8;
        }
        count
    }

    /// Recursively build the static node array (depth-first).
    fn build_recursive(nodes: &mut Vec<OctreeNode>, bounds: OctantBox, depth: u32, max_depth: u32) {
        let node_index = nodes.len();
        nodes.push(OctreeNode {
            bounds,
            first_child: 0,
            objects: Vec::new(),
        });

        if depth >= max_depth {
            return;
        }

        let first_child = nodes.len();
        nodes[node_index].first_child = first_child;

        let half = (bounds.max - bounds.min + IVec3::ONE) / 2;
        for octant in 0..8u8 {
            Self::build_recursive(nodes, Self::child_bounds(&bounds, half, octant), depth + 1, max_depth);
        }
    }

    /// Bounds of child `octant` (0 to 7).
    ///
    /// Octant bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low, 1 = high).
    fn child_bounds(parent: &OctantBox, half: IVec3, octant: u8) -> OctantBox {
        let offset = IVec3::new(
            if octant & 1 == 0 { 0 } else { half.x },
            if octant & 2 == 0 { 0 } else { half.y },
            if octant & 4 == 0 { 0 } else { half.z },
        );
        let min = parent.min + offset;
        OctantBox {
            min,
            max: min + half - IVec3::ONE,
        }
    }

    /// Which child of `bounds` holds `octant`.
    fn child_octant(bounds: &OctantBox, octant: IVec3) -> u8 {
        let center = bounds.min + (bounds.max - bounds.min + IVec3::ONE) / 2;
        ((octant.x >= center.x) as u8)
            | (((octant.y >= center.y) as u8) << 1)
            | (((octant.z >= center.z) as u8) << 2)
    }

    /// Offset of child `octant` in the depth-first node layout.
    fn subtree_offset(&self, octant: u8, remaining_depth: u32) -> usize {
        octant as usize * self.subtree_sizes[remaining_depth as usize]
    }

    /// Leaf node index holding an in-bounds octant.
    fn leaf_for(&self, octant: IVec3) -> usize {
        let mut node_idx = ROOT;
        let mut depth = 0;
        while depth < self.max_depth {
            let node = &self.nodes[node_idx];
            let child = Self::child_octant(&node.bounds, octant);
            node_idx = node.first_child + self.subtree_offset(child, self.max_depth - depth - 1);
            depth += 1;
        }
        node_idx
    }

    fn classify(bounds: &OctantBox, query: &OctantBox) -> Overlap {
        if !query.intersects(bounds) {
            Overlap::Outside
        } else if query.contains_box(bounds) {
            Overlap::Inside
        } else {
            Overlap::Partial
        }
    }

    /// 3-way recursion:
    /// - `Outside` → skip entire subtree
    /// - `Inside` → collect all objects from subtree without further testing
    /// - `Partial` → test leaf objects individually, recurse into children
    fn query_recursive(&self, node_idx: usize, query: &OctantBox, depth: u32, results: &mut Vec<SceneObjectKey>) {
        let node = &self.nodes[node_idx];
        match Self::classify(&node.bounds, query) {
            Overlap::Outside => {}
            Overlap::Inside => self.collect_all(node_idx, depth, results),
            Overlap::Partial => {
                if node.first_child == 0 {
                    results.extend(
                        node.objects
                            .iter()
                            .filter(|(_, octant)| query.contains(*octant))
                            .map(|(key, _)| *key),
                    );
                } else {
                    self.query_children(node_idx, query, depth, results);
                }
            }
        }
    }

    fn query_children(&self, node_idx: usize, query: &OctantBox, depth: u32, results: &mut Vec<SceneObjectKey>) {
        let first_child = self.nodes[node_idx].first_child;
        for octant in 0..8u8 {
            let child_idx = first_child + self.subtree_offset(octant, self.max_depth - depth - 1);
            self.query_recursive(child_idx, query, depth + 1, results);
        }
    }

    /// Collect all objects from a node and its entire subtree.
    fn collect_all(&self, node_idx: usize, depth: u32, results: &mut Vec<SceneObjectKey>) {
        let node = &self.nodes[node_idx];
        if node.first_child == 0 {
            results.extend(node.objects.iter().map(|(key, _)| *key));
            return;
        }
        for octant in 0..8u8 {
            let child_idx = node.first_child + self.subtree_offset(octant, self.max_depth - depth - 1);
            self.collect_all(child_idx, depth + 1, results);
        }
    }

    /// Depth of the leaves
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Total node count (all nodes exist whether occupied or not)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Octants covered by the tree
    pub fn bounds(&self) -> OctantBox {
        self.nodes[ROOT].bounds
    }
}

// ===== SCENE INDEX TRAIT =====

impl SceneIndex for OctreeSceneIndex {
    fn name(&self) -> &'static str {
        "octree"
    }

    fn octant_size(&self) -> f32 {
        self.octant_size
    }

    fn insert(&mut self, key: SceneObjectKey, position: Vec3) {
        let octant = octant_of(position, self.octant_size);
        // Outside the tree (or a single-leaf tree): store at root
        let node_idx = if self.nodes[ROOT].bounds.contains(octant) {
            self.leaf_for(octant)
        } else {
            ROOT
        };
        self.nodes[node_idx].objects.push((key, octant));
        self.len += 1;
    }

    fn query_near(&self, point: Vec3, octant_radius: u32, results: &mut Vec<SceneObjectKey>) {
        let query = OctantBox::around(octant_of(point, self.octant_size), octant_radius);
        let root = &self.nodes[ROOT];

        // Out-of-bounds objects (or every object of a single-leaf tree)
        results.extend(
            root.objects
                .iter()
                .filter(|(_, octant)| query.contains(*octant))
                .map(|(key, _)| *key),
        );

        if root.first_child != 0 && Self::classify(&root.bounds, &query) != Overlap::Outside {
            self.query_children(ROOT, &query, 0, results);
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for node in &mut self.nodes {
            node.objects.clear();
        }
        self.len = 0;
    }
}

#[cfg(test)]
#[path = "octree_scene_index_tests.rs"]
mod tests;
