//! Scene module - spatial index, placement and the frame-loop controller.

mod brute_force_scene_index;
mod fps_counter;
mod octree_scene_index;
mod placement;
mod scene;
mod scene_index;

pub use brute_force_scene_index::BruteForceSceneIndex;
pub use fps_counter::FpsCounter;
pub use octree_scene_index::{OctreeSceneIndex, MAX_DEPTH};
pub use placement::{generate_positions, pick_shape};
pub use scene::{FrameReport, Scene, TITLE};
pub use scene_index::{chebyshev_distance, octant_of, OctantBox, SceneIndex, SceneObjectKey};
