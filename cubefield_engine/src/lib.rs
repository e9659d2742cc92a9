/*!
# Cubefield Engine

Core types for the Cubefield viewer: a first-person walk through a field of
cubes scattered in a cubic world.

This crate is platform-agnostic. Everything that touches the GPU goes through
the [`GraphicsDevice`](graphics_device::GraphicsDevice) trait; backends (wgpu)
live in their own crates and a mock device ships here for headless runs.

## Architecture

- **Orientation / Camera**: spherical look direction and the FPS camera built on it
- **InputState**: keys, mouse motion and head-tracker deltas for one frame
- **SceneIndex**: spatial index answering "what is near this point" (octree, brute force)
- **Drawable**: positioned objects that upload and draw themselves
- **Scene**: owns the objects, the index and the camera, and runs the frame pipeline
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod input;
pub mod graphics_device;
pub mod resource;
pub mod drawable;
pub mod scene;

// Main cubefield namespace module
pub mod cubefield {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{IndexKind, ObjectShape, Placement, SceneConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod input {
        pub use crate::input::*;
    }

    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod drawable {
        pub use crate::drawable::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
