//! Camera module - orientation model, first-person camera and projection.

mod camera;
mod orientation;
mod projection;

pub use camera::Camera;
pub use orientation::{clamp_phi, Orientation, VerticalAxis, DEFAULT_PHI_LIMIT};
pub use projection::Projection;
