//! Drawable module - the primitives placed in a scene.
//!
//! Every primitive implements [`Drawable`]: `load` uploads its vertices
//! (freeing any previous upload first) and `draw` issues one
//! self-contained draw call translated to the object's position.

mod crate_box;
mod cube;
mod mesh_slot;
mod plane;
mod sphere;

pub use crate_box::Crate;
pub use cube::Cube;
pub use plane::Plane;
pub use sphere::Sphere;

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;

/// A positioned object that can upload itself and draw itself
pub trait Drawable {
    /// Primitive name for logs ("crate", "cube", ...)
    fn kind(&self) -> &'static str;

    /// Fixed world position
    fn position(&self) -> Vec3;

    /// Upload GPU resources; calling it again replaces the previous upload
    fn load(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;

    fn is_loaded(&self) -> bool;

    /// Record one draw call
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` when called before `load`, or whatever the
    /// device reports.
    fn draw(&self, device: &mut dyn GraphicsDevice, projection: &Mat4, view: &Mat4) -> Result<()>;

    /// Free GPU resources owned by this object
    fn release(&mut self, device: &mut dyn GraphicsDevice);
}

/// View matrix composed with the object's translation
pub(crate) fn model_view(view: &Mat4, position: Vec3) -> Mat4 {
    *view * Mat4::from_translation(position)
}

#[cfg(test)]
#[path = "drawable_tests.rs"]
mod tests;
