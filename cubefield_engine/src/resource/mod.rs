//! Resource module - geometry generation, textures and shader programs.

pub mod geometry;
mod shader_library;
mod texture;
mod texture_cache;

pub use shader_library::{ShaderLibrary, COLOR_SHADER, TEXTURE_SHADER};
pub use texture::{decode_image, DecodedImage, Texture};
pub use texture_cache::TextureCache;
