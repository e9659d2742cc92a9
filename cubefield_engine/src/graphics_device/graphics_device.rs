/// GraphicsDevice trait - the narrow GPU contract used by the scene.
///
/// Resources are referenced through slotmap keys. A frame is
/// `begin_frame`, any number of `draw`, then `end_frame`. Each draw call
/// carries its own shader, mesh, texture and matrices, so no binding state
/// leaks from one draw to the next.

use glam::Mat4;
use slotmap::new_key_type;
use crate::error::Result;
use super::vertex::Vertex;

new_key_type! {
    /// Handle to a compiled shader program
    pub struct ShaderKey;
    /// Handle to an uploaded texture
    pub struct TextureKey;
    /// Handle to an uploaded vertex buffer
    pub struct MeshKey;
}

// ===== DESCRIPTORS =====

/// Shader program source
#[derive(Debug, Clone)]
pub struct ShaderDesc<'a> {
    /// Name used in error messages
    pub name: &'a str,
    /// Source text, with `vs_main` and `fs_main` entry points
    pub source: &'a str,
    /// Whether the program samples a texture (bind group 1)
    pub textured: bool,
}

/// RGBA8 texture pixels, rows bottom-up
#[derive(Debug, Clone)]
pub struct TextureDesc<'a> {
    pub name: &'a str,
    pub width: u32,
    pub height: u32,
    pub rgba: &'a [u8],
}

/// Non-indexed triangle list
#[derive(Debug, Clone)]
pub struct MeshDesc<'a> {
    pub name: &'a str,
    pub vertices: &'a [Vertex],
}

/// One self-contained draw
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub shader: ShaderKey,
    pub mesh: MeshKey,
    pub texture: Option<TextureKey>,
    pub projection: Mat4,
    pub model_view: Mat4,
}

/// Counters returned when a frame is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub vertices: u64,
}

// ===== TRAIT =====

/// GPU backend used by the scene
pub trait GraphicsDevice {
    /// Compile a shader program
    ///
    /// # Errors
    ///
    /// `Error::ShaderCompilation` when the backend rejects the source.
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderKey>;

    fn destroy_shader(&mut self, key: ShaderKey);

    /// Upload a texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureKey>;

    fn destroy_texture(&mut self, key: TextureKey);

    /// Upload vertices
    fn create_mesh(&mut self, desc: &MeshDesc) -> Result<MeshKey>;

    fn destroy_mesh(&mut self, key: MeshKey);

    /// Start recording a frame
    fn begin_frame(&mut self) -> Result<()>;

    /// Record one draw
    fn draw(&mut self, call: &DrawCall) -> Result<()>;

    /// Submit and present the recorded frame
    fn end_frame(&mut self) -> Result<FrameStats>;

    /// Drawable surface was resized
    fn resize(&mut self, width: u32, height: u32);

    /// Current drawable surface size
    fn surface_size(&self) -> (u32, u32);
}
