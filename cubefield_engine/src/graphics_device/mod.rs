/// Graphics device module - GPU contract, vertex layout and a headless mock

pub mod graphics_device;
pub mod vertex;
pub mod mock_graphics_device;

pub use graphics_device::*;
pub use vertex::Vertex;
pub use mock_graphics_device::MockGraphicsDevice;
