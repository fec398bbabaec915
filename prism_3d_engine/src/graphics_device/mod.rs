/// Graphics device module - the backend seam
///
/// Everything the engine asks of the GPU goes through `GraphicsDevice` and the
/// object traits declared here. The OpenGL backend implements them; unit tests
/// use the recording mock.

pub mod graphics_device;
pub mod buffer;
pub mod vertex_array;
pub mod texture;
pub mod shader;
pub mod frame_buffer;

pub use graphics_device::*;
pub use buffer::*;
pub use vertex_array::*;
pub use texture::*;
pub use shader::*;
pub use frame_buffer::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
