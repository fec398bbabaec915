/*!
# Prism 3D Engine - OpenGL Backend

OpenGL 3.3 core implementation of the `prism_3d_engine` device traits, built
on `glow`.

The host creates the window and the context (any `glow::Context`), then hands
the context to `GlGraphicsDevice::new` and shares the device with the engine as
`Rc<dyn GraphicsDevice>`.

Enable the `gl-debug` feature to forward driver debug messages into the
engine logger.
*/

mod gl_device;
mod gl_buffer;
mod gl_vertex_array;
mod gl_texture;
mod gl_shader;
mod gl_frame_buffer;
mod gl_format;

#[cfg(feature = "gl-debug")]
mod debug;

pub use gl_device::GlGraphicsDevice;
pub use gl_buffer::GlBuffer;
pub use gl_vertex_array::GlVertexArray;
pub use gl_texture::GlTexture;
pub use gl_shader::GlProgram;
pub use gl_frame_buffer::GlFramebuffer;

#[cfg(feature = "gl-debug")]
pub use debug::{debug_stats, reset_debug_stats, DebugStats};
