/// Renderer module - draw dispatch, frame driver and post-processing

pub mod renderer;
pub mod renderer_config;
pub mod post_process;
pub mod builtin_shaders;

pub use renderer::*;
pub use renderer_config::*;
pub use post_process::*;
