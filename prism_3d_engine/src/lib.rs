/*!
# Prism 3D Engine

Core of a real-time OpenGL-style renderer with a scene editor front end.

The crate is backend-agnostic: every GPU object goes through the
`GraphicsDevice` trait, implemented for OpenGL by `prism_3d_engine_renderer_gl`.

## Architecture

- **GraphicsDevice**: creates buffers, vertex arrays, textures, programs and
  framebuffers, and issues state changes and draws
- **Resources**: vertex arrays, textures and shaders, with textures and shaders
  owned by fixed-capacity pools
- **Scene**: lights and mesh actors, drawn in insertion order
- **RenderTarget**: multisampled offscreen target resolved into a presentable texture
- **Renderer**: draw dispatch and the per-frame driver

All GPU work happens on one thread; device handles are shared with `Rc`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod resource;
pub mod scene;
pub mod camera;
pub mod target;
pub mod renderer;

// Main prism3d namespace module
pub mod prism3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Renderer
    pub use crate::renderer::{FrameOutput, PostProcess, Renderer, RendererConfig, RendererStats};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device abstraction sub-module
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod target {
        pub use crate::target::*;
    }
}

// Re-export math library at crate root
pub use glam;
