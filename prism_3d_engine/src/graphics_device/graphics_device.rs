/// GraphicsDevice trait - the single entry point to the GPU
///
/// Device methods take `&self`: the device wraps a thread-bound GL context and
/// is shared through `Rc` by every resource that needs to issue commands.

use bitflags::bitflags;
use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, Framebuffer, FramebufferDesc, Program, ProgramDesc,
    Texture, TextureDesc, VertexArrayObject, VertexAttribute,
};

// ============================================================================
// Common types
// ============================================================================

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering `width` x `height` from the origin
    pub fn sized(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

bitflags! {
    /// Buffers affected by a clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Resolved uniform slot inside the currently used program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Typed uniform payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat2(Mat2),
    Mat3(Mat3),
    Mat4(Mat4),
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Backend device
///
/// Object creation returns owning boxes that release the GPU object in `Drop`.
/// State-setting methods never fail; problems are reported through the logger.
pub trait GraphicsDevice {
    // ===== OBJECT CREATION =====

    /// Create a buffer, uploading `desc.data` when present
    fn create_buffer(&self, desc: &BufferDesc) -> Result<Box<dyn Buffer>>;

    /// Create an empty vertex array object
    fn create_vertex_array(&self) -> Result<Box<dyn VertexArrayObject>>;

    /// Point `attributes` of `vao` at `buffer` and enable them
    fn set_vertex_attributes(
        &self,
        vao: &dyn VertexArrayObject,
        buffer: &dyn Buffer,
        attributes: &[VertexAttribute],
    );

    /// Attach an index buffer to `vao`
    fn set_index_buffer(&self, vao: &dyn VertexArrayObject, buffer: &dyn Buffer);

    /// Create a 2D texture (multisample when `desc.samples > 1`)
    fn create_texture(&self, desc: &TextureDesc) -> Result<Box<dyn Texture>>;

    /// Compile and link a program
    ///
    /// Fails with `Error::ShaderCompilation` carrying the driver log.
    fn create_program(&self, desc: &ProgramDesc) -> Result<Box<dyn Program>>;

    /// Create an offscreen framebuffer with its attachments
    ///
    /// Fails with `Error::IncompleteFramebuffer` when the driver rejects it.
    fn create_framebuffer(&self, desc: &FramebufferDesc) -> Result<Box<dyn Framebuffer>>;

    // ===== PROGRAM STATE =====

    /// Make `program` current (`None` unbinds)
    fn use_program(&self, program: Option<&dyn Program>);

    /// Look up a uniform by name; `None` when the program has no active uniform of that name
    fn uniform_location(&self, program: &dyn Program, name: &str) -> Option<UniformLocation>;

    /// Upload a value to a location of the current program
    fn set_uniform(&self, location: UniformLocation, value: &UniformValue);

    // ===== BINDING =====

    /// Bind `texture` to sampler unit `unit` (`None` binds no texture)
    fn bind_texture(&self, unit: u32, texture: Option<&dyn Texture>);

    /// Bind a vertex array (`None` unbinds)
    fn bind_vertex_array(&self, vao: Option<&dyn VertexArrayObject>);

    /// Bind a framebuffer for drawing (`None` = default framebuffer)
    fn bind_framebuffer(&self, framebuffer: Option<&dyn Framebuffer>);

    /// Copy the full color buffer of `src` into `dst`, resolving samples
    fn blit_framebuffer(&self, src: &dyn Framebuffer, dst: &dyn Framebuffer);

    /// Set the viewport rectangle
    fn set_viewport(&self, viewport: Viewport);

    /// Enable or disable depth testing
    fn set_depth_test(&self, enabled: bool);

    /// Clear the bound framebuffer
    fn clear(&self, color: [f32; 4], flags: ClearFlags);

    // ===== DRAWING =====
    // The vertex array to draw from must be bound.

    /// Non-indexed triangle draw
    fn draw(&self, first_vertex: u32, vertex_count: u32);

    /// Indexed triangle draw (`u32` indices)
    fn draw_indexed(&self, index_count: u32);

    /// Non-indexed instanced draw
    fn draw_instanced(&self, vertex_count: u32, instance_count: u32);

    /// Indexed instanced draw
    fn draw_indexed_instanced(&self, index_count: u32, instance_count: u32);
}
