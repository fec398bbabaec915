/// Framebuffer trait - offscreen color + depth-stencil target
///
/// The backend allocates the attachments itself: a color texture (multisample
/// when `samples > 1`) and a depth-stencil renderbuffer of the same size and
/// sample count. Creation fails when the driver reports the result incomplete.

use crate::graphics_device::Texture;

/// Descriptor for creating a framebuffer
#[derive(Debug, Clone)]
pub struct FramebufferDesc<'a> {
    /// Name used in logs and errors
    pub label: &'a str,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Sample count (1 = single-sampled)
    pub samples: u32,
}

/// Offscreen framebuffer, released with its attachments when dropped
pub trait Framebuffer {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Sample count
    fn samples(&self) -> u32;

    /// Color attachment
    fn color_texture(&self) -> &dyn Texture;

    /// Backend object name
    fn raw_id(&self) -> u32;
}
