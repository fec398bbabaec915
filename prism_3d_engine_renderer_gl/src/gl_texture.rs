/// GL texture object (2D or 2D multisample)

use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::{Texture, TextureFormat};

pub struct GlTexture {
    gl: Rc<glow::Context>,
    pub(crate) texture: glow::Texture,
    width: u32,
    height: u32,
    format: TextureFormat,
    samples: u32,
}

impl GlTexture {
    pub(crate) fn new(
        gl: Rc<glow::Context>,
        texture: glow::Texture,
        width: u32,
        height: u32,
        format: TextureFormat,
        samples: u32,
    ) -> Self {
        Self { gl, texture, width, height, format, samples }
    }

    /// Bind target matching the sample count
    pub(crate) fn target(&self) -> u32 {
        if self.samples > 1 { glow::TEXTURE_2D_MULTISAMPLE } else { glow::TEXTURE_2D }
    }
}

impl Texture for GlTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn samples(&self) -> u32 {
        self.samples
    }

    fn raw_id(&self) -> u32 {
        self.texture.0.get()
    }
}

impl Drop for GlTexture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.texture);
        }
    }
}
