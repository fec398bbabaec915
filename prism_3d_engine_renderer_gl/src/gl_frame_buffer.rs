/// GL framebuffer with its color texture and depth-stencil renderbuffer

use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::{Framebuffer, FramebufferDesc, Texture, TextureFormat};
use prism_3d_engine::prism3d::{Error, Result};
use prism_3d_engine::{engine_bail, engine_err};
use crate::gl_format::{framebuffer_status_name, texture_format_to_gl};
use crate::gl_texture::GlTexture;

pub struct GlFramebuffer {
    gl: Rc<glow::Context>,
    pub(crate) framebuffer: glow::Framebuffer,
    color: GlTexture,
    depth_stencil: glow::Renderbuffer,
    width: u32,
    height: u32,
    samples: u32,
}

impl GlFramebuffer {
    /// Allocate the attachments and check completeness
    ///
    /// Leaves the default framebuffer bound.
    pub(crate) fn new(gl: &Rc<glow::Context>, desc: &FramebufferDesc) -> Result<Self> {
        let (width, height) = (desc.width as i32, desc.height as i32);
        let samples = desc.samples.max(1);
        let color_format = texture_format_to_gl(TextureFormat::RGBA8);
        let depth_format = texture_format_to_gl(TextureFormat::Depth24Stencil8);

        unsafe {
            let framebuffer = gl.create_framebuffer().map_err(|e| engine_err!("prism3d::gl", "glCreateFramebuffer failed: {}", e))?;
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));

            let texture = match gl.create_texture() {
                Ok(texture) => texture,
                Err(e) => {
                    gl.bind_framebuffer(glow::FRAMEBUFFER, None);
                    gl.delete_framebuffer(framebuffer);
                    engine_bail!("prism3d::gl", "Color attachment creation failed: {}", e);
                }
            };
            let color = GlTexture::new(Rc::clone(gl), texture, desc.width, desc.height, TextureFormat::RGBA8, samples);
            gl.bind_texture(color.target(), Some(texture));
            if samples > 1 {
                gl.tex_image_2d_multisample(
                    glow::TEXTURE_2D_MULTISAMPLE,
                    samples as i32,
                    color_format.internal_format as i32,
                    width,
                    height,
                    true,
                );
            } else {
                gl.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    color_format.internal_format as i32,
                    width,
                    height,
                    0,
                    color_format.format,
                    color_format.ty,
                    None,
                );
                gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
                gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            }
            gl.bind_texture(color.target(), None);
            gl.framebuffer_texture_2d(glow::FRAMEBUFFER, glow::COLOR_ATTACHMENT0, color.target(), Some(texture), 0);

            let depth_stencil = match gl.create_renderbuffer() {
                Ok(renderbuffer) => renderbuffer,
                Err(e) => {
                    gl.bind_framebuffer(glow::FRAMEBUFFER, None);
                    gl.delete_framebuffer(framebuffer);
                    engine_bail!("prism3d::gl", "Depth-stencil renderbuffer creation failed: {}", e);
                }
            };
            gl.bind_renderbuffer(glow::RENDERBUFFER, Some(depth_stencil));
            if samples > 1 {
                gl.renderbuffer_storage_multisample(
                    glow::RENDERBUFFER,
                    samples as i32,
                    depth_format.internal_format,
                    width,
                    height,
                );
            } else {
                gl.renderbuffer_storage(glow::RENDERBUFFER, depth_format.internal_format, width, height);
            }
            gl.bind_renderbuffer(glow::RENDERBUFFER, None);
            gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                glow::DEPTH_STENCIL_ATTACHMENT,
                glow::RENDERBUFFER,
                Some(depth_stencil),
            );

            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);

            let framebuffer = Self {
                gl: Rc::clone(gl),
                framebuffer,
                color,
                depth_stencil,
                width: desc.width,
                height: desc.height,
                samples,
            };
            if status != glow::FRAMEBUFFER_COMPLETE {
                // Dropping `framebuffer` releases everything created above
                return Err(Error::IncompleteFramebuffer(format!(
                    "{}: {}",
                    desc.label, framebuffer_status_name(status)
                )));
            }
            Ok(framebuffer)
        }
    }
}

impl Framebuffer for GlFramebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn samples(&self) -> u32 {
        self.samples
    }

    fn color_texture(&self) -> &dyn Texture {
        &self.color
    }

    fn raw_id(&self) -> u32 {
        self.framebuffer.0.get()
    }
}

impl Drop for GlFramebuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_renderbuffer(self.depth_stencil);
            self.gl.delete_framebuffer(self.framebuffer);
        }
        // `color` deletes its texture when dropped after this
    }
}
