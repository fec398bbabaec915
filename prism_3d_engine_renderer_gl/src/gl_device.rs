/// OpenGL implementation of `GraphicsDevice`
///
/// Wraps a `glow::Context` (3.3 core or newer) created by the host. Every
/// object handed out keeps an `Rc` to the context, so objects are deleted
/// while it is still alive.

use std::num::NonZeroU32;
use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::{
    Buffer, BufferDesc, ClearFlags, Framebuffer, FramebufferDesc, GraphicsDevice, Program,
    ProgramDesc, Texture, TextureDesc, UniformLocation, UniformValue, VertexArrayObject,
    VertexAttribute, Viewport,
};
use prism_3d_engine::prism3d::{Error, Result};
use prism_3d_engine::{engine_err, engine_error, engine_info};
use crate::gl_buffer::GlBuffer;
use crate::gl_format::{buffer_usage_hint, clear_mask, texture_format_to_gl, unpack_alignment};
use crate::gl_frame_buffer::GlFramebuffer;
use crate::gl_shader::link_program;
use crate::gl_texture::GlTexture;
use crate::gl_vertex_array::GlVertexArray;

/// Lowest context version the engine's shaders compile against
const MIN_GL_VERSION: (u32, u32) = (3, 3);

pub struct GlGraphicsDevice {
    gl: Rc<glow::Context>,
}

impl GlGraphicsDevice {
    /// Take ownership of a current context
    ///
    /// Fails with `Error::InitializationFailed` below OpenGL 3.3 (or on ES).
    #[cfg_attr(not(feature = "gl-debug"), allow(unused_mut))]
    pub fn new(mut gl: glow::Context) -> Result<Self> {
        let (major, minor, embedded, version) = unsafe {
            let v = gl.version();
            (v.major, v.minor, v.is_embedded, gl.get_parameter_string(glow::VERSION))
        };
        if embedded || (major, minor) < MIN_GL_VERSION {
            engine_error!("prism3d::gl", "OpenGL {} is not supported (3.3 core required)", version);
            return Err(Error::InitializationFailed(format!("unsupported OpenGL version {}", version)));
        }

        #[cfg(feature = "gl-debug")]
        crate::debug::install(&mut gl);

        engine_info!("prism3d::gl", "OpenGL device ready ({})", version);
        Ok(Self { gl: Rc::new(gl) })
    }

    /// Underlying context, for host-side work such as the UI renderer
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }
}

// ===== NATIVE NAMES =====
// Engine objects expose their GL name through `raw_id()`; zero never names a live object.

fn native_buffer(buffer: &dyn Buffer) -> Option<glow::Buffer> {
    NonZeroU32::new(buffer.raw_id()).map(glow::NativeBuffer)
}

fn native_vertex_array(vao: &dyn VertexArrayObject) -> Option<glow::VertexArray> {
    NonZeroU32::new(vao.raw_id()).map(glow::NativeVertexArray)
}

fn native_texture(texture: &dyn Texture) -> Option<glow::Texture> {
    NonZeroU32::new(texture.raw_id()).map(glow::NativeTexture)
}

fn native_program(program: &dyn Program) -> Option<glow::Program> {
    NonZeroU32::new(program.raw_id()).map(glow::NativeProgram)
}

fn native_framebuffer(framebuffer: &dyn Framebuffer) -> Option<glow::Framebuffer> {
    NonZeroU32::new(framebuffer.raw_id()).map(glow::NativeFramebuffer)
}

impl GraphicsDevice for GlGraphicsDevice {
    // ===== OBJECT CREATION =====

    fn create_buffer(&self, desc: &BufferDesc) -> Result<Box<dyn Buffer>> {
        if let Some(data) = desc.data {
            if data.len() as u64 > desc.size {
                return Err(Error::InvalidResource(format!(
                    "buffer data is {} bytes, size is {}",
                    data.len(), desc.size
                )));
            }
        }
        let hint = buffer_usage_hint(desc.usage);
        unsafe {
            let buffer = self.gl.create_buffer().map_err(|e| engine_err!("prism3d::gl", "glCreateBuffer failed: {}", e))?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            match desc.data {
                Some(data) if data.len() as u64 == desc.size => {
                    self.gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, hint);
                }
                data => {
                    self.gl.buffer_data_size(glow::ARRAY_BUFFER, desc.size as i32, hint);
                    if let Some(data) = data {
                        self.gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, data);
                    }
                }
            }
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            Ok(Box::new(GlBuffer::new(Rc::clone(&self.gl), buffer, desc.usage, desc.size)))
        }
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArrayObject>> {
        let vao = unsafe { self.gl.create_vertex_array().map_err(|e| engine_err!("prism3d::gl", "glCreateVertexArray failed: {}", e))? };
        Ok(Box::new(GlVertexArray::new(Rc::clone(&self.gl), vao)))
    }

    fn set_vertex_attributes(
        &self,
        vao: &dyn VertexArrayObject,
        buffer: &dyn Buffer,
        attributes: &[VertexAttribute],
    ) {
        unsafe {
            self.gl.bind_vertex_array(native_vertex_array(vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, native_buffer(buffer));
            for attribute in attributes {
                self.gl.enable_vertex_attrib_array(attribute.location);
                self.gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components as i32,
                    glow::FLOAT,
                    false,
                    attribute.stride as i32,
                    attribute.offset as i32,
                );
                self.gl.vertex_attrib_divisor(attribute.location, attribute.divisor);
            }
            self.gl.bind_vertex_array(None);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn set_index_buffer(&self, vao: &dyn VertexArrayObject, buffer: &dyn Buffer) {
        unsafe {
            self.gl.bind_vertex_array(native_vertex_array(vao));
            // Recorded in the vertex array; must stay bound until it is unbound
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, native_buffer(buffer));
            self.gl.bind_vertex_array(None);
        }
    }

    fn create_texture(&self, desc: &TextureDesc) -> Result<Box<dyn Texture>> {
        if let Some(data) = desc.data {
            if data.len() != desc.expected_len() {
                return Err(Error::InvalidResource(format!(
                    "texture data is {} bytes, expected {}",
                    data.len(), desc.expected_len()
                )));
            }
        }
        let format = texture_format_to_gl(desc.format);
        let samples = desc.samples.max(1);
        unsafe {
            let texture = self.gl.create_texture().map_err(|e| engine_err!("prism3d::gl", "glCreateTexture failed: {}", e))?;
            let gl_texture = GlTexture::new(
                Rc::clone(&self.gl),
                texture,
                desc.width,
                desc.height,
                desc.format,
                samples,
            );
            let target = gl_texture.target();
            self.gl.bind_texture(target, Some(texture));

            if samples > 1 {
                self.gl.tex_image_2d_multisample(
                    target,
                    samples as i32,
                    format.internal_format as i32,
                    desc.width as i32,
                    desc.height as i32,
                    true,
                );
            } else {
                self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, unpack_alignment(desc.format));
                self.gl.tex_image_2d(
                    target,
                    0,
                    format.internal_format as i32,
                    desc.width as i32,
                    desc.height as i32,
                    0,
                    format.format,
                    format.ty,
                    desc.data,
                );
                let min_filter = if desc.generate_mipmaps { glow::LINEAR_MIPMAP_LINEAR } else { glow::LINEAR };
                self.gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
                self.gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
                self.gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, min_filter as i32);
                self.gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
                if desc.generate_mipmaps {
                    self.gl.generate_mipmap(target);
                }
                self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 4);
            }
            self.gl.bind_texture(target, None);
            Ok(Box::new(gl_texture))
        }
    }

    fn create_program(&self, desc: &ProgramDesc) -> Result<Box<dyn Program>> {
        Ok(Box::new(link_program(&self.gl, desc)?))
    }

    fn create_framebuffer(&self, desc: &FramebufferDesc) -> Result<Box<dyn Framebuffer>> {
        Ok(Box::new(GlFramebuffer::new(&self.gl, desc)?))
    }

    // ===== PROGRAM STATE =====

    fn use_program(&self, program: Option<&dyn Program>) {
        unsafe { self.gl.use_program(program.and_then(native_program)) };
    }

    fn uniform_location(&self, program: &dyn Program, name: &str) -> Option<UniformLocation> {
        let program = native_program(program)?;
        unsafe { self.gl.get_uniform_location(program, name) }.map(|location| UniformLocation(location.0))
    }

    fn set_uniform(&self, location: UniformLocation, value: &UniformValue) {
        let location = glow::NativeUniformLocation(location.0);
        let location = Some(&location);
        unsafe {
            match value {
                UniformValue::Bool(v) => self.gl.uniform_1_i32(location, *v as i32),
                UniformValue::Int(v) => self.gl.uniform_1_i32(location, *v),
                UniformValue::Float(v) => self.gl.uniform_1_f32(location, *v),
                UniformValue::Vec2(v) => self.gl.uniform_2_f32(location, v.x, v.y),
                UniformValue::Vec3(v) => self.gl.uniform_3_f32(location, v.x, v.y, v.z),
                UniformValue::Vec4(v) => self.gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
                UniformValue::Mat2(m) => self.gl.uniform_matrix_2_f32_slice(location, false, &m.to_cols_array()),
                UniformValue::Mat3(m) => self.gl.uniform_matrix_3_f32_slice(location, false, &m.to_cols_array()),
                UniformValue::Mat4(m) => self.gl.uniform_matrix_4_f32_slice(location, false, &m.to_cols_array()),
            }
        }
    }

    // ===== BINDING =====

    fn bind_texture(&self, unit: u32, texture: Option<&dyn Texture>) {
        let target = match texture {
            Some(t) if t.samples() > 1 => glow::TEXTURE_2D_MULTISAMPLE,
            _ => glow::TEXTURE_2D,
        };
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(target, texture.and_then(native_texture));
        }
    }

    fn bind_vertex_array(&self, vao: Option<&dyn VertexArrayObject>) {
        unsafe { self.gl.bind_vertex_array(vao.and_then(native_vertex_array)) };
    }

    fn bind_framebuffer(&self, framebuffer: Option<&dyn Framebuffer>) {
        unsafe { self.gl.bind_framebuffer(glow::FRAMEBUFFER, framebuffer.and_then(native_framebuffer)) };
    }

    fn blit_framebuffer(&self, src: &dyn Framebuffer, dst: &dyn Framebuffer) {
        unsafe {
            self.gl.bind_framebuffer(glow::READ_FRAMEBUFFER, native_framebuffer(src));
            self.gl.bind_framebuffer(glow::DRAW_FRAMEBUFFER, native_framebuffer(dst));
            self.gl.blit_framebuffer(
                0,
                0,
                src.width() as i32,
                src.height() as i32,
                0,
                0,
                dst.width() as i32,
                dst.height() as i32,
                glow::COLOR_BUFFER_BIT,
                glow::NEAREST,
            );
        }
    }

    fn set_viewport(&self, viewport: Viewport) {
        unsafe {
            self.gl.viewport(viewport.x, viewport.y, viewport.width as i32, viewport.height as i32);
        }
    }

    fn set_depth_test(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.gl.enable(glow::DEPTH_TEST);
            } else {
                self.gl.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn clear(&self, color: [f32; 4], flags: ClearFlags) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(clear_mask(flags));
        }
    }

    // ===== DRAWING =====

    fn draw(&self, first_vertex: u32, vertex_count: u32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, first_vertex as i32, vertex_count as i32) };
    }

    fn draw_indexed(&self, index_count: u32) {
        unsafe { self.gl.draw_elements(glow::TRIANGLES, index_count as i32, glow::UNSIGNED_INT, 0) };
    }

    fn draw_instanced(&self, vertex_count: u32, instance_count: u32) {
        unsafe {
            self.gl.draw_arrays_instanced(glow::TRIANGLES, 0, vertex_count as i32, instance_count as i32);
        }
    }

    fn draw_indexed_instanced(&self, index_count: u32, instance_count: u32) {
        unsafe {
            self.gl.draw_elements_instanced(
                glow::TRIANGLES,
                index_count as i32,
                glow::UNSIGNED_INT,
                0,
                instance_count as i32,
            );
        }
    }
}
