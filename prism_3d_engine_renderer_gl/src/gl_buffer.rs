/// GL buffer object

use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::{Buffer, BufferUsage};
use prism_3d_engine::prism3d::{Error, Result};

pub struct GlBuffer {
    gl: Rc<glow::Context>,
    pub(crate) buffer: glow::Buffer,
    usage: BufferUsage,
    size: u64,
}

impl GlBuffer {
    pub(crate) fn new(gl: Rc<glow::Context>, buffer: glow::Buffer, usage: BufferUsage, size: u64) -> Self {
        Self { gl, buffer, usage, size }
    }
}

impl Buffer for GlBuffer {
    fn usage(&self) -> BufferUsage {
        self.usage
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            return Err(Error::InvalidResource(format!(
                "write of {} bytes at {} exceeds buffer size {}",
                data.len(), offset, self.size
            )));
        }
        // ARRAY_BUFFER for every kind: binding ELEMENT_ARRAY_BUFFER would
        // rewire whichever vertex array is bound
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer));
            self.gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, offset as i32, data);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
        Ok(())
    }

    fn raw_id(&self) -> u32 {
        self.buffer.0.get()
    }
}

impl Drop for GlBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.buffer);
        }
    }
}
