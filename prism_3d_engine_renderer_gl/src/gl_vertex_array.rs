/// GL vertex array object

use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::VertexArrayObject;

pub struct GlVertexArray {
    gl: Rc<glow::Context>,
    pub(crate) vao: glow::VertexArray,
}

impl GlVertexArray {
    pub(crate) fn new(gl: Rc<glow::Context>, vao: glow::VertexArray) -> Self {
        Self { gl, vao }
    }
}

impl VertexArrayObject for GlVertexArray {
    fn raw_id(&self) -> u32 {
        self.vao.0.get()
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
