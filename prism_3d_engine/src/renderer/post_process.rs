/// Post-process present pass
///
/// Draws a fullscreen quad sampling the resolved scene texture into the
/// default framebuffer.

use std::rc::Rc;
use crate::error::Result;
use crate::graphics_device::{ClearFlags, GraphicsDevice, Viewport};
use crate::renderer::Renderer;
use crate::resource::uniform_names;
use crate::resource::{Shader, VertexArray, VertexArrayDesc, VertexLayout};
use crate::target::RenderTarget;
use crate::engine_warn;

/// Two triangles covering clip space: x, y, u, v
#[rustfmt::skip]
const QUAD_VERTICES: [f32; 24] = [
    -1.0,  1.0, 0.0, 1.0,
    -1.0, -1.0, 0.0, 0.0,
     1.0, -1.0, 1.0, 0.0,
    -1.0,  1.0, 0.0, 1.0,
     1.0, -1.0, 1.0, 0.0,
     1.0,  1.0, 1.0, 1.0,
];

pub struct PostProcess {
    quad: VertexArray,
}

impl PostProcess {
    pub fn new(device: Rc<dyn GraphicsDevice>) -> Result<Self> {
        let quad = VertexArray::new(device, VertexArrayDesc {
            vertices: &QUAD_VERTICES,
            indices: None,
            layout: VertexLayout::position2_uv(),
        })?;
        Ok(Self { quad })
    }

    /// Draw the resolved color of `target` over the whole `viewport` of the default framebuffer
    pub fn present(&self, renderer: &Renderer, shader: &Shader, target: &RenderTarget, viewport: Viewport) {
        let Some(color) = target.resolved_color() else {
            engine_warn!("prism3d::PostProcess", "Present skipped: render target is not ready");
            return;
        };
        let device = renderer.device();

        device.bind_framebuffer(None);
        device.set_viewport(viewport);
        device.set_depth_test(false);
        device.clear([0.0, 0.0, 0.0, 1.0], ClearFlags::COLOR);

        shader.use_program();
        shader.set_int(uniform_names::SCREEN_TEXTURE, 0);
        renderer.bind_texture(0, Some(color));
        renderer.draw(&self.quad);

        device.set_depth_test(true);
    }
}

#[cfg(test)]
#[path = "post_process_tests.rs"]
mod tests;
