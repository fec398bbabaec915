/// Renderer - draw dispatch and per-frame driver
///
/// Stateless apart from the draw statistics: picks the right draw call for a
/// vertex array, counts it, and sequences one frame (offscreen MSAA pass,
/// scene draw, resolve).

use std::cell::Cell;
use std::rc::Rc;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::graphics_device::{self, ClearFlags, GraphicsDevice, TextureHandle, Viewport};
use crate::renderer::RendererConfig;
use crate::resource::{Shader, TexturePool, VertexArray};
use crate::scene::Scene;
use crate::target::RenderTarget;
use crate::{engine_error, engine_info, engine_trace, engine_warn};

/// Per-frame draw statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Draw calls issued since the last reset
    pub draw_calls: u32,
    /// Triangles submitted (instances included)
    pub triangles: u64,
}

/// What one frame hands to the editor viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutput {
    /// Resolved color texture
    pub viewport_texture: TextureHandle,
    /// Statistics of the frame
    pub stats: RendererStats,
}

pub struct Renderer {
    device: Rc<dyn GraphicsDevice>,
    config: RendererConfig,
    stats: Cell<RendererStats>,
}

impl Renderer {
    /// Validate `config` and prepare the device's global state
    pub fn new(device: Rc<dyn GraphicsDevice>, config: RendererConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            engine_error!("prism3d::Renderer", "Invalid renderer configuration: {}", e);
            return Err(e);
        }
        device.set_depth_test(true);
        engine_info!(
            "prism3d::Renderer",
            "Renderer ready for '{}' ({}x{}, {}x MSAA)",
            config.app_name, config.viewport_width, config.viewport_height, config.msaa_samples
        );
        Ok(Self { device, config, stats: Cell::new(RendererStats::default()) })
    }

    pub fn device(&self) -> &Rc<dyn GraphicsDevice> {
        &self.device
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    // ===== STATISTICS =====

    pub fn stats(&self) -> RendererStats {
        self.stats.get()
    }

    pub fn reset_stats(&self) {
        self.stats.set(RendererStats::default());
    }

    fn count(&self, elements: u32, instances: u32) {
        let mut stats = self.stats.get();
        stats.draw_calls += 1;
        stats.triangles += (elements / 3) as u64 * instances as u64;
        self.stats.set(stats);
    }

    // ===== DISPATCH =====

    /// Bind `texture` to `unit`; `None` binds no texture
    pub fn bind_texture(&self, unit: u32, texture: Option<&dyn graphics_device::Texture>) {
        self.device.bind_texture(unit, texture);
    }

    /// Indexed draw when the array has indices, non-indexed otherwise
    pub fn draw(&self, vertex_array: &VertexArray) {
        let Some(vao) = vertex_array.vao() else {
            engine_warn!("prism3d::Renderer", "Draw of a destroyed vertex array skipped");
            return;
        };
        self.device.bind_vertex_array(Some(vao));
        if vertex_array.is_indexed() {
            self.device.draw_indexed(vertex_array.index_count());
            self.count(vertex_array.index_count(), 1);
        } else {
            self.device.draw(0, vertex_array.vertex_count());
            self.count(vertex_array.vertex_count(), 1);
        }
    }

    /// Instanced draw of `instance_count()` instances
    ///
    /// Arrays without instancing, or with a zero instance count, draw nothing.
    pub fn draw_instanced(&self, vertex_array: &VertexArray) {
        let Some(vao) = vertex_array.vao() else {
            engine_warn!("prism3d::Renderer", "Draw of a destroyed vertex array skipped");
            return;
        };
        if !vertex_array.is_instanced() {
            engine_warn!("prism3d::Renderer", "Instanced draw of a vertex array without instancing skipped");
            return;
        }
        let instances = vertex_array.instance_count();
        if instances == 0 {
            engine_trace!("prism3d::Renderer", "Instanced draw with zero instances skipped");
            return;
        }
        self.device.bind_vertex_array(Some(vao));
        if vertex_array.is_indexed() {
            self.device.draw_indexed_instanced(vertex_array.index_count(), instances);
            self.count(vertex_array.index_count(), instances);
        } else {
            self.device.draw_instanced(vertex_array.vertex_count(), instances);
            self.count(vertex_array.vertex_count(), instances);
        }
    }

    // ===== FRAME =====

    /// Render `scene` into `target` and resolve it
    ///
    /// Resets statistics, draws into the multisample target (viewport, clear,
    /// camera, lights, meshes), blits into the resolve target and unbinds.
    pub fn render_frame(
        &self,
        target: &RenderTarget,
        scene: &Scene,
        camera: &Camera,
        shader: &Shader,
        textures: &TexturePool,
    ) -> Result<FrameOutput> {
        self.reset_stats();

        let Some(viewport_texture) = target.resolved_texture() else {
            return Err(Error::InvalidResource("render target is not ready".to_string()));
        };
        let (width, height) = target.multisample_size();

        target.bind_multisample();
        self.device.set_viewport(Viewport::sized(width, height));
        self.device.set_depth_test(true);
        self.device.clear(
            self.config.clear_color,
            ClearFlags::COLOR | ClearFlags::DEPTH | ClearFlags::STENCIL,
        );

        shader.use_program();
        camera.upload(shader, width as f32 / height as f32);
        scene.draw(self, shader, textures);

        target.blit();
        target.unbind();

        Ok(FrameOutput { viewport_texture, stats: self.stats() })
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
