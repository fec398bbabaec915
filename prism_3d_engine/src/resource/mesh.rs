/// Mesh - one vertex array plus optional diffuse and specular maps
///
/// Textures are referenced by pool key and resolved at draw time. A mesh has no
/// transform of its own; the owning actor supplies the model matrix.

use std::rc::Rc;
use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::renderer::Renderer;
use crate::resource::resource_pool::{TextureKey, TexturePool};
use crate::resource::shader::Shader;
use crate::resource::texture::Texture;
use crate::resource::uniform_names::{self, DIFFUSE_UNIT, SPECULAR_UNIT};
use crate::resource::vertex_array::{VertexArray, VertexArrayDesc};
use crate::resource::vertex_layout::VertexLayout;

pub struct Mesh {
    vertex_array: VertexArray,
    diffuse: Option<TextureKey>,
    specular: Option<TextureKey>,
}

impl Mesh {
    /// Wrap an existing vertex array
    pub fn from_vertex_array(vertex_array: VertexArray) -> Self {
        Self { vertex_array, diffuse: None, specular: None }
    }

    /// Upload geometry and build an untextured mesh
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        vertices: &[f32],
        indices: Option<&[u32]>,
        layout: VertexLayout,
    ) -> Result<Self> {
        let vertex_array = VertexArray::new(device, VertexArrayDesc { vertices, indices, layout })?;
        Ok(Self::from_vertex_array(vertex_array))
    }

    /// Builder-style texture assignment
    pub fn with_textures(mut self, diffuse: Option<TextureKey>, specular: Option<TextureKey>) -> Self {
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    pub fn vertex_array(&self) -> &VertexArray {
        &self.vertex_array
    }

    pub fn vertex_array_mut(&mut self) -> &mut VertexArray {
        &mut self.vertex_array
    }

    pub fn diffuse(&self) -> Option<TextureKey> {
        self.diffuse
    }

    pub fn specular(&self) -> Option<TextureKey> {
        self.specular
    }

    pub fn set_diffuse(&mut self, key: Option<TextureKey>) {
        self.diffuse = key;
    }

    pub fn set_specular(&mut self, key: Option<TextureKey>) {
        self.specular = key;
    }

    /// Set `model`, bind both maps and issue one draw
    pub fn draw(&self, renderer: &Renderer, shader: &Shader, textures: &TexturePool, model: &Mat4) {
        shader.set_mat4(uniform_names::MODEL, model);
        self.bind_textures(renderer, textures);
        renderer.draw(&self.vertex_array);
    }

    /// Bind both maps and issue one instanced draw of `instance_count()` instances
    pub fn draw_instanced(&self, renderer: &Renderer, textures: &TexturePool) {
        self.bind_textures(renderer, textures);
        renderer.draw_instanced(&self.vertex_array);
    }

    /// Absent or stale keys bind no texture, so a previous mesh's maps never leak
    fn bind_textures(&self, renderer: &Renderer, textures: &TexturePool) {
        let diffuse = self.diffuse.and_then(|key| textures.resource(key)).map(Texture::gpu);
        let specular = self.specular.and_then(|key| textures.resource(key)).map(Texture::gpu);
        renderer.bind_texture(DIFFUSE_UNIT, diffuse);
        renderer.bind_texture(SPECULAR_UNIT, specular);
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
