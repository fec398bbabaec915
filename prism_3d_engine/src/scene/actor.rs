/// Mesh actors placed in the scene
///
/// `StaticMesh` draws its meshes once with a single model matrix.
/// `InstancedMesh` draws every mesh once per instance transform through the
/// per-instance buffer of each vertex array.

use glam::Mat4;
use crate::error::{Error, Result};
use crate::renderer::Renderer;
use crate::resource::uniform_names;
use crate::resource::{Mesh, Shader, TexturePool};
use crate::scene::transform::Transform;
use crate::engine_warn;

// ===== STATIC MESH =====

pub struct StaticMesh {
    pub transform: Transform,
    meshes: Vec<Mesh>,
}

impl StaticMesh {
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self { transform: Transform::default(), meshes }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    pub fn draw(&self, renderer: &Renderer, shader: &Shader, textures: &TexturePool) {
        let model = self.transform.model_matrix();
        for mesh in &self.meshes {
            mesh.draw(renderer, shader, textures, &model);
        }
    }
}

// ===== INSTANCED MESH =====

pub struct InstancedMesh {
    meshes: Vec<Mesh>,
    instances: Vec<Transform>,
    max_instances: u32,
}

impl InstancedMesh {
    /// Enable instancing on every mesh with room for `max_instances`
    pub fn new(mut meshes: Vec<Mesh>, max_instances: u32) -> Result<Self> {
        for mesh in &mut meshes {
            mesh.vertex_array_mut().enable_instancing(max_instances)?;
        }
        Ok(Self { meshes, instances: Vec::new(), max_instances })
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn max_instances(&self) -> u32 {
        self.max_instances
    }

    pub fn instances(&self) -> &[Transform] {
        &self.instances
    }

    pub fn instance_mut(&mut self, index: usize) -> Option<&mut Transform> {
        self.instances.get_mut(index)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Append an instance and return its index
    pub fn add_instance(&mut self, transform: Transform) -> Result<usize> {
        if self.instances.len() as u32 >= self.max_instances {
            engine_warn!(
                "prism3d::Scene",
                "Instanced mesh is full ({} instances)",
                self.max_instances
            );
            return Err(Error::InvalidResource(format!(
                "instanced mesh holds at most {} instances",
                self.max_instances
            )));
        }
        self.instances.push(transform);
        Ok(self.instances.len() - 1)
    }

    /// Remove an instance; later instances shift down by one
    pub fn remove_instance(&mut self, index: usize) -> Option<Transform> {
        (index < self.instances.len()).then(|| self.instances.remove(index))
    }

    /// Upload all instance transforms and issue one instanced draw per mesh
    pub fn draw(&self, renderer: &Renderer, shader: &Shader, textures: &TexturePool) {
        let matrices: Vec<Mat4> = self.instances.iter().map(Transform::model_matrix).collect();

        shader.set_bool(uniform_names::INSTANCED, true);
        for mesh in &self.meshes {
            let vertex_array = mesh.vertex_array();
            for (index, matrix) in matrices.iter().enumerate() {
                vertex_array.set_instance_transform(index as u32, matrix);
            }
            vertex_array.set_instance_count(matrices.len() as u32);
            mesh.draw_instanced(renderer, textures);
        }
        shader.set_bool(uniform_names::INSTANCED, false);
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
