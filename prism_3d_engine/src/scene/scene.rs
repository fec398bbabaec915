/// Scene - lights and mesh actors, drawn in insertion order
///
/// Entities live in one map keyed by `EntityId`; per-kind id lists keep the
/// insertion order, which is also the draw order. Hidden entities stay in
/// their list and are skipped at draw time.

use rustc_hash::FxHashMap;
use crate::renderer::Renderer;
use crate::resource::uniform_names::{
    self, DIR_LIGHT, MATERIAL_DIFFUSE, MATERIAL_SHININESS, MATERIAL_SPECULAR,
    NUM_POINT_LIGHTS, NUM_SPOT_LIGHTS, POINT_LIGHTS, SPOT_LIGHTS,
};
use crate::resource::{Shader, TexturePool};
use crate::scene::entity::{EntityId, EntityKind, SceneEntity, SceneObject};
use crate::scene::light::{self, DirectionalLight, PointLight, SpotLight};
use crate::{engine_debug, engine_trace};

pub struct Scene {
    entities: FxHashMap<EntityId, SceneEntity>,
    directional_light: Option<EntityId>,
    point_lights: Vec<EntityId>,
    spot_lights: Vec<EntityId>,
    /// Static and instanced meshes share one ordered list
    meshes: Vec<EntityId>,
    shininess: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: FxHashMap::default(),
            directional_light: None,
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
            meshes: Vec::new(),
            shininess: uniform_names::DEFAULT_SHININESS,
        }
    }

    // ===== EDITING =====

    /// Add an object at the end of its collection and return its id
    ///
    /// A new directional light replaces the current one, which is dropped.
    pub fn add(&mut self, object: impl Into<SceneObject>) -> EntityId {
        self.insert(SceneEntity::new(object))
    }

    /// Add an already wrapped entity (keeps its id and name)
    pub fn insert(&mut self, entity: SceneEntity) -> EntityId {
        let id = entity.id();
        let kind = entity.kind();
        match kind {
            EntityKind::DirectionalLight => {
                if let Some(previous) = self.directional_light.replace(id) {
                    self.entities.remove(&previous);
                    engine_debug!("prism3d::Scene", "Directional light {} replaced by {}", previous, id);
                }
            }
            EntityKind::PointLight => self.point_lights.push(id),
            EntityKind::SpotLight => self.spot_lights.push(id),
            EntityKind::StaticMesh | EntityKind::InstancedMesh => self.meshes.push(id),
        }
        engine_trace!("prism3d::Scene", "Added '{}' (id {})", entity.name(), id);
        self.entities.insert(id, entity);
        id
    }

    /// Take an entity out of the scene; later entities keep their order
    pub fn remove(&mut self, id: EntityId) -> Option<SceneEntity> {
        let entity = self.entities.remove(&id)?;
        match entity.kind() {
            EntityKind::DirectionalLight => self.directional_light = None,
            EntityKind::PointLight => self.point_lights.retain(|&e| e != id),
            EntityKind::SpotLight => self.spot_lights.retain(|&e| e != id),
            EntityKind::StaticMesh | EntityKind::InstancedMesh => self.meshes.retain(|&e| e != id),
        }
        Some(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut SceneEntity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Returns false if `id` is not in the scene
    pub fn set_visible(&mut self, id: EntityId, visible: bool) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.set_visible(visible);
                true
            }
            None => false,
        }
    }

    /// Every entity: directional light, point lights, spot lights, meshes
    pub fn entities(&self) -> impl Iterator<Item = &SceneEntity> + '_ {
        self.directional_light
            .iter()
            .chain(&self.point_lights)
            .chain(&self.spot_lights)
            .chain(&self.meshes)
            .filter_map(|id| self.entities.get(id))
    }

    pub fn directional_light(&self) -> Option<&SceneEntity> {
        self.directional_light.and_then(|id| self.entities.get(&id))
    }

    pub fn point_lights(&self) -> impl Iterator<Item = &SceneEntity> + '_ {
        self.point_lights.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn spot_lights(&self) -> impl Iterator<Item = &SceneEntity> + '_ {
        self.spot_lights.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn meshes(&self) -> impl Iterator<Item = &SceneEntity> + '_ {
        self.meshes.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop every entity (their meshes release their GPU objects)
    pub fn clear(&mut self) {
        self.entities.clear();
        self.directional_light = None;
        self.point_lights.clear();
        self.spot_lights.clear();
        self.meshes.clear();
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    // ===== DRAWING =====

    /// Upload material and light uniforms, then draw visible meshes in order
    pub fn draw(&self, renderer: &Renderer, shader: &Shader, textures: &TexturePool) {
        shader.use_program();
        shader.set_int(MATERIAL_DIFFUSE, uniform_names::DIFFUSE_UNIT as i32);
        shader.set_int(MATERIAL_SPECULAR, uniform_names::SPECULAR_UNIT as i32);
        shader.set_float(MATERIAL_SHININESS, self.shininess);
        shader.set_bool(uniform_names::INSTANCED, false);

        self.upload_lights(shader);

        for entity in self.meshes().filter(|e| e.is_visible()) {
            match entity.object() {
                SceneObject::StaticMesh(mesh) => mesh.draw(renderer, shader, textures),
                SceneObject::InstancedMesh(mesh) => mesh.draw(renderer, shader, textures),
                _ => {}
            }
        }
    }

    fn upload_lights(&self, shader: &Shader) {
        // A hidden or missing directional light must not leave last frame's values behind
        let directional = self.directional_light()
            .filter(|e| e.is_visible())
            .and_then(|e| match e.object() {
                SceneObject::DirectionalLight(light) => Some(*light),
                _ => None,
            })
            .unwrap_or_else(DirectionalLight::off);
        directional.upload(shader, DIR_LIGHT);

        let points = self.point_lights()
            .filter(|e| e.is_visible())
            .filter_map(|e| match e.object() {
                SceneObject::PointLight(light) => Some(light),
                _ => None,
            });
        light::upload_array(shader, POINT_LIGHTS, NUM_POINT_LIGHTS, points, PointLight::upload);

        let spots = self.spot_lights()
            .filter(|e| e.is_visible())
            .filter_map(|e| match e.object() {
                SceneObject::SpotLight(light) => Some(light),
                _ => None,
            });
        light::upload_array(shader, SPOT_LIGHTS, NUM_SPOT_LIGHTS, spots, SpotLight::upload);
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
