/// Scene entities
///
/// A `SceneEntity` wraps one `SceneObject` with a process-wide identity, a
/// display name and a visibility flag. Identities come from a monotonic
/// counter and are never reused.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::scene::actor::{InstancedMesh, StaticMesh};
use crate::scene::light::{DirectionalLight, PointLight, SpotLight};

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    DirectionalLight,
    PointLight,
    SpotLight,
    StaticMesh,
    InstancedMesh,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::DirectionalLight => "Directional Light",
            EntityKind::PointLight => "Point Light",
            EntityKind::SpotLight => "Spot Light",
            EntityKind::StaticMesh => "Static Mesh",
            EntityKind::InstancedMesh => "Instanced Mesh",
        }
    }

    /// Generated name shown in the editor, e.g. "Point Light 7"
    pub fn display_name(self, id: EntityId) -> String {
        match self {
            // Only one per scene
            EntityKind::DirectionalLight => self.label().to_string(),
            _ => format!("{} {}", self.label(), id),
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, EntityKind::DirectionalLight | EntityKind::PointLight | EntityKind::SpotLight)
    }
}

pub enum SceneObject {
    DirectionalLight(DirectionalLight),
    PointLight(PointLight),
    SpotLight(SpotLight),
    StaticMesh(StaticMesh),
    InstancedMesh(InstancedMesh),
}

impl SceneObject {
    pub fn kind(&self) -> EntityKind {
        match self {
            SceneObject::DirectionalLight(_) => EntityKind::DirectionalLight,
            SceneObject::PointLight(_) => EntityKind::PointLight,
            SceneObject::SpotLight(_) => EntityKind::SpotLight,
            SceneObject::StaticMesh(_) => EntityKind::StaticMesh,
            SceneObject::InstancedMesh(_) => EntityKind::InstancedMesh,
        }
    }

    fn as_mut(&mut self) -> SceneObjectMut<'_> {
        match self {
            SceneObject::DirectionalLight(light) => SceneObjectMut::DirectionalLight(light),
            SceneObject::PointLight(light) => SceneObjectMut::PointLight(light),
            SceneObject::SpotLight(light) => SceneObjectMut::SpotLight(light),
            SceneObject::StaticMesh(mesh) => SceneObjectMut::StaticMesh(mesh),
            SceneObject::InstancedMesh(mesh) => SceneObjectMut::InstancedMesh(mesh),
        }
    }
}

/// Mutable view of a wrapped object
///
/// Borrows the payload, not the enum, so an edit cannot change the kind the
/// owning scene filed the entity under. Changing kind means removing the
/// entity and adding a new one.
pub enum SceneObjectMut<'a> {
    DirectionalLight(&'a mut DirectionalLight),
    PointLight(&'a mut PointLight),
    SpotLight(&'a mut SpotLight),
    StaticMesh(&'a mut StaticMesh),
    InstancedMesh(&'a mut InstancedMesh),
}

impl From<DirectionalLight> for SceneObject {
    fn from(light: DirectionalLight) -> Self {
        SceneObject::DirectionalLight(light)
    }
}

impl From<PointLight> for SceneObject {
    fn from(light: PointLight) -> Self {
        SceneObject::PointLight(light)
    }
}

impl From<SpotLight> for SceneObject {
    fn from(light: SpotLight) -> Self {
        SceneObject::SpotLight(light)
    }
}

impl From<StaticMesh> for SceneObject {
    fn from(mesh: StaticMesh) -> Self {
        SceneObject::StaticMesh(mesh)
    }
}

impl From<InstancedMesh> for SceneObject {
    fn from(mesh: InstancedMesh) -> Self {
        SceneObject::InstancedMesh(mesh)
    }
}

pub struct SceneEntity {
    id: EntityId,
    name: String,
    visible: bool,
    object: SceneObject,
}

impl SceneEntity {
    /// Wrap an object with a fresh identity; visible by default
    pub fn new(object: impl Into<SceneObject>) -> Self {
        let object = object.into();
        let id = EntityId::next();
        let name = object.kind().display_name(id);
        Self { id, name, visible: true, object }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.object.kind()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn object(&self) -> &SceneObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> SceneObjectMut<'_> {
        self.object.as_mut()
    }

    pub fn into_object(self) -> SceneObject {
        self.object
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
