//! Scene module
//!
//! Transforms, lights, mesh actors and the scene graph that draws them.

mod actor;
mod entity;
pub(crate) mod light;
mod scene;
mod transform;

pub use actor::{InstancedMesh, StaticMesh};
pub use entity::{EntityId, EntityKind, SceneEntity, SceneObject, SceneObjectMut};
pub use light::{Attenuation, DirectionalLight, LightProperties, PointLight, SpotLight};
pub use scene::Scene;
pub use transform::Transform;
