//! Resource module
//!
//! GPU-backed resources (vertex arrays, textures, shaders), the pools that own
//! textures and shaders, meshes and the model import seam.

pub mod vertex_layout;
pub mod vertex_array;
pub mod texture;
pub mod shader;
pub mod resource_pool;
mod resource_manager;
pub mod mesh;
pub mod model;
pub mod uniform_names;

pub use vertex_layout::VertexLayout;
pub use vertex_array::{VertexArray, VertexArrayDesc, INSTANCE_ATTRIBUTE_SLOTS, INSTANCE_STRIDE};
pub use texture::{decode_image, DecodedImage, Texture};
pub use shader::Shader;
pub use resource_pool::{ResourcePool, ShaderKey, ShaderPool, TextureKey, TexturePool};
pub use resource_manager::ResourceManager;
pub use mesh::Mesh;
pub use model::{load_model, ImportedMesh, ImportedModel, ModelImporter};
