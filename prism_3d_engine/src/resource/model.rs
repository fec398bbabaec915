/// Model import seam
///
/// A `ModelImporter` turns a model file into plain mesh data; `load_model`
/// uploads that data and resolves texture hints through the texture pool.
/// File-format parsing lives in the importer, outside the engine core.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use crate::resource::mesh::Mesh;
use crate::resource::resource_pool::{TextureKey, TexturePool};
use crate::resource::vertex_layout::VertexLayout;
use crate::{engine_debug, engine_error, engine_warn};

/// One mesh of an imported model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedMesh {
    /// Interleaved position(3) + normal(3) + uv(2)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    /// Relative to the model file's directory
    pub diffuse: Option<PathBuf>,
    pub specular: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedModel {
    pub meshes: Vec<ImportedMesh>,
}

pub trait ModelImporter {
    fn import(&self, path: &Path) -> Result<ImportedModel>;
}

/// Import `path` and build one `Mesh` per imported mesh
///
/// An importer failure aborts the load with `Error::AssetMissing`. A mesh whose
/// geometry cannot be uploaded is skipped; a texture that fails to load leaves
/// the corresponding key `None`.
pub fn load_model(
    device: &Rc<dyn GraphicsDevice>,
    importer: &dyn ModelImporter,
    path: &Path,
    textures: &mut TexturePool,
) -> Result<Vec<Mesh>> {
    let model = importer.import(path).map_err(|e| {
        engine_error!("prism3d::ResourcePool", "Failed to import model '{}': {}", path.display(), e);
        match e {
            Error::AssetMissing(_) => e,
            other => Error::AssetMissing(format!("{}: {}", path.display(), other)),
        }
    })?;

    let directory = path.parent().unwrap_or_else(|| Path::new(""));
    let mut meshes = Vec::with_capacity(model.meshes.len());

    for (index, imported) in model.meshes.iter().enumerate() {
        let mesh = match Mesh::new(
            Rc::clone(device),
            &imported.vertices,
            Some(imported.indices.as_slice()),
            VertexLayout::position_normal_uv(),
        ) {
            Ok(mesh) => mesh,
            Err(e) => {
                engine_error!(
                    "prism3d::ResourcePool",
                    "Mesh {} of '{}' skipped: {}",
                    index, path.display(), e
                );
                continue;
            }
        };

        let diffuse = load_hint(device.as_ref(), textures, directory, imported.diffuse.as_deref());
        let specular = load_hint(device.as_ref(), textures, directory, imported.specular.as_deref());
        meshes.push(mesh.with_textures(diffuse, specular));
    }

    engine_debug!(
        "prism3d::ResourcePool",
        "Loaded model '{}' ({} of {} meshes)",
        path.display(), meshes.len(), model.meshes.len()
    );
    Ok(meshes)
}

fn load_hint(
    device: &dyn GraphicsDevice,
    textures: &mut TexturePool,
    directory: &Path,
    hint: Option<&Path>,
) -> Option<TextureKey> {
    let full = directory.join(hint?);
    match textures.load_file(device, &full) {
        Ok(key) if textures.resource(key).is_some_and(|t| !t.is_blank()) => Some(key),
        Ok(_) => {
            engine_warn!("prism3d::ResourcePool", "Texture '{}' unavailable, mesh left untextured", full.display());
            None
        }
        Err(e) => {
            engine_warn!("prism3d::ResourcePool", "Texture '{}' not loaded: {}", full.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
