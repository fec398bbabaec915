/// Owner of the engine's resource pools
///
/// Holds the texture and shader pools sized from the renderer configuration.
/// Passed by reference to whatever loads or draws; there is no global
/// instance.

use crate::renderer::RendererConfig;
use crate::resource::resource_pool::{ShaderPool, TexturePool};
use crate::engine_info;

pub struct ResourceManager {
    pub textures: TexturePool,
    pub shaders: ShaderPool,
}

impl ResourceManager {
    /// Pools with the capacities from `config`
    pub fn new(config: &RendererConfig) -> Self {
        Self::with_capacities(config.max_textures, config.max_shaders)
    }

    pub fn with_capacities(max_textures: usize, max_shaders: usize) -> Self {
        Self {
            textures: TexturePool::new("textures", max_textures),
            shaders: ShaderPool::new("shaders", max_shaders),
        }
    }

    /// Release every texture and shader
    ///
    /// Keys handed out before the call resolve to `None` afterwards.
    pub fn clear(&mut self) {
        engine_info!(
            "prism3d::ResourcePool",
            "Releasing {} textures and {} shaders",
            self.textures.len(), self.shaders.len()
        );
        self.textures.clear();
        self.shaders.clear();
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
