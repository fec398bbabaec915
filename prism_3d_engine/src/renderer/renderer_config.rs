/// Renderer configuration

use crate::error::{Error, Result};

/// Highest MSAA sample count accepted
pub const MAX_MSAA_SAMPLES: u32 = 16;

#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Application name (window title, logs)
    pub app_name: String,
    /// Initial offscreen viewport width
    pub viewport_width: u32,
    /// Initial offscreen viewport height
    pub viewport_height: u32,
    /// Samples of the multisample target (power of two, 1..=16)
    pub msaa_samples: u32,
    /// Present paced by vertical sync (applied by the host's swap interval)
    pub vsync: bool,
    /// Clear color of the scene pass
    pub clear_color: [f32; 4],
    /// Shader pool capacity
    pub max_shaders: usize,
    /// Texture pool capacity
    pub max_textures: usize,
    /// Cache uniform locations per shader
    pub cache_uniform_locations: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            app_name: "Prism3D Application".to_string(),
            viewport_width: 1280,
            viewport_height: 720,
            msaa_samples: 4,
            vsync: true,
            clear_color: [0.1, 0.1, 0.1, 1.0],
            max_shaders: 10,
            max_textures: 100,
            cache_uniform_locations: true,
        }
    }
}

impl RendererConfig {
    /// Reject configurations the renderer cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(Error::InitializationFailed(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.msaa_samples == 0
            || !self.msaa_samples.is_power_of_two()
            || self.msaa_samples > MAX_MSAA_SAMPLES
        {
            return Err(Error::InitializationFailed(format!(
                "MSAA samples must be a power of two in 1..={}, got {}",
                MAX_MSAA_SAMPLES, self.msaa_samples
            )));
        }
        if self.max_shaders == 0 || self.max_textures == 0 {
            return Err(Error::InitializationFailed(
                "resource pool capacities must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "renderer_config_tests.rs"]
mod tests;
