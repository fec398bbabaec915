//! Uniform names shared by the engine and its shaders
//!
//! Any shader driven by `Scene::draw` must declare these names; a name it does
//! not declare is skipped without error, so a mismatch shows up as missing
//! lighting rather than a failure.

// ===== TRANSFORMS / CAMERA =====

pub const MODEL: &str = "model";
pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";
pub const VIEW_POS: &str = "viewPos";
/// Selects the per-instance matrix attribute instead of `model`
pub const INSTANCED: &str = "instanced";

// ===== MATERIAL SAMPLERS =====

pub const MATERIAL_DIFFUSE: &str = "material.diffuse";
pub const MATERIAL_SPECULAR: &str = "material.specular";
pub const MATERIAL_SHININESS: &str = "material.shininess";

/// Specular exponent used when a scene does not set its own
pub const DEFAULT_SHININESS: f32 = 32.0;

/// Texture unit of the diffuse map
pub const DIFFUSE_UNIT: u32 = 0;
/// Texture unit of the specular map
pub const SPECULAR_UNIT: u32 = 1;

// ===== LIGHTS =====

pub const DIR_LIGHT: &str = "DirLight";
pub const POINT_LIGHTS: &str = "PointLights";
pub const NUM_POINT_LIGHTS: &str = "NumPointLights";
pub const SPOT_LIGHTS: &str = "SpotLights";
pub const NUM_SPOT_LIGHTS: &str = "NumSpotLights";

pub const DIRECTION: &str = ".direction";
pub const POSITION: &str = ".position";
pub const AMBIENT: &str = ".ambient";
pub const DIFFUSE: &str = ".diffuse";
pub const SPECULAR: &str = ".specular";
pub const LINEAR: &str = ".linear";
pub const QUADRATIC: &str = ".quadratic";
pub const CUT_OFF: &str = ".cutOff";

// ===== POST PROCESS =====

pub const SCREEN_TEXTURE: &str = "screenTexture";

/// `base + suffix`, e.g. `("PointLights[0]", ".ambient")`
pub fn uniform_name(base: &str, suffix: &str) -> String {
    format!("{}{}", base, suffix)
}

/// `base[index]`, e.g. `("PointLights", 2)` → `PointLights[2]`
pub fn indexed(base: &str, index: usize) -> String {
    format!("{}[{}]", base, index)
}
