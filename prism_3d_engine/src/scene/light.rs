/// Light sources and their uniform upload
///
/// Each light writes its fields under `base + suffix` (see
/// `resource::uniform_names`). Ambient, diffuse and specular go out
/// pre-multiplied: `color * coefficient`.

use glam::Vec3;
use crate::resource::uniform_names::{
    self, uniform_name, AMBIENT, CUT_OFF, DIFFUSE, DIRECTION, LINEAR, POSITION, QUADRATIC, SPECULAR,
};
use crate::resource::Shader;

// ===== SHARED PROPERTIES =====

/// Color and the three lighting coefficients, each kept in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightProperties {
    color: Vec3,
    ambient: f32,
    diffuse: f32,
    specular: f32,
}

impl Default for LightProperties {
    fn default() -> Self {
        Self::new(Vec3::ONE, 0.1, 0.8, 1.0)
    }
}

impl LightProperties {
    pub fn new(color: Vec3, ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            color,
            ambient: ambient.clamp(0.0, 1.0),
            diffuse: diffuse.clamp(0.0, 1.0),
            specular: specular.clamp(0.0, 1.0),
        }
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }

    pub fn specular(&self) -> f32 {
        self.specular
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    pub fn set_ambient(&mut self, value: f32) {
        self.ambient = value.clamp(0.0, 1.0);
    }

    pub fn set_diffuse(&mut self, value: f32) {
        self.diffuse = value.clamp(0.0, 1.0);
    }

    pub fn set_specular(&mut self, value: f32) {
        self.specular = value.clamp(0.0, 1.0);
    }

    /// Color scaled by a coefficient, component-wise
    pub fn ambient_color(&self) -> Vec3 {
        self.color * self.ambient
    }

    pub fn diffuse_color(&self) -> Vec3 {
        self.color * self.diffuse
    }

    pub fn specular_color(&self) -> Vec3 {
        self.color * self.specular
    }

    fn upload(&self, shader: &Shader, base: &str) {
        shader.set_vec3(&uniform_name(base, AMBIENT), self.ambient_color());
        shader.set_vec3(&uniform_name(base, DIFFUSE), self.diffuse_color());
        shader.set_vec3(&uniform_name(base, SPECULAR), self.specular_color());
    }
}

// ===== ATTENUATION =====

/// Distance falloff `1 / (1 + linear*d + quadratic*d²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// Roughly a 50 unit range
    fn default() -> Self {
        Self { linear: 0.09, quadratic: 0.032 }
    }
}

impl Attenuation {
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (1.0 + self.linear * distance + self.quadratic * distance * distance)
    }

    fn upload(&self, shader: &Shader, base: &str) {
        shader.set_float(&uniform_name(base, LINEAR), self.linear);
        shader.set_float(&uniform_name(base, QUADRATIC), self.quadratic);
    }
}

// ===== LIGHT KINDS =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub properties: LightProperties,
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            properties: LightProperties::new(Vec3::ONE, 0.05, 0.4, 0.5),
            direction: Vec3::new(-0.2, -1.0, -0.3),
        }
    }
}

impl DirectionalLight {
    pub fn new(properties: LightProperties, direction: Vec3) -> Self {
        Self { properties, direction }
    }

    /// Light contributing nothing, uploaded when the scene has no visible one
    pub fn off() -> Self {
        Self {
            properties: LightProperties::new(Vec3::ZERO, 0.0, 0.0, 0.0),
            direction: Vec3::NEG_Y,
        }
    }

    pub fn upload(&self, shader: &Shader, base: &str) {
        shader.set_vec3(&uniform_name(base, DIRECTION), self.direction);
        self.properties.upload(shader, base);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub properties: LightProperties,
    pub position: Vec3,
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(LightProperties::default(), Vec3::ZERO)
    }
}

impl PointLight {
    pub fn new(properties: LightProperties, position: Vec3) -> Self {
        Self { properties, position, attenuation: Attenuation::default() }
    }

    pub fn upload(&self, shader: &Shader, base: &str) {
        shader.set_vec3(&uniform_name(base, POSITION), self.position);
        self.properties.upload(shader, base);
        self.attenuation.upload(shader, base);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub properties: LightProperties,
    pub position: Vec3,
    pub direction: Vec3,
    pub attenuation: Attenuation,
    /// Half-angle of the cone, degrees
    pub cut_off: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::new(LightProperties::default(), Vec3::ZERO, Vec3::NEG_Z, 12.5)
    }
}

impl SpotLight {
    pub fn new(properties: LightProperties, position: Vec3, direction: Vec3, cut_off: f32) -> Self {
        Self { properties, position, direction, attenuation: Attenuation::default(), cut_off }
    }

    /// The shader compares against the cosine of the half-angle
    pub fn cut_off_cosine(&self) -> f32 {
        self.cut_off.to_radians().cos()
    }

    pub fn upload(&self, shader: &Shader, base: &str) {
        shader.set_vec3(&uniform_name(base, POSITION), self.position);
        shader.set_vec3(&uniform_name(base, DIRECTION), self.direction);
        shader.set_float(&uniform_name(base, CUT_OFF), self.cut_off_cosine());
        self.properties.upload(shader, base);
        self.attenuation.upload(shader, base);
    }
}

/// Upload a light list under `array[i]` and its count under `count_name`
///
/// `i` is the position among the lights passed in, not the collection index.
pub(crate) fn upload_array<'a, L, F>(
    shader: &Shader,
    array: &str,
    count_name: &str,
    lights: impl Iterator<Item = &'a L>,
    upload: F,
) where
    L: 'a,
    F: Fn(&L, &Shader, &str),
{
    let mut count = 0;
    for light in lights {
        upload(light, shader, &uniform_names::indexed(array, count));
        count += 1;
    }
    shader.set_int(count_name, count as i32);
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
