/// Shader program resource
///
/// One linked program plus its label, with typed uniform setters that resolve
/// locations by name. Locations can be cached per shader; the name-based
/// contract is the same either way, and a name the program does not declare is
/// silently skipped.
///
/// A program that failed to compile is kept as an invalid shader: using it and
/// setting uniforms on it do nothing.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Program, ProgramDesc, UniformLocation, UniformValue};
use crate::{engine_error, engine_info, engine_trace};

pub struct Shader {
    device: Rc<dyn GraphicsDevice>,
    label: String,
    program: Option<Box<dyn Program>>,
    /// `None` disables caching
    locations: Option<RefCell<FxHashMap<String, Option<UniformLocation>>>>,
}

impl Shader {
    /// Compile and link from in-memory sources
    ///
    /// A compile/link failure is logged with the driver log and yields an
    /// invalid shader.
    pub fn from_sources(
        device: Rc<dyn GraphicsDevice>,
        label: &str,
        vertex_source: &str,
        fragment_source: &str,
        cache_locations: bool,
    ) -> Self {
        let program = match device.create_program(&ProgramDesc { label, vertex_source, fragment_source }) {
            Ok(program) => {
                engine_info!("prism3d::Shader", "Linked shader '{}'", label);
                Some(program)
            }
            Err(Error::ShaderCompilation { log, .. }) => {
                engine_error!("prism3d::Shader", "Shader '{}' failed to build:\n{}", label, log);
                None
            }
            Err(e) => {
                engine_error!("prism3d::Shader", "Shader '{}' failed to build: {}", label, e);
                None
            }
        };
        Self {
            device,
            label: label.to_string(),
            program,
            locations: cache_locations.then(|| RefCell::new(FxHashMap::default())),
        }
    }

    /// Read both stage files fully and build the shader
    ///
    /// Unreadable files are an `AssetMissing` error; compile failures are not
    /// (see `from_sources`).
    pub fn from_files(
        device: Rc<dyn GraphicsDevice>,
        label: &str,
        vertex_path: &Path,
        fragment_path: &Path,
        cache_locations: bool,
    ) -> Result<Self> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|e| {
                engine_error!("prism3d::Shader", "Cannot read '{}': {}", path.display(), e);
                Error::AssetMissing(format!("{}: {}", path.display(), e))
            })
        };
        let vertex_source = read(vertex_path)?;
        let fragment_source = read(fragment_path)?;
        Ok(Self::from_sources(device, label, &vertex_source, &fragment_source, cache_locations))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// False when compilation or linking failed
    pub fn is_valid(&self) -> bool {
        self.program.is_some()
    }

    /// Make this program current
    pub fn use_program(&self) {
        if let Some(program) = self.program.as_deref() {
            self.device.use_program(Some(program));
        }
    }

    // ===== UNIFORMS =====

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set(name, UniformValue::Bool(value));
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.set(name, UniformValue::Int(value));
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.set(name, UniformValue::Float(value));
    }

    pub fn set_vec2(&self, name: &str, value: Vec2) {
        self.set(name, UniformValue::Vec2(value));
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set(name, UniformValue::Vec3(value));
    }

    pub fn set_vec4(&self, name: &str, value: Vec4) {
        self.set(name, UniformValue::Vec4(value));
    }

    pub fn set_mat2(&self, name: &str, value: &Mat2) {
        self.set(name, UniformValue::Mat2(*value));
    }

    pub fn set_mat3(&self, name: &str, value: &Mat3) {
        self.set(name, UniformValue::Mat3(*value));
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        self.set(name, UniformValue::Mat4(*value));
    }

    /// Upload a value; the program must be current
    pub fn set(&self, name: &str, value: UniformValue) {
        let Some(program) = self.program.as_deref() else {
            return;
        };
        match self.location(program, name) {
            Some(location) => self.device.set_uniform(location, &value),
            None => engine_trace!("prism3d::Shader", "'{}' has no uniform '{}'", self.label, name),
        }
    }

    fn location(&self, program: &dyn Program, name: &str) -> Option<UniformLocation> {
        let Some(cache) = &self.locations else {
            return self.device.uniform_location(program, name);
        };
        if let Some(location) = cache.borrow().get(name) {
            return *location;
        }
        let location = self.device.uniform_location(program, name);
        cache.borrow_mut().insert(name.to_string(), location);
        location
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
