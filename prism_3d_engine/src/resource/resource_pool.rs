/// Fixed-capacity, deduplicating resource pool
///
/// Resources are stored in a `SlotMap` under stable keys and indexed by their
/// identity string (file path or label). Loading an identity that is already
/// present returns the existing key without running the creation closure. The
/// pool never grows past its capacity and releases everything only on
/// `clear()` or drop.

use std::path::Path;
use std::rc::Rc;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, SlotMap};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use crate::resource::shader::Shader;
use crate::resource::texture::Texture;
use crate::{engine_debug, engine_warn};

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable key of a texture inside a `TexturePool`
    pub struct TextureKey;

    /// Stable key of a shader inside a `ShaderPool`
    pub struct ShaderKey;
}

// ===== GENERIC POOL =====

pub struct ResourcePool<K: Key, T> {
    name: &'static str,
    capacity: usize,
    resources: SlotMap<K, T>,
    by_identity: FxHashMap<String, K>,
}

impl<K: Key, T> ResourcePool<K, T> {
    /// Empty pool holding at most `capacity` resources
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            resources: SlotMap::with_capacity_and_key(capacity),
            by_identity: FxHashMap::default(),
        }
    }

    /// Return the key stored under `identity`, creating the resource if absent
    ///
    /// # Errors
    ///
    /// - `Error::PoolExhausted` when the pool is full (nothing is created)
    /// - whatever `create` returns; the pool is left unchanged
    pub fn load<F>(&mut self, identity: &str, create: F) -> Result<K>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(key) = self.by_identity.get(identity) {
            return Ok(*key);
        }
        if self.resources.len() >= self.capacity {
            engine_warn!(
                "prism3d::ResourcePool",
                "Pool '{}' is full ({} entries), cannot load '{}'",
                self.name, self.capacity, identity
            );
            return Err(Error::PoolExhausted {
                pool: self.name.to_string(),
                capacity: self.capacity,
            });
        }

        let resource = create()?;
        let key = self.resources.insert(resource);
        self.by_identity.insert(identity.to_string(), key);
        engine_debug!(
            "prism3d::ResourcePool",
            "Pool '{}' loaded '{}' ({}/{})",
            self.name, identity, self.resources.len(), self.capacity
        );
        Ok(key)
    }

    /// Key stored under `identity`
    pub fn get(&self, identity: &str) -> Option<K> {
        self.by_identity.get(identity).copied()
    }

    /// Resolve a key; `None` for keys from before a `clear()`
    pub fn resource(&self, key: K) -> Option<&T> {
        self.resources.get(key)
    }

    pub fn resource_mut(&mut self, key: K) -> Option<&mut T> {
        self.resources.get_mut(key)
    }

    /// Look a resource up by identity
    pub fn find(&self, identity: &str) -> Option<&T> {
        self.get(identity).and_then(|key| self.resources.get(key))
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.by_identity.contains_key(identity)
    }

    /// Number of live resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identities of all live resources, in no particular order
    pub fn identities(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_identity.keys().map(String::as_str)
    }

    /// Release every resource
    pub fn clear(&mut self) {
        if !self.resources.is_empty() {
            engine_debug!(
                "prism3d::ResourcePool",
                "Pool '{}' released {} entries",
                self.name, self.resources.len()
            );
        }
        self.by_identity.clear();
        self.resources.clear();
    }
}

// ===== CONCRETE POOLS =====

pub type TexturePool = ResourcePool<TextureKey, Texture>;
pub type ShaderPool = ResourcePool<ShaderKey, Shader>;

impl ResourcePool<TextureKey, Texture> {
    /// Load a texture file once per path
    pub fn load_file(&mut self, device: &dyn GraphicsDevice, path: &Path) -> Result<TextureKey> {
        let identity = path.to_string_lossy().into_owned();
        self.load(&identity, || Texture::from_file(device, path))
    }
}

impl ResourcePool<ShaderKey, Shader> {
    /// Build a shader from a vertex + fragment file pair once per label
    pub fn load_files(
        &mut self,
        device: &Rc<dyn GraphicsDevice>,
        label: &str,
        vertex_path: &Path,
        fragment_path: &Path,
        cache_locations: bool,
    ) -> Result<ShaderKey> {
        self.load(label, || {
            Shader::from_files(Rc::clone(device), label, vertex_path, fragment_path, cache_locations)
        })
    }

    /// Build a shader from in-memory sources once per label
    pub fn load_sources(
        &mut self,
        device: &Rc<dyn GraphicsDevice>,
        label: &str,
        vertex_source: &str,
        fragment_source: &str,
        cache_locations: bool,
    ) -> Result<ShaderKey> {
        self.load(label, || {
            Ok(Shader::from_sources(Rc::clone(device), label, vertex_source, fragment_source, cache_locations))
        })
    }
}

#[cfg(test)]
#[path = "resource_pool_tests.rs"]
mod tests;
