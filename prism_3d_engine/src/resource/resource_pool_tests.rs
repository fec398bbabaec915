use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use crate::error::Error;
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::graphics_device::GraphicsDevice;
use crate::resource::resource_pool::{ResourcePool, ShaderPool, TextureKey, TexturePool};

// ============================================================================
// Generic behavior
// ============================================================================

#[test]
fn test_load_same_identity_is_idempotent() {
    let mut pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 4);
    let calls = Cell::new(0);

    let a = pool.load("a.png", || { calls.set(calls.get() + 1); Ok(1) }).unwrap();
    let b = pool.load("a.png", || { calls.set(calls.get() + 1); Ok(2) }).unwrap();

    assert_eq!(a, b);
    assert_eq!(pool.len(), 1);
    assert_eq!(calls.get(), 1);
    assert_eq!(pool.resource(a), Some(&1));
}

#[test]
fn test_load_past_capacity_fails_and_keeps_count() {
    let mut pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 2);
    pool.load("a", || Ok(1)).unwrap();
    pool.load("b", || Ok(2)).unwrap();

    let result = pool.load("c", || Ok(3));

    match result {
        Err(Error::PoolExhausted { pool: name, capacity }) => {
            assert_eq!(name, "numbers");
            assert_eq!(capacity, 2);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(pool.len(), 2);
    assert!(pool.get("c").is_none());
}

#[test]
fn test_existing_identity_still_resolves_when_full() {
    let mut pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 1);
    let a = pool.load("a", || Ok(1)).unwrap();
    assert_eq!(pool.load("a", || Ok(9)).unwrap(), a);
}

#[test]
fn test_failed_creation_leaves_pool_unchanged() {
    let mut pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 2);
    let result = pool.load("a", || Err(Error::AssetMissing("a".to_string())));

    assert!(result.is_err());
    assert!(pool.is_empty());
    assert!(!pool.contains("a"));
}

#[test]
fn test_get_missing_returns_none() {
    let pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 2);
    assert!(pool.get("nope").is_none());
    assert!(pool.find("nope").is_none());
}

#[test]
fn test_clear_invalidates_keys() {
    let mut pool: ResourcePool<TextureKey, u32> = ResourcePool::new("numbers", 2);
    let a = pool.load("a", || Ok(1)).unwrap();

    pool.clear();

    assert!(pool.resource(a).is_none());
    assert!(pool.get("a").is_none());
    assert_eq!(pool.len(), 0);
    assert_eq!(pool.capacity(), 2);
}

// ============================================================================
// Texture / shader pools
// ============================================================================

#[test]
fn test_texture_pool_dedupes_paths_on_the_gpu() {
    let mock = MockGraphicsDevice::new();
    let mut pool = TexturePool::new("textures", 100);
    let path = Path::new("missing/brick.png");

    let a = pool.load_file(&mock, path).unwrap();
    let b = pool.load_file(&mock, path).unwrap();

    assert_eq!(a, b);
    assert_eq!(pool.len(), 1);
    assert_eq!(mock.live_textures(), 1);
    assert!(pool.resource(a).unwrap().is_blank());
}

#[test]
fn test_texture_pool_clear_releases_gpu_textures() {
    let mock = MockGraphicsDevice::new();
    let mut pool = TexturePool::new("textures", 100);
    pool.load_file(&mock, Path::new("a.png")).unwrap();
    pool.load_file(&mock, Path::new("b.png")).unwrap();
    assert_eq!(mock.live_textures(), 2);

    pool.clear();
    assert_eq!(mock.live_textures(), 0);
}

#[test]
fn test_shader_pool_dedupes_labels() {
    let mock = MockGraphicsDevice::new();
    let device: Rc<dyn GraphicsDevice> = Rc::new(mock.clone());
    let mut pool = ShaderPool::new("shaders", 10);

    let a = pool.load_sources(&device, "lit", "v", "f", true).unwrap();
    let b = pool.load_sources(&device, "lit", "other", "other", true).unwrap();

    assert_eq!(a, b);
    assert_eq!(mock.live_programs(), 1);
    assert_eq!(pool.resource(a).unwrap().label(), "lit");
}
