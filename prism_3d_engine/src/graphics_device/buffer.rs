/// Buffer trait and buffer descriptor

use crate::error::Result;

/// Buffer usage, selects the GL binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Interleaved per-vertex attributes (GL_ARRAY_BUFFER)
    Vertex,
    /// `u32` triangle indices (GL_ELEMENT_ARRAY_BUFFER)
    Index,
    /// Per-instance mat4 transforms, rewritten every frame (GL_ARRAY_BUFFER, dynamic)
    Instance,
}

/// Descriptor for creating a buffer
///
/// `size` is the allocation in bytes. When `data` is present it is uploaded at
/// offset 0 and must not be longer than `size`.
#[derive(Debug, Clone)]
pub struct BufferDesc<'a> {
    /// Buffer usage
    pub usage: BufferUsage,
    /// Size in bytes
    pub size: u64,
    /// Initial contents
    pub data: Option<&'a [u8]>,
}

impl<'a> BufferDesc<'a> {
    /// Buffer sized to and filled with `data`
    pub fn with_data(usage: BufferUsage, data: &'a [u8]) -> Self {
        Self { usage, size: data.len() as u64, data: Some(data) }
    }

    /// Uninitialised buffer of `size` bytes
    pub fn zeroed(usage: BufferUsage, size: u64) -> Self {
        Self { usage, size, data: None }
    }
}

/// GPU buffer, released when dropped
pub trait Buffer {
    /// Usage the buffer was created with
    fn usage(&self) -> BufferUsage;

    /// Size in bytes
    fn size(&self) -> u64;

    /// Write `data` at byte `offset`
    ///
    /// Fails with `InvalidResource` when the write would run past the end.
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Backend object name
    fn raw_id(&self) -> u32;
}
