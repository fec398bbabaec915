/// Vertex array resource
///
/// Owns the vertex array object and its buffers: interleaved vertex data, an
/// optional `u32` index buffer and an optional per-instance mat4 buffer.
/// Construction is all-or-nothing; GPU objects are released by `destroy()` or
/// on drop, whichever comes first.

use std::cell::Cell;
use std::rc::Rc;
use glam::Mat4;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, VertexArrayObject, VertexAttribute,
    MAX_VERTEX_ATTRIBUTES,
};
use crate::resource::vertex_layout::VertexLayout;
use crate::{engine_debug, engine_error, engine_warn};

/// Bytes of one per-instance transform
pub const INSTANCE_STRIDE: u32 = std::mem::size_of::<Mat4>() as u32;

/// Attribute slots taken by one per-instance transform (four vec4 columns)
pub const INSTANCE_ATTRIBUTE_SLOTS: u32 = 4;

/// Descriptor for creating a vertex array
#[derive(Debug, Clone)]
pub struct VertexArrayDesc<'a> {
    /// Interleaved vertex floats
    pub vertices: &'a [f32],
    /// Triangle indices; `None` draws non-indexed
    pub indices: Option<&'a [u32]>,
    /// Attribute layout, copied into the vertex array
    pub layout: VertexLayout,
}

pub struct VertexArray {
    device: Rc<dyn GraphicsDevice>,
    layout: VertexLayout,
    vao: Option<Box<dyn VertexArrayObject>>,
    vertex_buffer: Option<Box<dyn Buffer>>,
    index_buffer: Option<Box<dyn Buffer>>,
    instance_buffer: Option<Box<dyn Buffer>>,
    vertex_count: u32,
    index_count: u32,
    max_instances: u32,
    instance_count: Cell<u32>,
}

impl VertexArray {
    /// Upload vertex (and index) data and configure one attribute slot per layout entry
    pub fn new(device: Rc<dyn GraphicsDevice>, desc: VertexArrayDesc) -> Result<Self> {
        let stride_floats = desc.layout.stride_floats() as usize;
        if desc.vertices.len() < stride_floats {
            engine_error!(
                "prism3d::VertexArray",
                "Vertex data holds {} floats, less than one vertex of {} floats",
                desc.vertices.len(), stride_floats
            );
            return Err(Error::InvalidResource("vertex data is empty".to_string()));
        }
        if desc.vertices.len() % stride_floats != 0 {
            engine_warn!(
                "prism3d::VertexArray",
                "{} trailing floats ignored (stride {} floats)",
                desc.vertices.len() % stride_floats, stride_floats
            );
        }

        let vertex_count = (desc.vertices.len() / stride_floats) as u32;
        let vertex_bytes: &[u8] = bytemuck::cast_slice(desc.vertices);

        // Any `?` below drops whatever was already created
        let vao = device.create_vertex_array()?;
        let vertex_buffer = device.create_buffer(&BufferDesc::with_data(BufferUsage::Vertex, vertex_bytes))?;
        device.set_vertex_attributes(vao.as_ref(), vertex_buffer.as_ref(), &desc.layout.attributes());

        let (index_buffer, index_count) = match desc.indices {
            Some(indices) if !indices.is_empty() => {
                let index_bytes: &[u8] = bytemuck::cast_slice(indices);
                let buffer = device.create_buffer(&BufferDesc::with_data(BufferUsage::Index, index_bytes))?;
                device.set_index_buffer(vao.as_ref(), buffer.as_ref());
                (Some(buffer), indices.len() as u32)
            }
            _ => (None, 0),
        };

        engine_debug!(
            "prism3d::VertexArray",
            "Created vertex array: {} vertices, {} indices, layout {:?}",
            vertex_count, index_count, desc.layout.components()
        );

        Ok(Self {
            device,
            layout: desc.layout,
            vao: Some(vao),
            vertex_buffer: Some(vertex_buffer),
            index_buffer,
            instance_buffer: None,
            vertex_count,
            index_count,
            max_instances: 0,
            instance_count: Cell::new(0),
        })
    }

    // ===== ACCESSORS =====

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// 0 when non-indexed
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.vao.is_none()
    }

    /// Vertex array object to bind, `None` once destroyed
    pub fn vao(&self) -> Option<&dyn VertexArrayObject> {
        self.vao.as_deref()
    }

    pub fn vertex_buffer(&self) -> Option<&dyn Buffer> {
        self.vertex_buffer.as_deref()
    }

    pub fn index_buffer(&self) -> Option<&dyn Buffer> {
        self.index_buffer.as_deref()
    }

    pub fn instance_buffer(&self) -> Option<&dyn Buffer> {
        self.instance_buffer.as_deref()
    }

    // ===== INSTANCING =====

    pub fn is_instanced(&self) -> bool {
        self.instance_buffer.is_some()
    }

    /// Capacity of the instance buffer (0 without instancing)
    pub fn max_instances(&self) -> u32 {
        self.max_instances
    }

    /// Instances rendered by the next instanced draw
    pub fn instance_count(&self) -> u32 {
        self.instance_count.get()
    }

    /// Add a per-instance transform buffer for `max_instances` instances
    ///
    /// The matrix columns occupy the four slots right after the base layout,
    /// advancing once per instance.
    pub fn enable_instancing(&mut self, max_instances: u32) -> Result<()> {
        let Some(vao) = self.vao.as_deref() else {
            return Err(Error::InvalidResource("vertex array is destroyed".to_string()));
        };
        if self.instance_buffer.is_some() {
            return Err(Error::InvalidResource("instancing already enabled".to_string()));
        }
        if max_instances == 0 {
            return Err(Error::InvalidResource("instance capacity must be positive".to_string()));
        }
        let base = self.layout.len() as u32;
        if base + INSTANCE_ATTRIBUTE_SLOTS > MAX_VERTEX_ATTRIBUTES {
            engine_error!(
                "prism3d::VertexArray",
                "Instancing needs slots {}..{}, only {} available",
                base, base + INSTANCE_ATTRIBUTE_SLOTS, MAX_VERTEX_ATTRIBUTES
            );
            return Err(Error::InvalidResource("not enough attribute slots for instancing".to_string()));
        }

        let size = max_instances as u64 * INSTANCE_STRIDE as u64;
        let buffer = self.device.create_buffer(&BufferDesc::zeroed(BufferUsage::Instance, size))?;

        let column_bytes = INSTANCE_STRIDE / INSTANCE_ATTRIBUTE_SLOTS;
        let attributes: Vec<VertexAttribute> = (0..INSTANCE_ATTRIBUTE_SLOTS)
            .map(|column| VertexAttribute {
                location: base + column,
                components: 4,
                stride: INSTANCE_STRIDE,
                offset: column * column_bytes,
                divisor: 1,
            })
            .collect();
        self.device.set_vertex_attributes(vao, buffer.as_ref(), &attributes);

        self.instance_buffer = Some(buffer);
        self.max_instances = max_instances;
        self.instance_count.set(0);
        Ok(())
    }

    /// Write the transform of instance `index`
    ///
    /// Returns false (nothing written) when instancing is off or
    /// `index >= max_instances()`.
    pub fn set_instance_transform(&self, index: u32, transform: &Mat4) -> bool {
        let Some(buffer) = self.instance_buffer.as_deref() else {
            engine_warn!("prism3d::VertexArray", "Instance transform set without instancing enabled");
            return false;
        };
        if index >= self.max_instances {
            engine_warn!(
                "prism3d::VertexArray",
                "Instance index {} out of range (capacity {})",
                index, self.max_instances
            );
            return false;
        }
        let offset = index as u64 * INSTANCE_STRIDE as u64;
        match buffer.update(offset, bytemuck::bytes_of(transform)) {
            Ok(()) => true,
            Err(e) => {
                engine_error!("prism3d::VertexArray", "Instance buffer write failed: {}", e);
                false
            }
        }
    }

    /// Set how many instances the next draw renders, clamped to capacity
    pub fn set_instance_count(&self, count: u32) {
        if count > self.max_instances {
            engine_warn!(
                "prism3d::VertexArray",
                "Instance count {} clamped to capacity {}",
                count, self.max_instances
            );
        }
        self.instance_count.set(count.min(self.max_instances));
    }

    // ===== LIFETIME =====

    /// Release every GPU object; a second call does nothing
    pub fn destroy(&mut self) {
        if self.vao.is_none() {
            return;
        }
        self.vao = None;
        self.vertex_buffer = None;
        self.index_buffer = None;
        self.instance_buffer = None;
        self.vertex_count = 0;
        self.index_count = 0;
        self.max_instances = 0;
        self.instance_count.set(0);
        engine_debug!("prism3d::VertexArray", "Vertex array destroyed");
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
