/// Vertex layout descriptor
///
/// Ordered per-attribute component counts for interleaved `f32` vertex data,
/// e.g. `[3, 3, 2]` for position, normal, UV.

use crate::error::{Error, Result};
use crate::graphics_device::{VertexAttribute, MAX_VERTEX_ATTRIBUTES};
use crate::engine_error;

/// Size of one vertex component in bytes
pub const FLOAT_SIZE: u32 = std::mem::size_of::<f32>() as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    components: Vec<u32>,
}

impl VertexLayout {
    /// Layout from component counts, validated
    ///
    /// Rejects empty layouts, zero- or over-4-component entries and layouts
    /// with more entries than `MAX_VERTEX_ATTRIBUTES`.
    pub fn new(components: &[u32]) -> Result<Self> {
        let problem = if components.is_empty() {
            Some("vertex layout is empty".to_string())
        } else if components.len() as u32 > MAX_VERTEX_ATTRIBUTES {
            Some(format!(
                "vertex layout has {} attributes, maximum is {}",
                components.len(), MAX_VERTEX_ATTRIBUTES
            ))
        } else {
            components.iter().position(|&c| c == 0 || c > 4).map(|index| {
                format!(
                    "vertex attribute {} has {} components (expected 1..=4)",
                    index, components[index]
                )
            })
        };
        if let Some(message) = problem {
            engine_error!("prism3d::VertexArray", "Invalid layout {:?}: {}", components, message);
            return Err(Error::InvalidResource(message));
        }
        Ok(Self { components: components.to_vec() })
    }

    /// Position(3) + normal(3) + UV(2), the layout of imported meshes
    pub fn position_normal_uv() -> Self {
        Self { components: vec![3, 3, 2] }
    }

    /// Position(2) + UV(2), used by the fullscreen quad
    pub fn position2_uv() -> Self {
        Self { components: vec![2, 2] }
    }

    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Number of attribute slots
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Floats per vertex
    pub fn stride_floats(&self) -> u32 {
        self.components.iter().sum()
    }

    /// Bytes per vertex
    pub fn stride(&self) -> u32 {
        self.stride_floats() * FLOAT_SIZE
    }

    /// One attribute per entry at slots `0..len()`, interleaved offsets, divisor 0
    pub fn attributes(&self) -> Vec<VertexAttribute> {
        let stride = self.stride();
        let mut offset = 0;
        self.components
            .iter()
            .enumerate()
            .map(|(location, &components)| {
                let attribute = VertexAttribute {
                    location: location as u32,
                    components,
                    stride,
                    offset,
                    divisor: 0,
                };
                offset += components * FLOAT_SIZE;
                attribute
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
