/// Vertex array object trait and attribute description

/// Highest number of vertex attribute slots a vertex array may use
pub const MAX_VERTEX_ATTRIBUTES: u32 = 16;

/// One float attribute slot sourced from a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute slot (`layout(location = N)`)
    pub location: u32,
    /// Number of f32 components (1..=4)
    pub components: u32,
    /// Distance between consecutive elements, in bytes
    pub stride: u32,
    /// Offset of the first component inside an element, in bytes
    pub offset: u32,
    /// 0 = per vertex, 1 = advance once per instance
    pub divisor: u32,
}

/// GPU vertex array object, released when dropped
///
/// Holds attribute bindings only; the buffers it references are owned elsewhere.
pub trait VertexArrayObject {
    /// Backend object name
    fn raw_id(&self) -> u32;
}
