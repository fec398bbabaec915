/// Program trait and shader source descriptor

/// GLSL sources for one program
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    /// Name used in logs and errors
    pub label: &'a str,
    /// Vertex stage source
    pub vertex_source: &'a str,
    /// Fragment stage source
    pub fragment_source: &'a str,
}

/// Linked GPU program, released when dropped
pub trait Program {
    /// Label the program was created with
    fn label(&self) -> &str;

    /// Backend object name
    fn raw_id(&self) -> u32;
}
