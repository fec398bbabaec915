/// Mock graphics device for unit tests (no GPU required)
///
/// Every call is appended to a shared command log. Objects created by the mock
/// decrement live counters when dropped, so tests can check release behavior.
/// Program and framebuffer creation can be made to fail on demand.

use std::cell::RefCell;
use std::rc::Rc;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, Framebuffer, FramebufferDesc,
    Program, ProgramDesc, Texture, TextureDesc, TextureFormat, VertexArrayObject,
    VertexAttribute, Viewport, ClearFlags, UniformLocation, UniformValue,
};
use crate::error::{Error, Result};

// ============================================================================
// Command log
// ============================================================================

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    CreateBuffer { id: u32, usage: BufferUsage, size: u64 },
    UpdateBuffer { id: u32, offset: u64, data: Vec<u8> },
    CreateVertexArray { id: u32 },
    SetVertexAttributes { vao: u32, buffer: u32, attributes: Vec<VertexAttribute> },
    SetIndexBuffer { vao: u32, buffer: u32 },
    CreateTexture { id: u32, width: u32, height: u32, format: TextureFormat, samples: u32, mipmaps: bool },
    CreateProgram { id: u32, label: String },
    CreateFramebuffer { id: u32, width: u32, height: u32, samples: u32 },
    UseProgram(Option<u32>),
    SetUniform { name: String, value: UniformValue },
    BindTexture { unit: u32, texture: Option<u32> },
    BindVertexArray(Option<u32>),
    BindFramebuffer(Option<u32>),
    BlitFramebuffer { src: u32, dst: u32 },
    SetViewport(Viewport),
    SetDepthTest(bool),
    Clear { color: [f32; 4], flags: ClearFlags },
    Draw { first_vertex: u32, vertex_count: u32 },
    DrawIndexed { index_count: u32 },
    DrawInstanced { vertex_count: u32, instance_count: u32 },
    DrawIndexedInstanced { index_count: u32, instance_count: u32 },
}

impl MockCommand {
    /// True for the four draw variants
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            MockCommand::Draw { .. }
                | MockCommand::DrawIndexed { .. }
                | MockCommand::DrawInstanced { .. }
                | MockCommand::DrawIndexedInstanced { .. }
        )
    }
}

#[derive(Default)]
struct MockState {
    commands: Vec<MockCommand>,
    next_id: u32,
    live_buffers: usize,
    live_vertex_arrays: usize,
    live_textures: usize,
    live_programs: usize,
    live_framebuffers: usize,
    uniform_names: FxHashMap<u32, String>,
    uniform_slots: FxHashMap<(u32, String), u32>,
    declared_uniforms: Option<FxHashSet<String>>,
    uniform_lookups: usize,
    program_failure: Option<String>,
    framebuffer_successes_left: Option<usize>,
}

impl MockState {
    fn allocate_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

type SharedState = Rc<RefCell<MockState>>;

// ============================================================================
// Mock objects
// ============================================================================

pub struct MockBuffer {
    id: u32,
    usage: BufferUsage,
    size: u64,
    state: SharedState,
}

impl Buffer for MockBuffer {
    fn usage(&self) -> BufferUsage {
        self.usage
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            return Err(Error::InvalidResource(format!(
                "write of {} bytes at {} exceeds buffer size {}",
                data.len(), offset, self.size
            )));
        }
        self.state.borrow_mut().commands.push(MockCommand::UpdateBuffer {
            id: self.id,
            offset,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn raw_id(&self) -> u32 {
        self.id
    }
}

impl Drop for MockBuffer {
    fn drop(&mut self) {
        self.state.borrow_mut().live_buffers -= 1;
    }
}

pub struct MockVertexArrayObject {
    id: u32,
    state: SharedState,
}

impl VertexArrayObject for MockVertexArrayObject {
    fn raw_id(&self) -> u32 {
        self.id
    }
}

impl Drop for MockVertexArrayObject {
    fn drop(&mut self) {
        self.state.borrow_mut().live_vertex_arrays -= 1;
    }
}

pub struct MockTexture {
    id: u32,
    width: u32,
    height: u32,
    format: TextureFormat,
    samples: u32,
    state: SharedState,
}

impl Texture for MockTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn samples(&self) -> u32 {
        self.samples
    }

    fn raw_id(&self) -> u32 {
        self.id
    }
}

impl Drop for MockTexture {
    fn drop(&mut self) {
        self.state.borrow_mut().live_textures -= 1;
    }
}

pub struct MockProgram {
    id: u32,
    label: String,
    state: SharedState,
}

impl Program for MockProgram {
    fn label(&self) -> &str {
        &self.label
    }

    fn raw_id(&self) -> u32 {
        self.id
    }
}

impl Drop for MockProgram {
    fn drop(&mut self) {
        self.state.borrow_mut().live_programs -= 1;
    }
}

pub struct MockFramebuffer {
    id: u32,
    width: u32,
    height: u32,
    samples: u32,
    color: MockTexture,
    state: SharedState,
}

impl Framebuffer for MockFramebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn samples(&self) -> u32 {
        self.samples
    }

    fn color_texture(&self) -> &dyn Texture {
        &self.color
    }

    fn raw_id(&self) -> u32 {
        self.id
    }
}

impl Drop for MockFramebuffer {
    fn drop(&mut self) {
        self.state.borrow_mut().live_framebuffers -= 1;
    }
}

// ============================================================================
// Mock device
// ============================================================================

/// Recording device; clones share one command log
#[derive(Clone, Default)]
pub struct MockGraphicsDevice {
    state: SharedState,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, command: MockCommand) {
        self.state.borrow_mut().commands.push(command);
    }

    // ===== INSPECTION =====

    pub fn commands(&self) -> Vec<MockCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    pub fn draw_commands(&self) -> Vec<MockCommand> {
        self.state.borrow().commands.iter().filter(|c| c.is_draw()).cloned().collect()
    }

    /// Every value uploaded to `name`, in order
    pub fn uniform_values(&self, name: &str) -> Vec<UniformValue> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                MockCommand::SetUniform { name: n, value } if n == name => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn last_uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniform_values(name).pop()
    }

    /// Names of all uploaded uniforms, in upload order
    pub fn uniform_upload_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                MockCommand::SetUniform { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// `(offset, data)` of every write into buffer `id`
    pub fn buffer_writes(&self, id: u32) -> Vec<(u64, Vec<u8>)> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                MockCommand::UpdateBuffer { id: i, offset, data } if *i == id => {
                    Some((*offset, data.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().live_buffers
    }

    pub fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().live_vertex_arrays
    }

    pub fn live_textures(&self) -> usize {
        self.state.borrow().live_textures
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs
    }

    pub fn live_framebuffers(&self) -> usize {
        self.state.borrow().live_framebuffers
    }

    /// Number of `uniform_location` calls made so far
    pub fn uniform_lookups(&self) -> usize {
        self.state.borrow().uniform_lookups
    }

    // ===== CONFIGURATION =====

    /// Only these names resolve to a location; others return `None`
    pub fn declare_uniforms(&self, names: &[&str]) {
        self.state.borrow_mut().declared_uniforms =
            Some(names.iter().map(|n| n.to_string()).collect());
    }

    /// Make every following `create_program` fail with `log`
    pub fn fail_programs(&self, log: &str) {
        self.state.borrow_mut().program_failure = Some(log.to_string());
    }

    /// Allow `successes` more framebuffers, then report incompleteness
    pub fn fail_framebuffers_after(&self, successes: usize) {
        self.state.borrow_mut().framebuffer_successes_left = Some(successes);
    }

    /// Remove injected failures
    pub fn clear_failures(&self) {
        let mut state = self.state.borrow_mut();
        state.program_failure = None;
        state.framebuffer_successes_left = None;
    }

    fn new_texture(&self, width: u32, height: u32, format: TextureFormat, samples: u32, mipmaps: bool) -> MockTexture {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        state.live_textures += 1;
        state.commands.push(MockCommand::CreateTexture { id, width, height, format, samples, mipmaps });
        MockTexture { id, width, height, format, samples, state: Rc::clone(&self.state) }
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&self, desc: &BufferDesc) -> Result<Box<dyn Buffer>> {
        if let Some(data) = desc.data {
            if data.len() as u64 > desc.size {
                return Err(Error::InvalidResource("initial data larger than buffer".to_string()));
            }
        }
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate_id();
            state.live_buffers += 1;
            state.commands.push(MockCommand::CreateBuffer { id, usage: desc.usage, size: desc.size });
            id
        };
        Ok(Box::new(MockBuffer {
            id,
            usage: desc.usage,
            size: desc.size,
            state: Rc::clone(&self.state),
        }))
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArrayObject>> {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.allocate_id();
            state.live_vertex_arrays += 1;
            state.commands.push(MockCommand::CreateVertexArray { id });
            id
        };
        Ok(Box::new(MockVertexArrayObject { id, state: Rc::clone(&self.state) }))
    }

    fn set_vertex_attributes(
        &self,
        vao: &dyn VertexArrayObject,
        buffer: &dyn Buffer,
        attributes: &[VertexAttribute],
    ) {
        self.record(MockCommand::SetVertexAttributes {
            vao: vao.raw_id(),
            buffer: buffer.raw_id(),
            attributes: attributes.to_vec(),
        });
    }

    fn set_index_buffer(&self, vao: &dyn VertexArrayObject, buffer: &dyn Buffer) {
        self.record(MockCommand::SetIndexBuffer { vao: vao.raw_id(), buffer: buffer.raw_id() });
    }

    fn create_texture(&self, desc: &TextureDesc) -> Result<Box<dyn Texture>> {
        if let Some(data) = desc.data {
            if data.len() != desc.expected_len() {
                return Err(Error::InvalidResource(format!(
                    "texture data is {} bytes, expected {}",
                    data.len(), desc.expected_len()
                )));
            }
        }
        Ok(Box::new(self.new_texture(
            desc.width,
            desc.height,
            desc.format,
            desc.samples,
            desc.generate_mipmaps,
        )))
    }

    fn create_program(&self, desc: &ProgramDesc) -> Result<Box<dyn Program>> {
        let mut state = self.state.borrow_mut();
        if let Some(log) = &state.program_failure {
            return Err(Error::ShaderCompilation {
                label: desc.label.to_string(),
                log: log.clone(),
            });
        }
        let id = state.allocate_id();
        state.live_programs += 1;
        state.commands.push(MockCommand::CreateProgram { id, label: desc.label.to_string() });
        Ok(Box::new(MockProgram {
            id,
            label: desc.label.to_string(),
            state: Rc::clone(&self.state),
        }))
    }

    fn create_framebuffer(&self, desc: &FramebufferDesc) -> Result<Box<dyn Framebuffer>> {
        {
            let mut state = self.state.borrow_mut();
            if let Some(left) = state.framebuffer_successes_left.as_mut() {
                if *left == 0 {
                    return Err(Error::IncompleteFramebuffer(desc.label.to_string()));
                }
                *left -= 1;
            }
        }
        let color = self.new_texture(desc.width, desc.height, TextureFormat::RGBA8, desc.samples, false);
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        state.live_framebuffers += 1;
        state.commands.push(MockCommand::CreateFramebuffer {
            id,
            width: desc.width,
            height: desc.height,
            samples: desc.samples,
        });
        Ok(Box::new(MockFramebuffer {
            id,
            width: desc.width,
            height: desc.height,
            samples: desc.samples,
            color,
            state: Rc::clone(&self.state),
        }))
    }

    fn use_program(&self, program: Option<&dyn Program>) {
        self.record(MockCommand::UseProgram(program.map(|p| p.raw_id())));
    }

    fn uniform_location(&self, program: &dyn Program, name: &str) -> Option<UniformLocation> {
        let mut state = self.state.borrow_mut();
        state.uniform_lookups += 1;
        if let Some(declared) = &state.declared_uniforms {
            if !declared.contains(name) {
                return None;
            }
        }
        let key = (program.raw_id(), name.to_string());
        if let Some(slot) = state.uniform_slots.get(&key) {
            return Some(UniformLocation(*slot));
        }
        let slot = state.allocate_id();
        state.uniform_slots.insert(key, slot);
        state.uniform_names.insert(slot, name.to_string());
        Some(UniformLocation(slot))
    }

    fn set_uniform(&self, location: UniformLocation, value: &UniformValue) {
        let mut state = self.state.borrow_mut();
        let name = state
            .uniform_names
            .get(&location.0)
            .cloned()
            .unwrap_or_else(|| format!("<location {}>", location.0));
        state.commands.push(MockCommand::SetUniform { name, value: *value });
    }

    fn bind_texture(&self, unit: u32, texture: Option<&dyn Texture>) {
        self.record(MockCommand::BindTexture { unit, texture: texture.map(|t| t.raw_id()) });
    }

    fn bind_vertex_array(&self, vao: Option<&dyn VertexArrayObject>) {
        self.record(MockCommand::BindVertexArray(vao.map(|v| v.raw_id())));
    }

    fn bind_framebuffer(&self, framebuffer: Option<&dyn Framebuffer>) {
        self.record(MockCommand::BindFramebuffer(framebuffer.map(|f| f.raw_id())));
    }

    fn blit_framebuffer(&self, src: &dyn Framebuffer, dst: &dyn Framebuffer) {
        self.record(MockCommand::BlitFramebuffer { src: src.raw_id(), dst: dst.raw_id() });
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.record(MockCommand::SetViewport(viewport));
    }

    fn set_depth_test(&self, enabled: bool) {
        self.record(MockCommand::SetDepthTest(enabled));
    }

    fn clear(&self, color: [f32; 4], flags: ClearFlags) {
        self.record(MockCommand::Clear { color, flags });
    }

    fn draw(&self, first_vertex: u32, vertex_count: u32) {
        self.record(MockCommand::Draw { first_vertex, vertex_count });
    }

    fn draw_indexed(&self, index_count: u32) {
        self.record(MockCommand::DrawIndexed { index_count });
    }

    fn draw_instanced(&self, vertex_count: u32, instance_count: u32) {
        self.record(MockCommand::DrawInstanced { vertex_count, instance_count });
    }

    fn draw_indexed_instanced(&self, index_count: u32, instance_count: u32) {
        self.record(MockCommand::DrawIndexedInstanced { index_count, instance_count });
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
