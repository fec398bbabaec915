use std::rc::Rc;
use glam::Vec3;
use crate::camera::Camera;
use crate::error::Error;
use crate::graphics_device::mock_graphics_device::{MockCommand, MockGraphicsDevice};
use crate::graphics_device::{ClearFlags, GraphicsDevice, Viewport};
use crate::renderer::{Renderer, RendererConfig, RendererStats};
use crate::resource::{Mesh, Shader, TexturePool, VertexArray, VertexArrayDesc, VertexLayout};
use crate::scene::{PointLight, Scene, StaticMesh};
use crate::target::RenderTarget;

fn setup() -> (MockGraphicsDevice, Rc<dyn GraphicsDevice>, Renderer) {
    let mock = MockGraphicsDevice::new();
    let device: Rc<dyn GraphicsDevice> = Rc::new(mock.clone());
    let renderer = Renderer::new(Rc::clone(&device), RendererConfig::default()).unwrap();
    (mock, device, renderer)
}

fn triangles(device: &Rc<dyn GraphicsDevice>, vertex_count: usize, indexed: bool) -> VertexArray {
    let vertices = vec![0.0f32; vertex_count * 4];
    let indices: Vec<u32> = (0..vertex_count as u32).collect();
    VertexArray::new(Rc::clone(device), VertexArrayDesc {
        vertices: &vertices,
        indices: indexed.then_some(indices.as_slice()),
        layout: VertexLayout::position2_uv(),
    })
    .unwrap()
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_new_rejects_invalid_config() {
    let mock = MockGraphicsDevice::new();
    let config = RendererConfig { viewport_width: 0, ..Default::default() };
    let result = Renderer::new(Rc::new(mock), config);
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
fn test_new_enables_depth_test() {
    let (mock, _device, _renderer) = setup();
    assert_eq!(mock.commands(), vec![MockCommand::SetDepthTest(true)]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_non_indexed_draw() {
    let (mock, device, renderer) = setup();
    let va = triangles(&device, 6, false);
    mock.clear_commands();

    renderer.draw(&va);

    assert_eq!(mock.draw_commands(), vec![MockCommand::Draw { first_vertex: 0, vertex_count: 6 }]);
    assert_eq!(renderer.stats(), RendererStats { draw_calls: 1, triangles: 2 });
}

#[test]
fn test_indexed_draw_binds_vao_first() {
    let (mock, device, renderer) = setup();
    let va = triangles(&device, 3, true);
    let vao = va.vao().unwrap().raw_id();
    mock.clear_commands();

    renderer.draw(&va);

    assert_eq!(mock.commands(), vec![
        MockCommand::BindVertexArray(Some(vao)),
        MockCommand::DrawIndexed { index_count: 3 },
    ]);
}

#[test]
fn test_destroyed_array_is_skipped() {
    let (mock, device, renderer) = setup();
    let mut va = triangles(&device, 3, false);
    va.destroy();
    mock.clear_commands();

    renderer.draw(&va);

    assert!(mock.draw_commands().is_empty());
    assert_eq!(renderer.stats().draw_calls, 0);
}

#[test]
fn test_instanced_draw_counts_instances() {
    let (mock, device, renderer) = setup();
    let mut va = triangles(&device, 3, true);
    va.enable_instancing(10).unwrap();
    va.set_instance_count(4);
    mock.clear_commands();

    renderer.draw_instanced(&va);

    assert_eq!(mock.draw_commands(), vec![MockCommand::DrawIndexedInstanced { index_count: 3, instance_count: 4 }]);
    assert_eq!(renderer.stats().triangles, 4);
}

#[test]
fn test_instanced_draw_requires_instancing() {
    let (mock, device, renderer) = setup();
    let va = triangles(&device, 3, false);
    mock.clear_commands();

    renderer.draw_instanced(&va);
    assert!(mock.draw_commands().is_empty());
}

#[test]
fn test_stats_accumulate_until_reset() {
    let (_mock, device, renderer) = setup();
    let va = triangles(&device, 3, false);
    renderer.draw(&va);
    renderer.draw(&va);
    assert_eq!(renderer.stats().draw_calls, 2);

    renderer.reset_stats();
    assert_eq!(renderer.stats(), RendererStats::default());
}

// ============================================================================
// Frame
// ============================================================================

#[test]
fn test_render_frame_sequence() {
    let (mock, device, renderer) = setup();
    let mut target = RenderTarget::new(Rc::clone(&device), 4);
    target.init(320, 200).unwrap();
    let shader = Shader::from_sources(Rc::clone(&device), "lit", "v", "f", true);
    let textures = TexturePool::new("textures", 4);
    let mut scene = Scene::new();
    scene.add(PointLight::default());
    let mesh = Mesh::new(Rc::clone(&device), &[0.0; 12], None, VertexLayout::position2_uv()).unwrap();
    scene.add(StaticMesh::new(vec![mesh]));
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

    let framebuffers: Vec<u32> = mock.commands().into_iter().filter_map(|c| match c {
        MockCommand::CreateFramebuffer { id, .. } => Some(id),
        _ => None,
    }).collect();
    let (multisample, resolve) = (framebuffers[0], framebuffers[1]);
    // Stats from before the frame must not leak into it
    renderer.draw(&triangles(&device, 30, false));
    mock.clear_commands();

    let output = renderer.render_frame(&target, &scene, &camera, &shader, &textures).unwrap();

    let commands = mock.commands();
    assert_eq!(commands[0], MockCommand::BindFramebuffer(Some(multisample)));
    assert_eq!(commands[1], MockCommand::SetViewport(Viewport::sized(320, 200)));
    assert_eq!(commands[2], MockCommand::SetDepthTest(true));
    assert_eq!(commands[3], MockCommand::Clear {
        color: renderer.config().clear_color,
        flags: ClearFlags::COLOR | ClearFlags::DEPTH | ClearFlags::STENCIL,
    });

    let draw = commands.iter().position(MockCommand::is_draw).unwrap();
    let blit = commands.iter().position(|c| *c == MockCommand::BlitFramebuffer { src: multisample, dst: resolve }).unwrap();
    let view = commands.iter().position(|c| matches!(c, MockCommand::SetUniform { name, .. } if name == "view")).unwrap();
    assert!(view < draw);
    assert!(draw < blit);
    assert_eq!(commands.last(), Some(&MockCommand::BindFramebuffer(None)));

    assert_eq!(output.viewport_texture, target.resolved_texture().unwrap());
    assert_eq!(output.stats, RendererStats { draw_calls: 1, triangles: 1 });
}

#[test]
fn test_render_frame_requires_ready_target() {
    let (mock, device, renderer) = setup();
    let target = RenderTarget::new(Rc::clone(&device), 4);
    let shader = Shader::from_sources(Rc::clone(&device), "lit", "v", "f", true);
    let textures = TexturePool::new("textures", 4);
    mock.clear_commands();

    let result = renderer.render_frame(&target, &Scene::new(), &Camera::default(), &shader, &textures);

    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert!(mock.commands().is_empty());
}
