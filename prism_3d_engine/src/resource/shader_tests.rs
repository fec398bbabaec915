use std::rc::Rc;
use glam::{Mat4, Vec3};
use crate::graphics_device::mock_graphics_device::{MockCommand, MockGraphicsDevice};
use crate::graphics_device::{GraphicsDevice, UniformValue};
use crate::resource::shader::Shader;

const VS: &str = "#version 330 core\nvoid main() {}";
const FS: &str = "#version 330 core\nvoid main() {}";

fn setup() -> (MockGraphicsDevice, Rc<dyn GraphicsDevice>) {
    let mock = MockGraphicsDevice::new();
    let device: Rc<dyn GraphicsDevice> = Rc::new(mock.clone());
    (mock, device)
}

#[test]
fn test_valid_shader_uploads_typed_values() {
    let (mock, device) = setup();
    let shader = Shader::from_sources(device, "lit", VS, FS, true);
    assert!(shader.is_valid());

    shader.use_program();
    shader.set_vec3("viewPos", Vec3::new(1.0, 2.0, 3.0));
    shader.set_int("NumPointLights", 2);
    shader.set_mat4("model", &Mat4::IDENTITY);
    shader.set_bool("useSpecular", true);

    assert_eq!(mock.last_uniform("viewPos"), Some(UniformValue::Vec3(Vec3::new(1.0, 2.0, 3.0))));
    assert_eq!(mock.last_uniform("NumPointLights"), Some(UniformValue::Int(2)));
    assert_eq!(mock.last_uniform("model"), Some(UniformValue::Mat4(Mat4::IDENTITY)));
    assert_eq!(mock.last_uniform("useSpecular"), Some(UniformValue::Bool(true)));
    assert!(matches!(mock.commands()[1], MockCommand::UseProgram(Some(_))));
}

#[test]
fn test_location_cache_avoids_repeat_lookups() {
    let (mock, device) = setup();
    let shader = Shader::from_sources(device, "lit", VS, FS, true);

    for _ in 0..5 {
        shader.set_float("material.shininess", 32.0);
    }
    assert_eq!(mock.uniform_lookups(), 1);
    assert_eq!(mock.uniform_values("material.shininess").len(), 5);
}

#[test]
fn test_uncached_shader_looks_up_every_call() {
    let (mock, device) = setup();
    let shader = Shader::from_sources(device, "lit", VS, FS, false);

    for _ in 0..3 {
        shader.set_float("material.shininess", 32.0);
    }
    assert_eq!(mock.uniform_lookups(), 3);
}

#[test]
fn test_missing_uniform_is_silently_skipped_and_cached() {
    let (mock, device) = setup();
    mock.declare_uniforms(&["model"]);
    let shader = Shader::from_sources(device, "lit", VS, FS, true);

    shader.set_vec3("PointLights[7].position", Vec3::ZERO);
    shader.set_vec3("PointLights[7].position", Vec3::ZERO);

    assert!(mock.uniform_values("PointLights[7].position").is_empty());
    assert_eq!(mock.uniform_lookups(), 1);
}

#[test]
fn test_compile_failure_keeps_invalid_shader() {
    let (mock, device) = setup();
    mock.fail_programs("0:3(1): error: syntax error, unexpected '}'");

    let shader = Shader::from_sources(device, "broken", VS, FS, true);
    assert!(!shader.is_valid());
    assert_eq!(shader.label(), "broken");

    shader.use_program();
    shader.set_float("x", 1.0);
    assert!(mock.commands().iter().all(|c| !matches!(c, MockCommand::UseProgram(_) | MockCommand::SetUniform { .. })));
    assert_eq!(mock.uniform_lookups(), 0);
}

#[test]
fn test_from_files_reports_missing_source() {
    let (_mock, device) = setup();
    let result = Shader::from_files(
        device,
        "lit",
        std::path::Path::new("no/such/shader.vert"),
        std::path::Path::new("no/such/shader.frag"),
        true,
    );
    assert!(matches!(result, Err(crate::error::Error::AssetMissing(_))));
}

#[test]
fn test_from_files_reads_both_stages() {
    let (mock, device) = setup();
    let dir = std::env::temp_dir();
    let vs = dir.join(format!("prism3d_vs_{}.vert", std::process::id()));
    let fs = dir.join(format!("prism3d_fs_{}.frag", std::process::id()));
    std::fs::write(&vs, VS).unwrap();
    std::fs::write(&fs, FS).unwrap();

    let shader = Shader::from_files(device, "lit", &vs, &fs, true).unwrap();
    assert!(shader.is_valid());
    assert_eq!(mock.live_programs(), 1);

    let _ = std::fs::remove_file(vs);
    let _ = std::fs::remove_file(fs);
}
