/// GL program object and GLSL compilation

use std::rc::Rc;
use glow::HasContext;
use prism_3d_engine::prism3d::device::{Program, ProgramDesc};
use prism_3d_engine::prism3d::{Error, Result};
use prism_3d_engine::{engine_bail, engine_err};

pub struct GlProgram {
    gl: Rc<glow::Context>,
    pub(crate) program: glow::Program,
    label: String,
}

impl Program for GlProgram {
    fn label(&self) -> &str {
        &self.label
    }

    fn raw_id(&self) -> u32 {
        self.program.0.get()
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}

fn compile_stage(gl: &glow::Context, label: &str, stage: u32, source: &str) -> Result<glow::Shader> {
    let stage_name = if stage == glow::VERTEX_SHADER { "vertex" } else { "fragment" };
    unsafe {
        let shader = gl.create_shader(stage).map_err(|e| engine_err!("prism3d::gl", "glCreateShader ({}) failed: {}", stage_name, e))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(Error::ShaderCompilation {
                label: format!("{} ({})", label, stage_name),
                log,
            });
        }
        Ok(shader)
    }
}

/// Compile both stages and link them; stage objects are deleted either way
pub(crate) fn link_program(gl: &Rc<glow::Context>, desc: &ProgramDesc) -> Result<GlProgram> {
    let vertex = compile_stage(gl, desc.label, glow::VERTEX_SHADER, desc.vertex_source)?;
    let fragment = match compile_stage(gl, desc.label, glow::FRAGMENT_SHADER, desc.fragment_source) {
        Ok(fragment) => fragment,
        Err(e) => {
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };

    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                engine_bail!("prism3d::gl", "glCreateProgram failed: {}", e);
            }
        };
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(Error::ShaderCompilation { label: format!("{} (link)", desc.label), log });
        }

        Ok(GlProgram { gl: Rc::clone(gl), program, label: desc.label.to_string() })
    }
}
