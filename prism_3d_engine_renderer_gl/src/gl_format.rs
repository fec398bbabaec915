/// Engine enum ↔ GL enum conversions
///
/// Pure functions, testable without a context.

use prism_3d_engine::prism3d::device::{BufferUsage, ClearFlags, TextureFormat};
use prism_3d_engine::prism3d::log::LogSeverity;

/// Texture storage for a pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GlTextureFormat {
    pub internal_format: u32,
    pub format: u32,
    pub ty: u32,
}

pub(crate) fn texture_format_to_gl(format: TextureFormat) -> GlTextureFormat {
    match format {
        TextureFormat::R8 => GlTextureFormat { internal_format: glow::R8, format: glow::RED, ty: glow::UNSIGNED_BYTE },
        TextureFormat::RG8 => GlTextureFormat { internal_format: glow::RG8, format: glow::RG, ty: glow::UNSIGNED_BYTE },
        TextureFormat::RGB8 => GlTextureFormat { internal_format: glow::RGB8, format: glow::RGB, ty: glow::UNSIGNED_BYTE },
        TextureFormat::RGBA8 => GlTextureFormat { internal_format: glow::RGBA8, format: glow::RGBA, ty: glow::UNSIGNED_BYTE },
        TextureFormat::Depth24Stencil8 => GlTextureFormat {
            internal_format: glow::DEPTH24_STENCIL8,
            format: glow::DEPTH_STENCIL,
            ty: glow::UNSIGNED_INT_24_8,
        },
    }
}

/// Rows of 1, 2 and 3 byte pixels are not 4-byte aligned in general
pub(crate) fn unpack_alignment(format: TextureFormat) -> i32 {
    if format.bytes_per_pixel() % 4 == 0 { 4 } else { 1 }
}

/// Usage hint: instance data is rewritten every frame
pub(crate) fn buffer_usage_hint(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::Vertex | BufferUsage::Index => glow::STATIC_DRAW,
        BufferUsage::Instance => glow::DYNAMIC_DRAW,
    }
}

pub(crate) fn clear_mask(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::STENCIL) {
        mask |= glow::STENCIL_BUFFER_BIT;
    }
    mask
}

/// Readable name of a `glCheckFramebufferStatus` result
pub(crate) fn framebuffer_status_name(status: u32) -> &'static str {
    match status {
        glow::FRAMEBUFFER_COMPLETE => "complete",
        glow::FRAMEBUFFER_UNDEFINED => "undefined",
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "incomplete attachment",
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => "missing attachment",
        glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "incomplete draw buffer",
        glow::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "incomplete read buffer",
        glow::FRAMEBUFFER_UNSUPPORTED => "unsupported",
        glow::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "incomplete multisample",
        _ => "unknown status",
    }
}

/// Engine severity of a `GL_DEBUG_SEVERITY_*` value
#[cfg_attr(not(feature = "gl-debug"), allow(dead_code))]
pub(crate) fn debug_severity_to_log(severity: u32) -> LogSeverity {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => LogSeverity::Error,
        glow::DEBUG_SEVERITY_MEDIUM => LogSeverity::Warn,
        glow::DEBUG_SEVERITY_LOW => LogSeverity::Info,
        _ => LogSeverity::Trace,
    }
}

/// Short label of a `GL_DEBUG_TYPE_*` value
#[cfg_attr(not(feature = "gl-debug"), allow(dead_code))]
pub(crate) fn debug_type_name(ty: u32) -> &'static str {
    match ty {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "General",
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
