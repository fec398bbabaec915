/// GL debug output (feature `gl-debug`)
///
/// Installs a `GL_KHR_debug` callback that forwards driver messages to the
/// engine logger and counts them per severity.

use std::sync::atomic::{AtomicU32, Ordering};
use glow::HasContext;
use prism_3d_engine::prism3d::log::LogSeverity;
use prism_3d_engine::prism3d::Engine;
use prism_3d_engine::{engine_info, engine_warn};
use crate::gl_format::{debug_severity_to_log, debug_type_name};

/// Messages received since start-up (or the last reset), per engine severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugStats {
    pub errors: u32,
    pub warnings: u32,
    pub info: u32,
    pub verbose: u32,
}

static DEBUG_STATS: DebugStatsTracker = DebugStatsTracker::new();

struct DebugStatsTracker {
    errors: AtomicU32,
    warnings: AtomicU32,
    info: AtomicU32,
    verbose: AtomicU32,
}

impl DebugStatsTracker {
    const fn new() -> Self {
        Self {
            errors: AtomicU32::new(0),
            warnings: AtomicU32::new(0),
            info: AtomicU32::new(0),
            verbose: AtomicU32::new(0),
        }
    }

    fn record(&self, severity: LogSeverity) {
        let counter = match severity {
            LogSeverity::Error => &self.errors,
            LogSeverity::Warn => &self.warnings,
            LogSeverity::Info => &self.info,
            LogSeverity::Debug | LogSeverity::Trace => &self.verbose,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> DebugStats {
        DebugStats {
            errors: self.errors.load(Ordering::Relaxed),
            warnings: self.warnings.load(Ordering::Relaxed),
            info: self.info.load(Ordering::Relaxed),
            verbose: self.verbose.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.errors.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.info.store(0, Ordering::Relaxed);
        self.verbose.store(0, Ordering::Relaxed);
    }
}

pub fn debug_stats() -> DebugStats {
    DEBUG_STATS.snapshot()
}

pub fn reset_debug_stats() {
    DEBUG_STATS.reset();
}

/// Route one driver message into the engine logger
fn forward(ty: u32, id: u32, severity: u32, message: &str) {
    let severity = debug_severity_to_log(severity);
    DEBUG_STATS.record(severity);
    Engine::log(
        severity,
        "prism3d::gl",
        format!("[{}] #{}: {}", debug_type_name(ty), id, message),
    );
}

/// Enable synchronous debug output when the context supports it
pub(crate) fn install(gl: &mut glow::Context) {
    unsafe {
        if !gl.supports_debug() {
            engine_warn!("prism3d::gl", "Context has no debug output, gl-debug does nothing");
            return;
        }
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(|_source, ty, id, severity, message| {
            forward(ty, id, severity, message);
        });
    }
    engine_info!("prism3d::gl", "GL debug output enabled");
}
