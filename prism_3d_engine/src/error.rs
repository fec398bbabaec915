//! Error types for the Prism3D engine
//!
//! This module defines the error types used throughout the engine,
//! including device failures, resource pools, shaders and render targets.

use std::fmt;

/// Result type for Prism3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL driver, mock device, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (context, renderer, configuration)
    InitializationFailed(String),

    /// A fixed-capacity resource pool has no free slot left
    PoolExhausted {
        /// Pool name (e.g. "textures")
        pool: String,
        /// Configured capacity of the pool
        capacity: usize,
    },

    /// A source asset (file, imported model) could not be found or read
    AssetMissing(String),

    /// Shader compilation or program link failed
    ShaderCompilation {
        /// Label of the shader program
        label: String,
        /// Driver diagnostic log
        log: String,
    },

    /// The driver reported an incomplete framebuffer
    IncompleteFramebuffer(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::PoolExhausted { pool, capacity } => {
                write!(f, "Resource pool '{}' exhausted (capacity {})", pool, capacity)
            }
            Error::AssetMissing(msg) => write!(f, "Asset missing: {}", msg),
            Error::ShaderCompilation { label, log } => {
                write!(f, "Shader '{}' failed to compile: {}", label, log)
            }
            Error::IncompleteFramebuffer(msg) => write!(f, "Incomplete framebuffer: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
