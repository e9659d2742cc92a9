//! Error types for the Cubefield engine
//!
//! This module defines the error types used throughout the engine,
//! including configuration, resource loading, shader compilation and
//! graphics backend failures.

use std::fmt;

/// Result type for Cubefield engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cubefield engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Configuration value rejected (world size, octant size, counts, ...)
    InvalidConfig(String),

    /// A file-backed resource (texture, shader source) could not be read or decoded
    ResourceLoad {
        resource: String,
        reason: String,
    },

    /// Shader source was read but the backend refused to compile or link it
    ShaderCompilation {
        shader: String,
        reason: String,
    },

    /// Backend-specific error (wgpu, surface, ...)
    BackendError(String),

    /// Invalid resource handle or resource used in the wrong state
    InvalidResource(String),

    /// Initialization failed (window, device, scene)
    InitializationFailed(String),

    /// Optional hardware (head tracker) is not present
    DeviceUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::ResourceLoad { resource, reason } => {
                write!(f, "Failed to load resource '{}': {}", resource, reason)
            }
            Error::ShaderCompilation { shader, reason } => {
                write!(f, "Failed to compile shader '{}': {}", shader, reason)
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::DeviceUnavailable(msg) => write!(f, "Device unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error at ERROR severity and evaluate to it
///
/// # Example
///
/// ```no_run
/// use cubefield_engine::{engine_err, cubefield::Error};
///
/// let err = engine_err!("cubefield::Scene", Error::InvalidConfig("objects_count is 0".into()));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::cubefield::Error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

/// Log an error at ERROR severity and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::engine_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
