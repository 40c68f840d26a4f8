//! Error types surfaced by the engine.
//!
//! Only startup paths can fail: loading the configuration file and attaching
//! the input router to its surface. Everything that happens inside a frame
//! either succeeds, recovers locally, or is a no-op.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or write the INI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or parsed.
    #[error("failed to load config file {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    /// The file could not be written.
    #[error("failed to save config file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid input-layer state detected while wiring the input router.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Another router already owns the surface.
    #[error("input surface '{0}' is already in use")]
    SurfaceInUse(String),
    /// The surface has a zero width or height, so pixels cannot be mapped.
    #[error("input surface '{name}' has degenerate size {width}x{height}")]
    DegenerateSurface {
        name: String,
        width: u32,
        height: u32,
    },
}
