//! Error Types
//!
//! The main error type [`ViewsetError`] covers all failure modes including:
//! - Configuration errors (missing textures, missing mesh asset)
//! - Dataset I/O and serialization errors
//! - External render engine failures
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ViewsetError>`.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The main error type for the viewset tool.
#[derive(Error, Debug)]
pub enum ViewsetError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The texture directory could not be read.
    #[error("Failed to read texture directory {path}: {source}")]
    TextureDirUnreadable {
        /// The directory that was scanned
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The texture directory contains no files.
    #[error("No textures found in {0}")]
    NoTextures(PathBuf),

    /// The input mesh asset does not exist.
    #[error("Input mesh not found: {0}")]
    MeshNotFound(PathBuf),

    // ========================================================================
    // I/O & Serialization Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Image encoding error.
    #[error("Image encode error: {0}")]
    ImageError(String),

    // ========================================================================
    // Mesh Errors
    // ========================================================================
    /// OBJ parsing error.
    #[error("OBJ parse error: {0}")]
    ObjError(String),

    /// The mesh carries no texture coordinates to lay out.
    #[error("Mesh has no texture coordinates: {0}")]
    MissingUvs(PathBuf),

    // ========================================================================
    // Render Engine Errors
    // ========================================================================
    /// The external renderer executable could not be launched.
    #[error("Failed to launch renderer `{command}`: {source}")]
    EngineSpawnFailed {
        /// The configured renderer command
        command: String,
        /// The underlying spawn error
        source: std::io::Error,
    },

    /// The external renderer reported failure for one view.
    #[error("Renderer exited with {status} while rendering {output_dir}")]
    EngineFailed {
        /// The child's exit status
        status: ExitStatus,
        /// The view directory being rendered
        output_dir: PathBuf,
    },
}

// ============================================================================
// Convenient conversion implementations
// ============================================================================

impl From<image::ImageError> for ViewsetError {
    fn from(err: image::ImageError) -> Self {
        ViewsetError::ImageError(err.to_string())
    }
}

impl From<tobj::LoadError> for ViewsetError {
    fn from(err: tobj::LoadError) -> Self {
        ViewsetError::ObjError(err.to_string())
    }
}

/// Alias for `Result<T, ViewsetError>`.
pub type Result<T> = std::result::Result<T, ViewsetError>;
