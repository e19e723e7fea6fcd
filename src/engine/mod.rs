//! Render engine boundary.
//!
//! Image synthesis is delegated: the run loop hands an engine the scene and
//! a view directory and blocks until the engine has written the channel
//! images there. [`ProcessEngine`] drives an external renderer executable;
//! [`RecordingEngine`] captures the calls instead and writes nothing.

pub mod process;
pub mod recording;

pub use process::ProcessEngine;
pub use recording::RecordingEngine;

use std::path::{Path, PathBuf};

use glam::Mat4;

use crate::errors::Result;
use crate::scene::{Camera, Scene};

/// Color channel file an engine writes per view.
pub const COLOR_FILE: &str = "color.png";
/// Alpha channel file an engine writes per view.
pub const ALPHA_FILE: &str = "alpha.png";
/// Per-pixel UV channel file an engine writes per view.
pub const UV_FILE: &str = "uv.png";

/// Compute backend the engine renders on. Chosen once before the run loop
/// starts; has no effect on job enumeration.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Cpu,
    Gpu,
}

impl Device {
    #[must_use]
    pub fn as_arg(self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Gpu => "gpu",
        }
    }
}

/// The channel files produced for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutputs {
    pub color: PathBuf,
    pub alpha: PathBuf,
    pub uv: PathBuf,
}

impl RenderOutputs {
    /// The conventional channel paths inside a view directory.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            color: dir.join(COLOR_FILE),
            alpha: dir.join(ALPHA_FILE),
            uv: dir.join(UV_FILE),
        }
    }
}

/// Image synthesis capability.
pub trait RenderEngine {
    /// Projection matrix the engine will render with, in its native
    /// vertical-axis convention.
    ///
    /// The default is the pinhole projection derived from the camera lens
    /// and per-axis pixel aspects; engines with their own intrinsics
    /// computation override this.
    fn projection(&self, camera: &Camera, resolution: (u32, u32)) -> Mat4 {
        camera.projection_matrix(resolution)
    }

    /// Renders the scene's current view into `output_dir`, blocking until
    /// the channel images are written.
    fn render(&mut self, scene: &Scene, output_dir: &Path) -> Result<RenderOutputs>;
}
