use std::path::{Path, PathBuf};

use super::{RenderEngine, RenderOutputs};
use crate::errors::Result;
use crate::sampler::Pose;
use crate::scene::Scene;

/// Engine double that records every render request and writes no pixels.
///
/// Useful in tests and for analyzing a job grid without paying for image
/// synthesis.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<RecordedCall>,
}

/// One captured render request.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Stem of the texture bound when the call was made.
    pub texture_stem: Option<String>,
    /// Camera pose at the time of the call.
    pub pose: Pose,
    pub output_dir: PathBuf,
}

impl RecordingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderEngine for RecordingEngine {
    fn render(&mut self, scene: &Scene, output_dir: &Path) -> Result<RenderOutputs> {
        self.calls.push(RecordedCall {
            texture_stem: scene.bound_material().map(|m| m.texture.stem.clone()),
            pose: *scene.camera.pose(),
            output_dir: output_dir.to_path_buf(),
        });
        Ok(RenderOutputs::in_dir(output_dir))
    }
}
