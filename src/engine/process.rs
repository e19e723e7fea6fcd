use std::path::Path;
use std::process::Command;

use log::debug;

use super::{Device, RenderEngine, RenderOutputs};
use crate::errors::{Result, ViewsetError};
use crate::export::CAMERA_RECORD_FILE;
use crate::scene::Scene;

/// Drives an external renderer executable, one blocking invocation per
/// view.
///
/// The child is launched as:
///
/// ```text
/// <command> --mesh <obj> [--texture <image>] --camera <dir>/camera.json \
///           --output-dir <dir> --device <cpu|gpu> \
///           --resolution-x <w> --resolution-y <h>
/// ```
///
/// and is expected to write `color.png`, `alpha.png` and `uv.png` into the
/// output directory. A non-zero exit status fails the job; the run loop
/// aborts on the propagated error.
pub struct ProcessEngine {
    command: String,
    device: Device,
    resolution: (u32, u32),
}

impl ProcessEngine {
    #[must_use]
    pub fn new(command: impl Into<String>, device: Device, resolution: (u32, u32)) -> Self {
        Self {
            command: command.into(),
            device,
            resolution,
        }
    }
}

impl RenderEngine for ProcessEngine {
    fn render(&mut self, scene: &Scene, output_dir: &Path) -> Result<RenderOutputs> {
        let mut cmd = Command::new(&self.command);
        cmd.arg("--mesh").arg(&scene.object.mesh_path);
        if let Some(material) = scene.bound_material() {
            cmd.arg("--texture").arg(&material.texture.path);
        }
        cmd.arg("--camera")
            .arg(output_dir.join(CAMERA_RECORD_FILE))
            .arg("--output-dir")
            .arg(output_dir)
            .arg("--device")
            .arg(self.device.as_arg())
            .arg("--resolution-x")
            .arg(self.resolution.0.to_string())
            .arg("--resolution-y")
            .arg(self.resolution.1.to_string());

        debug!("render command: {cmd:?}");

        let status = cmd.status().map_err(|source| ViewsetError::EngineSpawnFailed {
            command: self.command.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ViewsetError::EngineFailed {
                status,
                output_dir: output_dir.to_path_buf(),
            });
        }

        Ok(RenderOutputs::in_dir(output_dir))
    }
}
