//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::Device;

/// Multi-view synthetic dataset renderer.
#[derive(Debug, Parser)]
#[command(author, version, about = "Multi-view synthetic dataset renderer")]
pub struct Args {
    /// Destination root for the dataset.
    #[arg(short = 'o', long)]
    pub output_dir: PathBuf,

    /// Directory of candidate texture images.
    #[arg(short = 't', long)]
    pub texture_dir: PathBuf,

    /// Mesh asset to render.
    #[arg(short = 'i', long, default_value = "cube.obj")]
    pub input_obj: PathBuf,

    /// Camera views rendered per texture.
    #[arg(short = 'n', long, default_value_t = 8)]
    pub n_views: u32,

    /// Compute backend handed to the renderer.
    #[arg(long, value_enum, default_value = "cpu")]
    pub device: Device,

    /// Also write a UV-layout visualization to <OUTPUT_DIR>/uv_unwrap.png.
    #[arg(long)]
    pub export_uv_layout: bool,

    /// External renderer executable invoked once per view.
    #[arg(long)]
    pub renderer_cmd: String,

    /// Inner radius of the camera sampling shell.
    #[arg(long, default_value_t = 2.0)]
    pub radius_min: f32,

    /// Outer radius of the camera sampling shell.
    #[arg(long, default_value_t = 10.0)]
    pub radius_max: f32,

    /// Half-extent of the per-axis camera location jitter.
    #[arg(long, default_value_t = 1.0)]
    pub jitter: f32,

    /// Pose-sampling seed. Drawn from entropy and logged when omitted, so
    /// any run can be reproduced.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rendered image width.
    #[arg(long, default_value_t = 512)]
    pub resolution_x: u32,

    /// Rendered image height.
    #[arg(long, default_value_t = 512)]
    pub resolution_y: u32,
}

impl Args {
    #[must_use]
    pub fn resolution(&self) -> (u32, u32) {
        (self.resolution_x, self.resolution_y)
    }
}
