//! Render job orchestration.
//!
//! The run is a strict sequential loop over the (texture × view) grid:
//! textures in lexicographic file-name order on the outside, view indices
//! in ascending order on the inside. Each job samples a fresh pose, writes
//! the camera record into its own directory, then blocks on the engine.
//! Downstream consumers rely on the directory layout, so which pose lands
//! in which directory is fully determined by this iteration order plus the
//! seeded random source.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rand::RngExt;

use crate::assets::Texture;
use crate::engine::RenderEngine;
use crate::errors::Result;
use crate::export::{camera_record, write_camera_record};
use crate::sampler::PoseSampler;
use crate::scene::Scene;

/// Subdirectory of the dataset root holding all view directories.
pub const RENDER_SUBDIR: &str = "render";

/// One cell of the (texture × view) grid. Created by the run loop,
/// consumed by a single render call, then dropped.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub texture_stem: String,
    pub view_index: u32,
    pub output_dir: PathBuf,
}

/// The unique directory of a (texture, view) pair:
/// `render_root/<stem>/<view index, zero-padded to six digits>`.
#[must_use]
pub fn job_dir(render_root: &Path, texture_stem: &str, view_index: u32) -> PathBuf {
    render_root.join(texture_stem).join(format!("{view_index:06}"))
}

/// Sequential render loop over the (texture × view) grid.
pub struct Orchestrator {
    pub render_root: PathBuf,
    pub n_views: u32,
    pub sampler: PoseSampler,
    pub resolution: (u32, u32),
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        render_root: PathBuf,
        n_views: u32,
        sampler: PoseSampler,
        resolution: (u32, u32),
    ) -> Self {
        Self {
            render_root,
            n_views,
            sampler,
            resolution,
        }
    }

    /// Runs every job in the grid. Any failure aborts the whole run;
    /// already-rendered view directories are left on disk untouched.
    pub fn run<E: RenderEngine, R: RngExt>(
        &self,
        scene: &mut Scene,
        engine: &mut E,
        rng: &mut R,
        textures: &[Texture],
    ) -> Result<()> {
        let mut textures: Vec<Texture> = textures.to_vec();
        textures.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        for (index, texture) in textures.iter().enumerate() {
            info!(
                "texture {}/{}: {}",
                index + 1,
                textures.len(),
                texture.file_name
            );
            scene.rebind_material(texture);

            for view_index in 0..self.n_views {
                let job = RenderJob {
                    texture_stem: texture.stem.clone(),
                    view_index,
                    output_dir: job_dir(&self.render_root, &texture.stem, view_index),
                };
                self.run_job(scene, engine, rng, &job)?;
            }
        }
        Ok(())
    }

    fn run_job<E: RenderEngine, R: RngExt>(
        &self,
        scene: &mut Scene,
        engine: &mut E,
        rng: &mut R,
        job: &RenderJob,
    ) -> Result<()> {
        let pose = self.sampler.sample(rng);
        scene.camera.set_pose(pose);

        let projection = engine.projection(&scene.camera, self.resolution);
        let record = camera_record(&pose, projection, self.resolution);

        // Pre-existing directories from an earlier run are tolerated; their
        // contents are overwritten job by job.
        fs::create_dir_all(&job.output_dir)?;
        write_camera_record(&record, &job.output_dir)?;

        engine.render(scene, &job.output_dir)?;
        Ok(())
    }
}
