use std::fs;

use clap::Parser;
use glam::Vec3;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use viewset::assets;
use viewset::config::Args;
use viewset::engine::ProcessEngine;
use viewset::pipeline::{Orchestrator, RENDER_SUBDIR};
use viewset::sampler::PoseSampler;
use viewset::scene::{Camera, Scene, SceneObject};
use viewset::uv_layout;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Configuration checks fail before any rendering starts.
    let textures = assets::collect_textures(&args.texture_dir)?;

    fs::create_dir_all(&args.output_dir)?;
    let mesh_path = assets::stage_mesh(&args.input_obj, &args.output_dir)?;

    if args.export_uv_layout {
        let uv_mesh = assets::load_uv_mesh(&args.input_obj)?;
        let layout_path = args.output_dir.join(uv_layout::UV_LAYOUT_FILE);
        uv_layout::export_uv_layout(&uv_mesh, &layout_path, 512)?;
        info!("UV layout written to {}", layout_path.display());
    }

    let render_root = args.output_dir.join(RENDER_SUBDIR);
    fs::create_dir_all(&render_root)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("pose sampling seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    // The object's reference point; every pose looks here.
    let target = Vec3::ZERO;

    let mut scene = Scene::new(SceneObject::new(mesh_path), Camera::default());
    let mut engine = ProcessEngine::new(args.renderer_cmd.as_str(), args.device, args.resolution());
    let orchestrator = Orchestrator::new(
        render_root,
        args.n_views,
        PoseSampler::new(target, args.radius_min, args.radius_max, args.jitter),
        args.resolution(),
    );

    orchestrator.run(&mut scene, &mut engine, &mut rng, &textures)?;

    info!(
        "dataset complete: {} textures x {} views",
        textures.len(),
        args.n_views
    );
    Ok(())
}
