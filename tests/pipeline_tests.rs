//! Orchestration Tests
//!
//! Tests for:
//! - Job grid enumeration: count, ordering, directory naming
//! - Camera records written per job
//! - Idempotent directory creation across re-runs
//! - Material rebinding lifecycle
//! - Texture discovery ordering

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use viewset::assets::{Texture, collect_textures};
use viewset::engine::RecordingEngine;
use viewset::errors::ViewsetError;
use viewset::export::CAMERA_RECORD_FILE;
use viewset::pipeline::{Orchestrator, job_dir};
use viewset::sampler::PoseSampler;
use viewset::scene::{Camera, Scene, SceneObject};

fn test_scene() -> Scene {
    Scene::new(SceneObject::new(PathBuf::from("obj.obj")), Camera::default())
}

fn test_orchestrator(render_root: PathBuf, n_views: u32) -> Orchestrator {
    Orchestrator::new(
        render_root,
        n_views,
        PoseSampler::new(Vec3::ZERO, 2.0, 10.0, 1.0),
        (64, 64),
    )
}

fn texture(name: &str) -> Texture {
    Texture::from_path(PathBuf::from(name))
}

// ============================================================================
// Job Grid Enumeration
// ============================================================================

#[test]
fn jobs_run_in_lexicographic_texture_then_view_order() {
    let root = tempfile::tempdir().unwrap();
    let render_root = root.path().join("render");
    let orchestrator = test_orchestrator(render_root.clone(), 3);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(0);

    // Deliberately unsorted input.
    let textures = [texture("wood.png"), texture("metal.png")];
    orchestrator
        .run(&mut scene, &mut engine, &mut rng, &textures)
        .unwrap();

    let dirs: Vec<_> = engine.calls.iter().map(|c| c.output_dir.clone()).collect();
    let expected = [
        ("metal", 0),
        ("metal", 1),
        ("metal", 2),
        ("wood", 0),
        ("wood", 1),
        ("wood", 2),
    ];
    assert_eq!(dirs.len(), expected.len());
    for (dir, (stem, view)) in dirs.iter().zip(expected) {
        assert_eq!(*dir, job_dir(&render_root, stem, view));
    }
}

#[test]
fn job_count_is_textures_times_views_with_distinct_dirs() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 4);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(1);

    let textures = [texture("a.png"), texture("b.png"), texture("c.png")];
    orchestrator
        .run(&mut scene, &mut engine, &mut rng, &textures)
        .unwrap();

    assert_eq!(engine.calls.len(), 12);
    let distinct: HashSet<_> = engine.calls.iter().map(|c| &c.output_dir).collect();
    assert_eq!(distinct.len(), 12, "output dirs must be unique per job");
}

#[test]
fn view_directories_are_zero_padded_to_six_digits() {
    let render_root = PathBuf::from("render");
    let dir = job_dir(&render_root, "metal", 7);
    assert_eq!(dir, render_root.join("metal").join("000007"));
}

#[test]
fn each_call_sees_the_texture_bound_for_its_job() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 2);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(2);

    let textures = [texture("wood.png"), texture("metal.png")];
    orchestrator
        .run(&mut scene, &mut engine, &mut rng, &textures)
        .unwrap();

    let stems: Vec<_> = engine
        .calls
        .iter()
        .map(|c| c.texture_stem.clone().unwrap())
        .collect();
    assert_eq!(stems, ["metal", "metal", "wood", "wood"]);
}

#[test]
fn every_job_gets_a_fresh_pose() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 3);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(3);

    orchestrator
        .run(&mut scene, &mut engine, &mut rng, &[texture("a.png")])
        .unwrap();

    for pair in engine.calls.windows(2) {
        assert_ne!(
            pair[0].pose.location, pair[1].pose.location,
            "consecutive jobs reused a pose"
        );
    }
}

// ============================================================================
// On-Disk Results
// ============================================================================

#[test]
fn camera_record_is_written_into_every_job_directory() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 2);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(4);

    orchestrator
        .run(
            &mut scene,
            &mut engine,
            &mut rng,
            &[texture("a.png"), texture("b.png")],
        )
        .unwrap();

    for call in &engine.calls {
        let record = call.output_dir.join(CAMERA_RECORD_FILE);
        assert!(record.is_file(), "missing {}", record.display());
    }
}

#[test]
fn rerunning_into_the_same_root_succeeds() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 2);
    let textures = [texture("a.png")];

    for seed in [5, 6] {
        let mut scene = test_scene();
        let mut engine = RecordingEngine::new();
        let mut rng = StdRng::seed_from_u64(seed);
        orchestrator
            .run(&mut scene, &mut engine, &mut rng, &textures)
            .expect("pre-existing view directories must be tolerated");
    }
}

// ============================================================================
// Material Lifecycle
// ============================================================================

#[test]
fn rebinding_replaces_the_material_pool() {
    let mut scene = test_scene();

    let first = scene.rebind_material(&texture("wood.png"));
    assert!(scene.material(first).is_some());

    scene.rebind_material(&texture("metal.png"));
    assert_eq!(scene.materials().len(), 1, "stale materials accumulated");
    assert_eq!(scene.bound_material().unwrap().texture.stem, "metal");
    assert_eq!(scene.object.material_slots.len(), 1);
}

#[test]
fn run_leaves_exactly_one_bound_material() {
    let root = tempfile::tempdir().unwrap();
    let orchestrator = test_orchestrator(root.path().join("render"), 1);

    let mut scene = test_scene();
    let mut engine = RecordingEngine::new();
    let mut rng = StdRng::seed_from_u64(7);

    orchestrator
        .run(
            &mut scene,
            &mut engine,
            &mut rng,
            &[texture("a.png"), texture("b.png")],
        )
        .unwrap();

    assert_eq!(scene.materials().len(), 1);
    assert_eq!(scene.bound_material().unwrap().texture.stem, "b");
}

// ============================================================================
// Texture Discovery
// ============================================================================

#[test]
fn collect_textures_sorts_files_and_skips_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("wood.png"), b"x").unwrap();
    fs::write(dir.path().join("metal.png"), b"x").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let textures = collect_textures(dir.path()).unwrap();
    let names: Vec<_> = textures.iter().map(|t| t.file_name.as_str()).collect();
    assert_eq!(names, ["metal.png", "wood.png"]);
    assert_eq!(textures[0].stem, "metal");
}

#[test]
fn collect_textures_rejects_an_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = collect_textures(dir.path()).unwrap_err();
    assert!(matches!(err, ViewsetError::NoTextures(_)));
}

#[test]
fn collect_textures_rejects_a_missing_directory() {
    let err = collect_textures(&PathBuf::from("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, ViewsetError::TextureDirUnreadable { .. }));
}
