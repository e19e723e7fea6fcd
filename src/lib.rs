#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod assets;
pub mod config;
pub mod engine;
pub mod errors;
pub mod export;
pub mod pipeline;
pub mod sampler;
pub mod scene;
pub mod uv_layout;

pub use assets::Texture;
pub use engine::{Device, ProcessEngine, RecordingEngine, RenderEngine, RenderOutputs};
pub use errors::{Result, ViewsetError};
pub use export::CameraRecord;
pub use pipeline::{Orchestrator, RenderJob};
pub use sampler::{Pose, PoseSampler};
pub use scene::{Camera, EmissiveMaterial, Scene, SceneObject};
