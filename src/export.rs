//! Camera parameter export.
//!
//! Each render job gets one [`CameraRecord`]: the world-to-camera matrix
//! derived from the sampled [`Pose`], the engine's projection matrix
//! converted to image-row convention, and the render resolution. The record
//! is written to `camera.json` inside the job's output directory before the
//! image is rendered, and never touched again.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use glam::Mat4;
use serde::{Serialize, Serializer};

use crate::errors::Result;
use crate::sampler::Pose;

/// File name of the per-view camera record.
pub const CAMERA_RECORD_FILE: &str = "camera.json";

/// Serializable extrinsic/intrinsic description of one rendered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraRecord {
    /// World-to-camera matrix, serialized as 4×4 row-major floats.
    #[serde(rename = "transformation_matrix", serialize_with = "mat4_rows")]
    pub view_matrix: Mat4,
    /// Projection matrix in image-row convention, 4×4 row-major floats.
    #[serde(serialize_with = "mat4_rows")]
    pub projection_matrix: Mat4,
    pub resolution_x: u32,
    pub resolution_y: u32,
}

/// Camera-to-world placement matrix for a pose: rotation block from the
/// orientation, translation column from the location.
#[must_use]
pub fn camera_to_world(pose: &Pose) -> Mat4 {
    Mat4::from_rotation_translation(pose.orientation, pose.location)
}

/// Builds the record for one view.
///
/// The view matrix is the true inverse of the camera-to-world matrix (the
/// placement is a rigid transform, so the inverse is exact up to floating
/// point). `projection` is taken as the engine supplies it; only the sign
/// of its row-1/column-1 entry is flipped, converting the engine's native
/// vertical axis to top-row-first image rows. No other entry changes.
#[must_use]
pub fn camera_record(pose: &Pose, projection: Mat4, resolution: (u32, u32)) -> CameraRecord {
    let view_matrix = camera_to_world(pose).inverse();

    let mut projection_matrix = projection;
    projection_matrix.y_axis.y = -projection_matrix.y_axis.y;

    CameraRecord {
        view_matrix,
        projection_matrix,
        resolution_x: resolution.0,
        resolution_y: resolution.1,
    }
}

/// Writes the record to `dir/camera.json` and returns the written path.
pub fn write_camera_record(record: &CameraRecord, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CAMERA_RECORD_FILE);
    let file = fs::File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), record)?;
    Ok(path)
}

fn mat4_rows<S: Serializer>(matrix: &Mat4, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let rows: [[f32; 4]; 4] = [
        matrix.row(0).to_array(),
        matrix.row(1).to_array(),
        matrix.row(2).to_array(),
        matrix.row(3).to_array(),
    ];
    rows.serialize(serializer)
}
