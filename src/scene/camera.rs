use glam::Mat4;

use crate::sampler::Pose;

/// Vertical field of view (degrees) of the stock lens: a 50mm focal length
/// on a 36mm-wide sensor at square resolution.
pub const DEFAULT_FOV_DEGREES: f32 = 39.6;

/// Perspective camera.
///
/// Holds the lens parameters and the pose of the current view. The
/// projection depends on the image resolution, so it is computed on demand
/// rather than cached.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Horizontal pixel aspect. 1.0 means square pixels.
    pub pixel_aspect_x: f32,
    /// Vertical pixel aspect.
    pub pixel_aspect_y: f32,

    pose: Pose,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov_degrees.to_radians(),
            near,
            far,
            pixel_aspect_x: 1.0,
            pixel_aspect_y: 1.0,
            pose: Pose::default(),
        }
    }

    /// Moves the camera to a sampled placement.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Pinhole projection matrix for the given image resolution, in the
    /// engine-native vertical-axis convention (right-handed, depth 0..1).
    #[must_use]
    pub fn projection_matrix(&self, resolution: (u32, u32)) -> Mat4 {
        let aspect = (resolution.0 as f32 * self.pixel_aspect_x)
            / (resolution.1 as f32 * self.pixel_aspect_y);
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(DEFAULT_FOV_DEGREES, 0.1, 1000.0)
    }
}
