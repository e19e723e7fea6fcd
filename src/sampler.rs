//! Camera pose sampling.
//!
//! Poses are drawn on a spherical shell around a fixed look-at target:
//! radius and both spherical angles are sampled uniformly, the camera is
//! aimed at the target, and the location is then jittered. The polar angle
//! is uniform over `[0, π]` (not over its cosine), so sample density
//! concentrates toward the poles of the shell. The jitter is applied after
//! the orientation is fixed, so the camera keeps aiming along the
//! pre-jitter direction.
//!
//! Sampling is a pure function of the supplied random source. Feeding two
//! samplers the same seeded [`rand::rngs::StdRng`] produces bit-identical
//! pose sequences.

use std::f32::consts::PI;

use glam::{Mat3, Quat, Vec3};
use rand::RngExt;

/// World up reference used to resolve the camera's roll.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Up reference used instead of [`WORLD_UP`] when the view direction is
/// colinear with it. Part of the pose contract: reimplementations must use
/// the same fallback for datasets to be reproducible.
pub const FALLBACK_UP: Vec3 = Vec3::Y;

/// A camera placement: location plus orientation.
///
/// The orientation aims the camera's forward axis (local `-Z`) at the
/// sampling target from the pre-jitter location. Recomputed fresh for every
/// render job, never reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub location: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Draws random camera placements around a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct PoseSampler {
    /// The point every sampled camera looks at.
    pub target: Vec3,
    /// Inner radius of the sampling shell.
    pub radius_min: f32,
    /// Outer radius of the sampling shell.
    pub radius_max: f32,
    /// Half-extent of the per-axis location jitter.
    pub jitter_extent: f32,
}

impl PoseSampler {
    #[must_use]
    pub fn new(target: Vec3, radius_min: f32, radius_max: f32, jitter_extent: f32) -> Self {
        Self {
            target,
            radius_min,
            radius_max,
            jitter_extent,
        }
    }

    /// Draws one pose.
    ///
    /// Draw order is fixed: radius, azimuth, polar angle, then the three
    /// jitter components. Changing it would silently re-map seeds to
    /// different datasets.
    pub fn sample<R: RngExt>(&self, rng: &mut R) -> Pose {
        let r = if self.radius_min < self.radius_max {
            rng.random_range(self.radius_min..self.radius_max)
        } else {
            // Degenerate shell: a fixed radius draws nothing.
            self.radius_min
        };
        let theta = rng.random_range(0.0..2.0 * PI);
        let phi = rng.random_range(0.0..PI);

        let offset = Vec3::new(
            r * theta.cos() * phi.sin(),
            r * theta.sin() * phi.sin(),
            r * phi.cos(),
        );
        let location = self.target + offset;

        let orientation = look_at_orientation(self.target - location);

        // Jitter comes last; the orientation above stays based on the
        // unjittered location.
        let location = location + self.jitter(rng);

        Pose {
            location,
            orientation,
        }
    }

    fn jitter<R: RngExt>(&self, rng: &mut R) -> Vec3 {
        let extent = self.jitter_extent;
        if extent <= 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
        )
    }
}

/// Rotation that aims the camera's forward axis (local `-Z`) along
/// `forward`, with the camera's local `+Y` turned as far toward
/// [`WORLD_UP`] as the view direction allows.
///
/// When `forward` is colinear with [`WORLD_UP`], [`FALLBACK_UP`] resolves
/// the roll instead. Pure and deterministic: the same input always yields
/// the same rotation.
#[must_use]
pub fn look_at_orientation(forward: Vec3) -> Quat {
    let forward = forward.normalize();

    let mut up = WORLD_UP;
    if forward.cross(up).length_squared() < 1e-12 {
        up = FALLBACK_UP;
    }

    let right = forward.cross(up).normalize();
    let new_up = right.cross(forward).normalize();

    let rotation = Mat3::from_cols(right, new_up, -forward);
    Quat::from_mat3(&rotation)
}
