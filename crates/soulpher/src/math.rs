//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. [`Pose`] is the plain position / rotation / scale
//! triple that gets copied from a [`Transform`](crate::ecs::Transform) onto a
//! drawable [`Primitive`](crate::render2d::Primitive) every frame.

pub use glam::{Affine2, Vec2};

/// A 2D pose: position, rotation in degrees, and scale.
///
/// Rotation is stored in degrees and never wrapped: `720.0` stays `720.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Pose {
    /// Identity pose (origin, no rotation, uniform scale of 1).
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    /// Compute the affine matrix mapping local points to world points.
    ///
    /// Scale is applied first, then rotation, then translation.
    pub fn matrix(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            self.scale,
            self.rotation.to_radians(),
            self.position,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}
