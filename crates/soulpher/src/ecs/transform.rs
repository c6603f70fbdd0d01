//! Position, rotation, and scale, plus the seek/arrival motion law.

use super::component::{Component, ComponentKind};
use crate::math::{Pose, Vec2};

/// Result of one [`Transform::seek`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekOutcome {
    /// Already within the arrival radius; the position was not touched.
    Arrived,
    /// Moved toward the target. `remaining` is the distance left afterwards.
    Moved { remaining: f32 },
}

impl SeekOutcome {
    pub fn arrived(self) -> bool {
        matches!(self, SeekOutcome::Arrived)
    }
}

/// A 2D transform component.
///
/// Rotation is in degrees and unconstrained. The transform has no visual
/// effect on its own; an [`Actor`](super::Actor) copies it onto its
/// [`Shape`](super::Shape) every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    /// Origin, no rotation, scale `(1, 1)`.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Create a transform at the given position.
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::IDENTITY
        }
    }

    /// Return a copy with the given rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Return a copy with the given scale.
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Move toward `target` at `speed` units per second for `delta_time`
    /// seconds, stopping once within `arrival_radius`.
    ///
    /// The arrival test runs once, on the distance *before* moving: if the
    /// target is at most `arrival_radius` away, nothing happens. Otherwise the
    /// position advances along the straight line to the target by
    /// `speed * delta_time`, capped so it never passes the target.
    ///
    /// Zero speed or zero `delta_time` move nothing. Negative or NaN steps are
    /// treated as zero.
    pub fn seek(
        &mut self,
        target: Vec2,
        speed: f32,
        delta_time: f32,
        arrival_radius: f32,
    ) -> SeekOutcome {
        let displacement = target - self.position;
        let distance = displacement.length();

        // `distance > 0` from here on, so the normalization below is safe.
        if distance.is_nan() || distance <= arrival_radius.max(0.0) {
            return SeekOutcome::Arrived;
        }

        let step = (speed * delta_time).max(0.0).min(distance);
        self.position += displacement / distance * step;

        SeekOutcome::Moved {
            remaining: distance - step,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Component for Transform {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Transform
    }
}
