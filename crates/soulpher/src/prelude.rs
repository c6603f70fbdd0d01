//! Convenience re-exports — `use soulpher::prelude::*` for the common items.

pub use crate::config::DemoConfig;
pub use crate::ecs::{
    Actor, Component, ComponentKind, Components, Entity, EntityId, SeekOutcome, Shape, Shared,
    Transform, shared,
};
pub use crate::error::{OrExit, SetupError};
pub use crate::math::{Pose, Vec2};
pub use crate::render2d::{Color, FrameRecorder, Primitive, ShapeKind, Surface};
pub use crate::scene::Scene;
pub use crate::steering::{PatrolRoute, PointerFollow, SeekParams, Steering, SteeringMode};
pub use crate::time::Time;
