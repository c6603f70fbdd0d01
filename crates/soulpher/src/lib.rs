//! # Soulpher — Actors, Components and Seek Steering
//!
//! A small 2D scene-object model: named [`Actor`](ecs::Actor)s own an ordered
//! list of shared components, a [`Transform`](ecs::Transform) moves toward a
//! target with the seek/arrival law, and a [`Shape`](ecs::Shape) mirrors that
//! pose onto a drawable primitive each frame.
//!
//! Drawing goes through the [`Surface`](render2d::Surface) trait; the crate
//! ships a headless [`FrameRecorder`](render2d::FrameRecorder).
//!
//! Start with `use soulpher::prelude::*` and drive a [`Scene`](scene::Scene).

pub mod config;
pub mod ecs;
pub mod error;
pub mod math;
pub mod prelude;
pub mod render2d;
pub mod scene;
pub mod steering;
pub mod time;
