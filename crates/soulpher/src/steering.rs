//! # Steering — Patrol Routes and Pointer Following
//!
//! Thin behaviors built on [`Transform::seek`]. Everything a behavior needs
//! (waypoints, speeds, radii) lives in the behavior value the caller owns; no
//! global state.
//!
//! ```text
//!   Steering::steer(transform, pointer, dt)
//!        │
//!        ├─ pointer within engage radius? ── yes ─► PointerFollow::step
//!        │                                          (seek the pointer)
//!        └─ no ─► PatrolRoute::step
//!                   seek current waypoint; once arrived, advance
//!                   (wrapping) and seek the next one
//! ```

use serde::{Deserialize, Serialize};

use crate::ecs::{SeekOutcome, Transform};
use crate::math::{Vec2, distance};

/// Speed and arrival radius for one seek behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekParams {
    /// Units per second.
    pub speed: f32,
    /// Distance at which the target counts as reached.
    pub arrival_radius: f32,
}

impl SeekParams {
    pub const fn new(speed: f32, arrival_radius: f32) -> Self {
        Self { speed, arrival_radius }
    }

    /// Apply these parameters to one seek call.
    pub fn seek(&self, transform: &mut Transform, target: Vec2, delta_time: f32) -> SeekOutcome {
        transform.seek(target, self.speed, delta_time, self.arrival_radius)
    }
}

impl Default for SeekParams {
    fn default() -> Self {
        Self::new(100.0, 5.0)
    }
}

/// A looping list of waypoints visited in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
    current: usize,
    params: SeekParams,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>, params: SeekParams) -> Self {
        Self {
            waypoints,
            current: 0,
            params,
        }
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn params(&self) -> SeekParams {
        self.params
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The waypoint currently being sought, or `None` for an empty route.
    pub fn current_target(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    /// Move on to the next waypoint, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.current = (self.current + 1) % self.waypoints.len();
            log::trace!("patrol advancing to waypoint {}", self.current);
        }
    }

    /// Seek the current waypoint. If it is already reached, advance first and
    /// seek the next one in the same step.
    ///
    /// Returns the index of the waypoint targeted, or `None` for an empty
    /// route (which leaves the transform untouched).
    pub fn step(&mut self, transform: &mut Transform, delta_time: f32) -> Option<usize> {
        let target = self.current_target()?;
        if self.params.seek(transform, target, delta_time).arrived() {
            self.advance();
            if let Some(next) = self.current_target() {
                self.params.seek(transform, next, delta_time);
            }
        }
        Some(self.current)
    }
}

/// Chase a pointer while it is close enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerFollow {
    /// The pointer must be strictly closer than this to be followed.
    pub engage_radius: f32,
    pub params: SeekParams,
}

impl PointerFollow {
    pub fn engaged(&self, position: Vec2, pointer: Vec2) -> bool {
        distance(position, pointer) < self.engage_radius
    }

    /// Seek the pointer if engaged. Returns whether it was.
    pub fn step(&self, transform: &mut Transform, pointer: Vec2, delta_time: f32) -> bool {
        if !self.engaged(transform.position, pointer) {
            return false;
        }
        self.params.seek(transform, pointer, delta_time);
        true
    }
}

impl Default for PointerFollow {
    fn default() -> Self {
        Self {
            engage_radius: 300.0,
            params: SeekParams::new(200.0, 10.0),
        }
    }
}

/// Which behavior moved the transform this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringMode {
    Follow,
    Patrol,
    Idle,
}

/// Pointer following with a patrol route as fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Steering {
    pub follow: Option<PointerFollow>,
    pub patrol: PatrolRoute,
}

impl Steering {
    pub fn new(patrol: PatrolRoute, follow: Option<PointerFollow>) -> Self {
        Self { follow, patrol }
    }

    /// Follow the pointer when engaged, patrol otherwise.
    ///
    /// `pointer` is `None` when the driver has no pointer to offer.
    pub fn steer(
        &mut self,
        transform: &mut Transform,
        pointer: Option<Vec2>,
        delta_time: f32,
    ) -> SteeringMode {
        if let (Some(follow), Some(pointer)) = (self.follow, pointer) {
            if follow.step(transform, pointer, delta_time) {
                return SteeringMode::Follow;
            }
        }

        match self.patrol.step(transform, delta_time) {
            Some(_) => SteeringMode::Patrol,
            None => SteeringMode::Idle,
        }
    }
}
