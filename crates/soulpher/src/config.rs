//! Demo configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock demo. Only the fields present in the file override it.
//!
//! ```json
//! {
//!     "title": "Patrol",
//!     "patrol": { "speed": 150.0 },
//!     "waypoints": [[0, 0], [100, 0]]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::math::Vec2;
use crate::render2d::FrameRecorder;
use crate::steering::{PatrolRoute, PointerFollow, SeekParams, Steering};

/// Surface name accepted by [`DemoConfig::open_surface`].
pub const RECORDER_SURFACE: &str = "recorder";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title. Informational for headless runs.
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Drawing surface to open.
    pub surface: String,
    /// Number of frames a headless run steps through.
    pub frames: u32,
    /// Fixed update rate in frames per second.
    pub step_hz: f32,
    pub waypoints: Vec<Vec2>,
    pub patrol: SeekParams,
    pub follow: PointerFollow,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Soulpher".to_string(),
            width: 800,
            height: 600,
            surface: RECORDER_SURFACE.to_string(),
            frames: 600,
            step_hz: 60.0,
            waypoints: vec![
                Vec2::new(250.0, 100.0),
                Vec2::new(500.0, 100.0),
                Vec2::new(500.0, 200.0),
                Vec2::new(250.0, 200.0),
            ],
            patrol: SeekParams::default(),
            follow: PointerFollow::default(),
        }
    }
}

impl DemoConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SetupError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Load from the path in the first CLI argument, or fall back to defaults.
    pub fn from_args() -> Result<Self, SetupError> {
        match std::env::args().nth(1) {
            Some(path) => Self::from_path(path),
            None => {
                log::info!("no config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the steering math cannot use.
    pub fn validate(&self) -> Result<(), SetupError> {
        check_params("patrol", self.patrol)?;
        check_params("follow", self.follow.params)?;
        check_non_negative("follow.engage_radius", self.follow.engage_radius)?;

        if !(self.step_hz.is_finite() && self.step_hz > 0.0) {
            return Err(SetupError::InvalidConfig(format!(
                "step_hz must be positive, got {}",
                self.step_hz
            )));
        }

        if let Some(index) = self.waypoints.iter().position(|w| !w.is_finite()) {
            return Err(SetupError::InvalidConfig(format!(
                "waypoint {index} is not finite: {}",
                self.waypoints[index]
            )));
        }

        Ok(())
    }

    /// Seconds per fixed update.
    pub fn step_secs(&self) -> f32 {
        1.0 / self.step_hz
    }

    pub fn patrol_route(&self) -> PatrolRoute {
        PatrolRoute::new(self.waypoints.clone(), self.patrol)
    }

    /// Patrol with pointer following layered on top.
    pub fn steering(&self) -> Steering {
        Steering::new(self.patrol_route(), Some(self.follow))
    }

    /// Open the configured surface. Only the headless recorder is built in.
    pub fn open_surface(&self) -> Result<FrameRecorder, SetupError> {
        if self.surface == RECORDER_SURFACE {
            log::info!("{} ({}x{}): recording frames headless", self.title, self.width, self.height);
            Ok(FrameRecorder::new())
        } else {
            Err(SetupError::SurfaceUnavailable(format!(
                "no `{}` surface in this build",
                self.surface
            )))
        }
    }
}

fn check_params(name: &str, params: SeekParams) -> Result<(), SetupError> {
    check_non_negative(&format!("{name}.speed"), params.speed)?;
    check_non_negative(&format!("{name}.arrival_radius"), params.arrival_radius)
}

fn check_non_negative(name: &str, value: f32) -> Result<(), SetupError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}
