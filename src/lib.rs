//! Projectile Motion - a point mass under constant gravity
//!
//! Core modules:
//! - `sim`: Deterministic integrator, flight state machine, closed-form reference
//! - `clock`: Frame deltas as a renderer's update loop would hand them out
//! - `scenario`: The intro scene's launch-wait-annotate choreography
//! - `settings`: JSON-configurable scenario parameters
//! - `trace`: Trajectory export for an external renderer

pub mod clock;
pub mod error;
pub mod scenario;
pub mod settings;
pub mod sim;
pub mod trace;

pub use clock::FrameClock;
pub use error::SimError;
pub use scenario::{FlightReport, Scenario, ScenarioReport};
pub use settings::{Settings, SettingsError};

use glam::DVec3;

/// Scenario constants
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.8;
    /// Height below which an unmasked projectile counts as landed.
    /// Absorbs frame overshoot past y = 0.
    pub const LANDING_TOLERANCE: f64 = 0.05;

    /// Default frame rate of the driving clock
    pub const DEFAULT_FPS: f64 = 60.0;
    /// Maximum frames a scenario runs before giving up on its wait
    pub const MAX_FRAMES: u64 = 1_000_000;

    /// Intro scenario launch
    pub const INTRO_SPEED: f64 = 35.0;
    pub const INTRO_ANGLE_DEG: f64 = 45.0;
    /// Animation speed multiplier
    pub const INTRO_TIME_SCALE: f64 = 1.5;
    /// Real time the scene waits after launching
    pub const INTRO_WAIT_SECS: f64 = 10.0;
}

/// Launch velocity for `speed` at `angle_deg` above horizontal
#[inline]
pub fn launch_velocity(speed: f64, angle_deg: f64) -> DVec3 {
    let theta = angle_deg.to_radians();
    DVec3::new(speed * theta.cos(), speed * theta.sin(), 0.0)
}
