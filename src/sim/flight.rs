//! Flight orchestration: when stepping starts and when it must stop
//!
//! The integrator never stops itself. `Flight` owns a projectile together with an
//! explicit phase and suppresses steps once the projectile has landed.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::state::ProjectileState;
use crate::consts::LANDING_TOLERANCE;
use crate::error::SimError;

/// Lifecycle of a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Waiting for launch; frames pass without stepping
    NotStarted,
    /// Stepping every frame
    Running,
    /// Touched down; no further steps are applied
    Landed,
}

/// What a single `advance` call did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    /// Not launched yet
    Waiting,
    /// Stepped to a new position
    Moved(DVec3),
    /// Stepped and touched down at this position
    Landed(DVec3),
    /// Already landed; the step was dropped
    Suppressed,
}

/// Landing predicate
///
/// Only unmasked projectiles land. The tolerance absorbs frame overshoot past
/// y = 0 and the `x > 0` guard keeps a flat launch from landing at t = 0.
pub fn is_landed(state: &ProjectileState) -> bool {
    let p = state.position();
    state.mask().is_full() && p.y <= LANDING_TOLERANCE && p.x > 0.0
}

#[derive(Debug, Clone)]
pub struct Flight {
    projectile: ProjectileState,
    phase: FlightPhase,
    frames: u64,
    /// Unscaled real time spent running
    elapsed: f64,
}

impl Flight {
    pub fn new(projectile: ProjectileState) -> Self {
        Self {
            projectile,
            phase: FlightPhase::NotStarted,
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Start stepping. Has no effect once running or landed.
    pub fn launch(&mut self) {
        if self.phase == FlightPhase::NotStarted {
            self.phase = FlightPhase::Running;
        }
    }

    /// Feed one frame delta to the flight
    pub fn advance(&mut self, dt: f64) -> Result<FlightEvent, SimError> {
        match self.phase {
            FlightPhase::NotStarted => Ok(FlightEvent::Waiting),
            FlightPhase::Landed => Ok(FlightEvent::Suppressed),
            FlightPhase::Running => {
                let pos = self.projectile.step(dt)?;
                self.frames += 1;
                self.elapsed += dt;

                if is_landed(&self.projectile) {
                    self.phase = FlightPhase::Landed;
                    log::debug!(
                        "Landed after {} frames ({:.3}s): x={:.3} H={:.3}",
                        self.frames,
                        self.elapsed,
                        pos.x,
                        self.projectile.max_height()
                    );
                    Ok(FlightEvent::Landed(pos))
                } else {
                    Ok(FlightEvent::Moved(pos))
                }
            }
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn projectile(&self) -> &ProjectileState {
        &self.projectile
    }

    pub fn position(&self) -> DVec3 {
        self.projectile.position()
    }

    pub fn max_height(&self) -> f64 {
        self.projectile.max_height()
    }

    /// Steps applied so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
