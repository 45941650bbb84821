//! Fixed or variable timestep integration
//!
//! Advances a projectile with semi-implicit Euler: velocity first, then position
//! from the new velocity.

use glam::DVec3;

use super::state::ProjectileState;
use crate::error::{SimError, ensure_finite};

impl ProjectileState {
    /// Advance the state by `dt` seconds of real time and return the new position
    ///
    /// `dt` is multiplied by the time scale before integrating. The height record
    /// is updated before the axis mask is applied, so a frozen vertical axis
    /// never erases it. The integrator keeps going through the ground if asked;
    /// stopping is the caller's job.
    pub fn step(&mut self, dt: f64) -> Result<DVec3, SimError> {
        let dt = ensure_finite("dt", dt)?;
        if dt < 0.0 {
            return Err(SimError::invalid(format!("dt must be >= 0, got {dt}")));
        }

        let dt = dt * self.time_scale;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.max_height = self.max_height.max(self.position.y);
        self.position = self.mask.apply(self.position);

        Ok(self.position)
    }

    /// Same as `step`, but leaves `self` untouched and returns the advanced copy
    pub fn stepped(&self, dt: f64) -> Result<ProjectileState, SimError> {
        let mut next = self.clone();
        next.step(dt)?;
        Ok(next)
    }
}
