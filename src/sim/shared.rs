//! Shared handle for callers that move a projectile across threads
//!
//! Stepping has no meaning when two callers race on one state, so overlapping
//! steps are refused instead of serialized.

use std::sync::{Arc, Mutex, TryLockError};

use glam::DVec3;

use super::state::ProjectileState;
use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct SharedProjectile {
    inner: Arc<Mutex<ProjectileState>>,
}

impl SharedProjectile {
    pub fn new(state: ProjectileState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Step the shared state; fails if another step holds it
    pub fn step(&self, dt: f64) -> Result<DVec3, SimError> {
        match self.inner.try_lock() {
            Ok(mut state) => state.step(dt),
            Err(TryLockError::WouldBlock) => {
                log::warn!("Rejected overlapping projectile step");
                Err(SimError::ConcurrentMutation)
            }
            Err(TryLockError::Poisoned(_)) => Err(SimError::ConcurrentMutation),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Result<ProjectileState, SimError> {
        self.inner
            .lock()
            .map(|s| s.clone())
            .map_err(|_| SimError::ConcurrentMutation)
    }

    #[cfg(test)]
    fn hold(&self) -> std::sync::MutexGuard<'_, ProjectileState> {
        self.inner.lock().unwrap()
    }
}
