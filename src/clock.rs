//! Frame clock standing in for a renderer's per-frame callback
//!
//! Yields the real-time delta between frames. A jittered clock mimics uneven
//! frame pacing but stays reproducible through its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::{SimError, ensure_finite};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_dt: f64,
    jitter: f64,
    rng: Pcg32,
    /// Real time handed out so far
    now: f64,
}

impl FrameClock {
    /// Constant `1 / fps` deltas
    pub fn fixed(fps: f64) -> Result<Self, SimError> {
        Self::jittered(fps, 0.0, 0)
    }

    /// `1 / fps` scaled by a uniform factor in `[1 - jitter, 1 + jitter]`
    pub fn jittered(fps: f64, jitter: f64, seed: u64) -> Result<Self, SimError> {
        let fps = ensure_finite("fps", fps)?;
        if fps <= 0.0 {
            return Err(SimError::invalid(format!("fps must be > 0, got {fps}")));
        }
        let jitter = ensure_finite("jitter", jitter)?;
        if !(0.0..1.0).contains(&jitter) {
            return Err(SimError::invalid(format!(
                "jitter must be in [0, 1), got {jitter}"
            )));
        }
        Ok(Self {
            frame_dt: 1.0 / fps,
            jitter,
            rng: Pcg32::seed_from_u64(seed),
            now: 0.0,
        })
    }

    /// Delta for the next frame
    pub fn next_dt(&mut self) -> f64 {
        let dt = if self.jitter > 0.0 {
            self.frame_dt * (1.0 + self.rng.random_range(-self.jitter..=self.jitter))
        } else {
            self.frame_dt
        };
        self.now += dt;
        dt
    }

    /// Nominal delta (no jitter)
    pub fn frame_dt(&self) -> f64 {
        self.frame_dt
    }

    pub fn now(&self) -> f64 {
        self.now
    }
}
