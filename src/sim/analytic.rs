//! Closed-form projectile motion on flat ground
//!
//! Reference values for checking the integrator and for reporting beside it.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, ensure_finite};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticSolution {
    /// R = u² sin 2θ / g
    pub range: f64,
    /// H = (u sin θ)² / 2g
    pub max_height: f64,
    /// T = 2 u sin θ / g
    pub flight_time: f64,
}

impl AnalyticSolution {
    /// Launch from the origin at `speed` and `angle_deg` under gravity `g` (> 0)
    pub fn for_launch(speed: f64, angle_deg: f64, g: f64) -> Result<Self, SimError> {
        let speed = ensure_finite("launch speed", speed)?;
        let theta = ensure_finite("launch angle", angle_deg)?.to_radians();
        let g = ensure_finite("gravity", g)?;
        if g <= 0.0 {
            return Err(SimError::invalid(format!("gravity must be > 0, got {g}")));
        }

        let vy = speed * theta.sin();
        Ok(Self {
            range: speed * speed * (2.0 * theta).sin() / g,
            max_height: vy * vy / (2.0 * g),
            flight_time: 2.0 * vy / g,
        })
    }
}
