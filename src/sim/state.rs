//! Projectile state and launch parameters
//!
//! A `ProjectileState` is a plain value owned by whoever drives the simulation.
//! It is created once from launch parameters and then only mutated by `step`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::consts::GRAVITY;
use crate::error::{SimError, ensure_finite};
use crate::launch_velocity;

/// Per-axis multiplicative gate applied to position after every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMask {
    pub x: f64,
    pub y: f64,
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::full()
    }
}

impl AxisMask {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unrestricted motion on both axes
    pub const fn full() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// Horizontal motion only (vertical axis frozen at 0)
    pub const fn horizontal_only() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    /// Vertical motion only (horizontal axis frozen at 0)
    pub const fn vertical_only() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    /// Both contributions exactly 1; only such projectiles can land
    #[allow(clippy::float_cmp)]
    pub fn is_full(&self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }

    #[inline]
    pub(crate) fn apply(&self, p: DVec3) -> DVec3 {
        DVec3::new(p.x * self.x, p.y * self.y, 0.0)
    }
}

/// Launch description; `build` validates it into a `ProjectileState`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    pub speed: f64,
    pub angle_deg: f64,
    pub origin: DVec3,
    pub acceleration: DVec3,
    pub time_scale: f64,
    pub mask: AxisMask,
}

impl LaunchParams {
    /// Launch speed `speed` (m/s) at `angle_deg` above horizontal, everything else default
    pub fn new(speed: f64, angle_deg: f64) -> Self {
        Self {
            speed,
            angle_deg,
            origin: DVec3::ZERO,
            acceleration: DVec3::new(0.0, -GRAVITY, 0.0),
            time_scale: 1.0,
            mask: AxisMask::full(),
        }
    }

    pub fn origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn acceleration(mut self, acceleration: DVec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn mask(mut self, mask: AxisMask) -> Self {
        self.mask = mask;
        self
    }

    pub fn build(self) -> Result<ProjectileState, SimError> {
        ProjectileState::new(self)
    }
}

/// A point mass under constant acceleration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub(crate) position: DVec3,
    pub(crate) velocity: DVec3,
    pub(crate) acceleration: DVec3,
    /// Highest `position.y` seen before masking
    pub(crate) max_height: f64,
    pub(crate) time_scale: f64,
    pub(crate) mask: AxisMask,
    speed: f64,
    angle_deg: f64,
}

impl ProjectileState {
    pub fn new(params: LaunchParams) -> Result<Self, SimError> {
        let speed = ensure_finite("launch speed", params.speed)?;
        let angle_deg = ensure_finite("launch angle", params.angle_deg)?;
        for (name, v) in [("origin", params.origin), ("acceleration", params.acceleration)] {
            if !v.is_finite() {
                return Err(SimError::invalid(format!("{name} must be finite, got {v}")));
            }
        }
        let time_scale = ensure_finite("time scale", params.time_scale)?;
        if time_scale <= 0.0 {
            return Err(SimError::invalid(format!(
                "time scale must be > 0, got {time_scale}"
            )));
        }
        ensure_finite("mask.x", params.mask.x)?;
        ensure_finite("mask.y", params.mask.y)?;

        let velocity = launch_velocity(speed, angle_deg);
        log::debug!(
            "Projectile launched: u={speed} theta={angle_deg} v=({:.3}, {:.3})",
            velocity.x,
            velocity.y
        );

        Ok(Self {
            position: params.origin,
            velocity,
            acceleration: params.acceleration,
            // Starts at 0 even for an elevated origin
            max_height: 0.0,
            time_scale,
            mask: params.mask,
            speed,
            angle_deg,
        })
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    #[inline]
    pub fn acceleration(&self) -> DVec3 {
        self.acceleration
    }

    #[inline]
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    #[inline]
    pub fn mask(&self) -> AxisMask {
        self.mask
    }

    /// Launch speed the state was built with
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Launch angle in degrees
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_launch_velocity_from_angle() {
        let p = LaunchParams::new(35.0, 45.0).build().unwrap();
        let expected = 35.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((p.velocity().x - expected).abs() < TOLERANCE);
        assert!((p.velocity().y - expected).abs() < TOLERANCE);
        assert_eq!(p.velocity().z, 0.0);
    }

    #[test]
    fn test_defaults() {
        let p = LaunchParams::new(10.0, 30.0).build().unwrap();
        assert_eq!(p.position(), DVec3::ZERO);
        assert_eq!(p.acceleration(), DVec3::new(0.0, -9.8, 0.0));
        assert_eq!(p.time_scale(), 1.0);
        assert!(p.mask().is_full());
        assert_eq!(p.max_height(), 0.0);
        assert_eq!(p.speed(), 10.0);
        assert_eq!(p.angle_deg(), 30.0);
    }

    #[test]
    fn test_max_height_starts_at_zero_for_elevated_origin() {
        let p = LaunchParams::new(10.0, 30.0)
            .origin(DVec3::new(0.0, 20.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(p.position().y, 20.0);
        assert_eq!(p.max_height(), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_time_scale() {
        for scale in [0.0, -1.5, f64::NAN] {
            let result = LaunchParams::new(10.0, 30.0).time_scale(scale).build();
            assert!(matches!(result, Err(SimError::InvalidInput(_))), "scale {scale}");
        }
    }

    #[test]
    fn test_rejects_non_finite_launch() {
        assert!(LaunchParams::new(f64::INFINITY, 30.0).build().is_err());
        assert!(LaunchParams::new(10.0, f64::NAN).build().is_err());
        assert!(
            LaunchParams::new(10.0, 30.0)
                .acceleration(DVec3::new(0.0, f64::NEG_INFINITY, 0.0))
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_mask_presets() {
        assert!(AxisMask::default().is_full());
        assert!(!AxisMask::horizontal_only().is_full());
        assert!(!AxisMask::vertical_only().is_full());
        assert!(!AxisMask::new(1.0, 0.999).is_full());

        let p = AxisMask::horizontal_only().apply(DVec3::new(3.0, 4.0, 5.0));
        assert_eq!(p, DVec3::new(3.0, 0.0, 0.0));
    }
}
