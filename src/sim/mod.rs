//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` handed to each step
//! - No rendering or platform dependencies
//! - Identical inputs give bit-identical trajectories

pub mod analytic;
pub mod flight;
pub mod shared;
pub mod state;
pub mod tick;

pub use analytic::AnalyticSolution;
pub use flight::{Flight, FlightEvent, FlightPhase, is_landed};
pub use shared::SharedProjectile;
pub use state::{AxisMask, LaunchParams, ProjectileState};
