//! Error types for the simulation boundary

use thiserror::Error;

/// Errors surfaced by the integrator, its orchestrator and the frame clock
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A caller supplied a value the integrator cannot accept
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A step was attempted while another step on the same state was in progress
    #[error("projectile state is already being stepped")]
    ConcurrentMutation,
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidInput(msg.into())
    }
}

/// Reject NaN and infinities with a named field
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(format!("{name} must be finite, got {value}")))
    }
}
