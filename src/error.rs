//! Error type for the simulation library.
//!
//! Only structural problems are reported here. Arithmetic singularities
//! (coincident bodies, a vanishing pendulum denominator) are not errors: they
//! show up as non-finite values in the trajectory.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("unsupported integration method `{0}` (expected `verlet` or `eqMov`)")]
    UnsupportedMethod(String),

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("invalid time interval [{start}, {end}]")]
    InvalidInterval { start: f64, end: f64 },

    #[error("scenario configuration: {0}")]
    Config(String),
}
