//! Numerical parameters shared by both engines
//!
//! `Parameters` holds the run settings:
//! - the closed time interval `[t0, t1]`,
//! - the fixed step size `dt`,
//! - the gravitational constant / gravity acceleration `g`

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub t0: f64, // time start
    pub t1: f64, // time end (inclusive)
    pub dt: f64, // step size
    pub g: f64, // gravitational constant (n-body) or gravity (pendulum)
}

impl Parameters {
    /// Reject step sizes and intervals the time grid cannot be built from
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        // span must stay finite or the time grid cannot be sized
        let span = (self.t1 - self.t0) / self.dt;
        if !self.t0.is_finite() || !self.t1.is_finite() || !span.is_finite() || self.t1 < self.t0 {
            return Err(SimError::InvalidInterval {
                start: self.t0,
                end: self.t1,
            });
        }
        Ok(())
    }

    pub fn interval(&self) -> [f64; 2] {
        [self.t0, self.t1]
    }
}
