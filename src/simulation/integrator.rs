//! Fixed-step time integrators
//!
//! N-body: the "eqMov" semi-implicit Euler variant and position Verlet, both
//! writing one timestep of a [`Trajectory`] from the timesteps before it.
//! Pendulum: a forward Euler update on a fixed-size state vector.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::forces::ForceSet;
use super::states::NVec3;
use super::trajectory::{Quantity, Trajectory};
use crate::error::SimError;

/// Which n-body stepping scheme to use
/// `integrator: "verlet"` or `integrator: "eqMov"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[serde(rename = "verlet")] // Position Verlet, timestep 1 bootstrapped with one eqMov step
    #[default]
    Verlet,

    #[serde(rename = "eqMov")] // Equations of motion with the previous velocity in the drift term
    EqMov,
}

impl Method {
    /// Advance the trajectory to `step`, reading only earlier timesteps.
    ///
    /// Verlet needs two prior positions, so step 1 falls back to an eqMov
    /// step regardless of the selected method.
    pub fn advance(self, traj: &mut Trajectory, forces: &ForceSet, step: usize) {
        match self {
            Method::EqMov => equations_of_motion_step(traj, forces, step),
            Method::Verlet if step < 2 => equations_of_motion_step(traj, forces, step),
            Method::Verlet => verlet_step(traj, forces, step),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Verlet => "verlet",
            Method::EqMov => "eqMov",
        }
    }
}

impl FromStr for Method {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verlet" => Ok(Method::Verlet),
            "eqMov" => Ok(Method::EqMov),
            other => Err(SimError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accelerations from the positions stored at `step`
fn accelerations_from(traj: &Trajectory, forces: &ForceSet, step: usize) -> Vec<NVec3> {
    let positions = traj.positions_at(step);
    let mut out = vec![NVec3::zeros(); positions.len()];
    forces.accumulate_forces(&positions, traj.masses(), &mut out);
    for (a, m) in out.iter_mut().zip(traj.masses()) {
        *a /= *m;
    }
    out
}

/// One "eqMov" step, writing timestep `t` from `t - 1`
///
/// a_t = F(x_{t-1}) / m
/// v_t = v_{t-1} + a_t dt
/// x_t = x_{t-1} + v_{t-1} dt + a_t dt^2 / 2
pub fn equations_of_motion_step(traj: &mut Trajectory, forces: &ForceSet, t: usize) {
    let dt = traj.dt();
    let accels = accelerations_from(traj, forces, t - 1);

    for (b, a) in accels.into_iter().enumerate() {
        let x_prev = traj.position(b, t - 1);
        let v_prev = traj.velocity(b, t - 1);

        traj.set(Quantity::Acceleration, b, t, a);
        traj.set(Quantity::Velocity, b, t, v_prev + a * dt);
        // drift uses the old velocity, not v_t
        traj.set(Quantity::Position, b, t, x_prev + v_prev * dt + a * (dt * dt / 2.0));
    }
}

/// One position-Verlet step, writing timestep `t >= 2` from `t - 1` and `t - 2`
///
/// a_t = F(x_{t-1}) / m
/// x_t = a_t dt^2 - x_{t-2} + 2 x_{t-1}
/// v_t = v_t + a_t dt
///
/// `v_t` is still zero when the velocity update runs, so the stored velocity
/// is just `a_t dt`. This is an approximation, not a velocity-Verlet estimate.
pub fn verlet_step(traj: &mut Trajectory, forces: &ForceSet, t: usize) {
    let dt = traj.dt();
    let accels = accelerations_from(traj, forces, t - 1);

    for (b, a) in accels.into_iter().enumerate() {
        let x_prev = traj.position(b, t - 1);
        let x_prev2 = traj.position(b, t - 2);
        let v_t = traj.velocity(b, t);

        traj.set(Quantity::Acceleration, b, t, a);
        traj.set(Quantity::Position, b, t, a * (dt * dt) - x_prev2 + 2.0 * x_prev);
        traj.set(Quantity::Velocity, b, t, v_t + a * dt);
    }
}

// =========================================================================================
// pendulum stuff below
// =========================================================================================

/// Forward Euler: `state + rate * dt`, component-wise
pub fn euler_step<const N: usize>(state: &[f64; N], rate: &[f64; N], dt: f64) -> [f64; N] {
    let mut next = *state;
    for (x, r) in next.iter_mut().zip(rate) {
        *x += r * dt;
    }
    next
}
