//! N-body gravity engine
//!
//! `GravitySim` owns the bodies' initial conditions and, after `simulate`,
//! the filled [`Trajectory`]. Each call allocates a fresh buffer, seeds
//! timestep 0 from the bodies and then advances one timestep at a time with
//! the chosen [`Method`].

use log::{debug, info};

use super::forces::{ForceSet, NewtonianGravity, PairEvaluation};
use super::integrator::Method;
use super::params::Parameters;
use super::states::GravityBody;
use super::trajectory::{time_grid, Quantity, Trajectory};
use crate::error::SimError;

pub struct GravitySim {
    pub bodies: Vec<GravityBody>, // initial conditions, read at timestep 0 only
    pub g: f64, // gravitational constant
    pub pairs: PairEvaluation, // serial or parallel pair loop
    trajectory: Option<Trajectory>, // result of the last `simulate`
}

impl GravitySim {
    /// Gravitational constant used when a scenario does not set one
    pub const DEFAULT_G: f64 = 6.674184;

    pub fn new(bodies: Vec<GravityBody>, g: f64) -> Self {
        Self {
            bodies,
            g,
            pairs: PairEvaluation::Serial,
            trajectory: None,
        }
    }

    pub fn with_pairs(mut self, pairs: PairEvaluation) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn num_of_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Trajectory of the last successful `simulate`, if any
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    fn forces(&self) -> ForceSet {
        ForceSet::new().with(NewtonianGravity::new(self.g).with_pairs(self.pairs))
    }

    /// Same as [`GravitySim::simulate`] with the method given by name
    /// (`"verlet"` or `"eqMov"`); any other name is rejected
    pub fn simulate_named(
        &mut self,
        interval: [f64; 2],
        dt: f64,
        method: &str,
    ) -> Result<&Trajectory, SimError> {
        let method: Method = method.parse()?;
        self.simulate(interval, dt, method)
    }

    /// Integrate over the closed interval `[t0, t1]` with fixed step `dt`.
    ///
    /// Coincident bodies are not detected: the pair force divides by a zero
    /// distance and the resulting NaNs propagate through later timesteps.
    pub fn simulate(
        &mut self,
        interval: [f64; 2],
        dt: f64,
        method: Method,
    ) -> Result<&Trajectory, SimError> {
        let params = Parameters {
            t0: interval[0],
            t1: interval[1],
            dt,
            g: self.g,
        };
        params.validate()?;

        let time = time_grid(params.t0, params.t1, params.dt);
        let masses = self.bodies.iter().map(|b| b.mass).collect();
        let mut traj = Trajectory::zeros(masses, time, dt);

        // Initial conditions at timestep 0
        for (i, b) in self.bodies.iter().enumerate() {
            traj.set(Quantity::Position, i, 0, b.position);
            traj.set(Quantity::Velocity, i, 0, b.velocity);
            traj.set(Quantity::Acceleration, i, 0, b.acceleration);
        }

        let steps = traj.num_iterations();
        info!(
            "gravity: {} bodies, {} timesteps, dt = {}, method = {}",
            self.bodies.len(),
            steps,
            dt,
            method
        );

        let forces = self.forces();
        let report_every = (steps / 10).max(1);
        for step in 1..steps {
            method.advance(&mut traj, &forces, step);
            if step % report_every == 0 {
                debug!("gravity: {}/{} timesteps", step, steps - 1);
            }
        }

        info!("gravity: finished at t = {}", traj.time().last().copied().unwrap_or(params.t0));
        Ok(&*self.trajectory.insert(traj))
    }

    /// Kinetic plus pairwise potential energy at `step` of the last run.
    ///
    /// Uses the stored velocities, so for `Method::Verlet` (where stored
    /// velocities are only `a dt`) the kinetic term is not meaningful past
    /// timestep 1.
    pub fn total_energy(&self, step: usize) -> Option<f64> {
        let traj = self.trajectory.as_ref()?;
        if step >= traj.num_iterations() {
            return None;
        }
        let masses = traj.masses();
        let n = traj.num_bodies();

        let kinetic: f64 = (0..n)
            .map(|i| 0.5 * masses[i] * traj.velocity(i, step).norm_squared())
            .sum();

        let mut potential = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                potential -= self.g * masses[i] * masses[j] / traj.separation(i, j, step);
            }
        }
        Some(kinetic + potential)
    }
}
