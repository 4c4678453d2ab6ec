//! Double-pendulum engine
//!
//! Two arms: the first hangs from the origin, the second from the first
//! bob. The state `[θ1, ω1, θ2, ω2]` (radians) is advanced with forward Euler
//! over the coupled equations of motion; Cartesian bob positions are derived
//! from the whole angle history once integration is done.

use log::{debug, info};

use super::integrator::euler_step;
use super::params::Parameters;
use super::states::{NVec3, PendulumBody};
use super::trajectory::{time_grid, Quantity, Trajectory};
use crate::error::SimError;

/// `[θ1, ω1, θ2, ω2]` in radians and radians per second
pub type PendulumState = [f64; 4];

/// Bob positions over time. `(x2, y2)` is absolute, i.e. already offset by
/// the first bob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartesianPath {
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub x2: Vec<f64>,
    pub y2: Vec<f64>,
}

impl CartesianPath {
    /// Map an angle history to bob positions:
    /// x1 = L1 sin θ1, y1 = -L1 cos θ1, x2 = L2 sin θ2 + x1, y2 = -L2 cos θ2 + y1
    pub fn from_states(states: &[PendulumState], l1: f64, l2: f64) -> Self {
        let x1: Vec<f64> = states.iter().map(|s| l1 * s[0].sin()).collect();
        let y1: Vec<f64> = states.iter().map(|s| -l1 * s[0].cos()).collect();
        let x2 = states.iter().zip(&x1).map(|(s, x)| l2 * s[2].sin() + x).collect();
        let y2 = states.iter().zip(&y1).map(|(s, y)| -l2 * s[2].cos() + y).collect();
        Self { x1, y1, x2, y2 }
    }

    pub fn len(&self) -> usize {
        self.x1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x1.is_empty()
    }
}

/// Output of one `PendulumSim::simulate` call
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumRun {
    pub time: Vec<f64>,
    pub dt: f64,
    pub states: Vec<PendulumState>,
    pub cartesian: CartesianPath,
}

impl PendulumRun {
    pub fn num_iterations(&self) -> usize {
        self.time.len()
    }
}

pub struct PendulumSim {
    pub bodies: [PendulumBody; 2], // [upper arm, lower arm]
    pub g: f64, // gravity acceleration
    run: Option<PendulumRun>, // result of the last `simulate`
}

impl PendulumSim {
    /// Gravity used when a scenario does not set one
    pub const DEFAULT_G: f64 = 9.8;

    pub fn new(body1: PendulumBody, body2: PendulumBody, g: f64) -> Self {
        Self {
            bodies: [body1, body2],
            g,
            run: None,
        }
    }

    pub fn run(&self) -> Option<&PendulumRun> {
        self.run.as_ref()
    }

    /// Initial state in radians; angles and angular velocities are both
    /// given in degrees on the bodies
    pub fn initial_state(&self) -> PendulumState {
        let [b1, b2] = &self.bodies;
        [
            b1.theta.to_radians(),
            b1.w.to_radians(),
            b2.theta.to_radians(),
            b2.w.to_radians(),
        ]
    }

    /// Time derivative of `state` under the coupled equations of motion.
    ///
    /// Both angular accelerations divide by `den1 = (M1+M2) L1 - M2 L1 cos²δ`
    /// (scaled by `L2/L1` for the second arm). When it vanishes the result is
    /// non-finite and is returned as is.
    pub fn derivs(&self, state: &PendulumState) -> PendulumState {
        let [b1, b2] = &self.bodies;
        let (m1, m2) = (b1.mass, b2.mass);
        let (l1, l2) = (b1.length, b2.length);
        let g = self.g;
        let [th1, w1, th2, w2] = *state;

        let delta = th2 - th1;
        let (sin_d, cos_d) = delta.sin_cos();
        let m = m1 + m2;

        let den1 = m * l1 - m2 * l1 * cos_d * cos_d;
        let dw1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + m2 * l2 * w2 * w2 * sin_d
            - m * g * th1.sin())
            / den1;

        let den2 = (l2 / l1) * den1;
        let dw2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d
            + m * g * th1.sin() * cos_d
            - m * l1 * w1 * w1 * sin_d
            - m * g * th2.sin())
            / den2;

        [w1, dw1, w2, dw2]
    }

    /// Kinetic plus potential energy of `state`, potential measured from the
    /// pivot height
    pub fn energy(&self, state: &PendulumState) -> f64 {
        let [b1, b2] = &self.bodies;
        let (l1, l2) = (b1.length, b2.length);
        let [th1, w1, th2, w2] = *state;

        let (s1, c1) = th1.sin_cos();
        let (s2, c2) = th2.sin_cos();

        let v1x = l1 * w1 * c1;
        let v1y = l1 * w1 * s1;
        let v2x = v1x + l2 * w2 * c2;
        let v2y = v1y + l2 * w2 * s2;

        let y1 = -l1 * c1;
        let y2 = y1 - l2 * c2;

        let kinetic = 0.5 * b1.mass * (v1x * v1x + v1y * v1y) + 0.5 * b2.mass * (v2x * v2x + v2y * v2y);
        let potential = self.g * (b1.mass * y1 + b2.mass * y2);
        kinetic + potential
    }

    /// Integrate over the closed interval `[t0, t1]` with forward Euler
    pub fn simulate(&mut self, interval: [f64; 2], dt: f64) -> Result<&PendulumRun, SimError> {
        let params = Parameters {
            t0: interval[0],
            t1: interval[1],
            dt,
            g: self.g,
        };
        params.validate()?;

        let time = time_grid(params.t0, params.t1, params.dt);
        let steps = time.len();
        info!("pendulum: {} timesteps, dt = {}", steps, dt);

        let mut states: Vec<PendulumState> = Vec::with_capacity(steps);
        states.push(self.initial_state());

        let report_every = (steps / 10).max(1);
        for step in 1..steps {
            let prev = &states[step - 1];
            let next = euler_step(prev, &self.derivs(prev), dt);
            states.push(next);
            if step % report_every == 0 {
                debug!("pendulum: {}/{} timesteps", step, steps - 1);
            }
        }

        let cartesian = CartesianPath::from_states(&states, self.bodies[0].length, self.bodies[1].length);

        Ok(&*self.run.insert(PendulumRun {
            time,
            dt,
            states,
            cartesian,
        }))
    }

    /// Bob positions of the last run in the 3d buffer layout used by
    /// renderers: x on axis 0, y on axis 2, axis 1 left at zero.
    /// Velocities and accelerations stay zero.
    pub fn display_trajectory(&self) -> Option<Trajectory> {
        let run = self.run.as_ref()?;
        let masses = self.bodies.iter().map(|b| b.mass).collect();
        let mut traj = Trajectory::zeros(masses, run.time.clone(), run.dt);

        let path = &run.cartesian;
        for step in 0..path.len() {
            traj.set(Quantity::Position, 0, step, NVec3::new(path.x1[step], 0.0, path.y1[step]));
            traj.set(Quantity::Position, 1, step, NVec3::new(path.x2[step], 0.0, path.y2[step]));
        }
        Some(traj)
    }
}
