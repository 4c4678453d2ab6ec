//! Dense trajectory buffer shared by both engines
//!
//! A `Trajectory` stores positions, velocities and accelerations for every
//! body, coordinate and timestep, shaped `[num_bodies, 3, num_iterations]` and
//! laid out row-major in flat vectors so that each coordinate's time series is
//! one contiguous slice.
//!
//! Engines fill the buffer step by step; everything outside the crate only
//! gets a shared borrow.

use super::states::NVec3;

/// Which of the three parallel arrays to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
}

/// Closed time grid `[t0, t1]` sampled every `dt`
///
/// Holds `ceil((t1 - t0) / dt) + 1` samples with `time[k] = t0 + k * dt`.
/// A relative tolerance of 1e-9 is removed before the ceiling so that
/// rounding noise in the quotient does not add a trailing sample.
pub fn time_grid(t0: f64, t1: f64, dt: f64) -> Vec<f64> {
    let span = (t1 - t0) / dt;
    let samples = (span - span.abs() * 1e-9).ceil().max(0.0) as usize + 1;
    (0..samples).map(|k| t0 + k as f64 * dt).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions: Vec<f64>, // [body, axis, step]
    velocities: Vec<f64>, // [body, axis, step]
    accelerations: Vec<f64>, // [body, axis, step]
    masses: Vec<f64>, // [body]
    time: Vec<f64>, // [step]
    dt: f64, // step size used to build `time`
}

impl Trajectory {
    /// Zero-filled buffer for `masses.len()` bodies over `time`
    pub(crate) fn zeros(masses: Vec<f64>, time: Vec<f64>, dt: f64) -> Self {
        let len = masses.len() * 3 * time.len();
        Self {
            positions: vec![0.0; len],
            velocities: vec![0.0; len],
            accelerations: vec![0.0; len],
            masses,
            time,
            dt,
        }
    }

    pub fn num_bodies(&self) -> usize {
        self.masses.len()
    }

    pub fn num_iterations(&self) -> usize {
        self.time.len()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    #[inline]
    fn index(&self, body: usize, axis: usize, step: usize) -> usize {
        (body * 3 + axis) * self.time.len() + step
    }

    fn array(&self, quantity: Quantity) -> &[f64] {
        match quantity {
            Quantity::Position => &self.positions,
            Quantity::Velocity => &self.velocities,
            Quantity::Acceleration => &self.accelerations,
        }
    }

    fn array_mut(&mut self, quantity: Quantity) -> &mut [f64] {
        match quantity {
            Quantity::Position => &mut self.positions,
            Quantity::Velocity => &mut self.velocities,
            Quantity::Acceleration => &mut self.accelerations,
        }
    }

    /// Whole `[num_bodies, 3, num_iterations]` array, flattened row-major
    pub fn raw(&self, quantity: Quantity) -> &[f64] {
        self.array(quantity)
    }

    /// Time series of one coordinate of one body
    pub fn coordinate(&self, quantity: Quantity, body: usize, axis: usize) -> &[f64] {
        let start = self.index(body, axis, 0);
        &self.array(quantity)[start..start + self.time.len()]
    }

    /// 3-vector of `quantity` for `body` at `step`
    pub fn get(&self, quantity: Quantity, body: usize, step: usize) -> NVec3 {
        let data = self.array(quantity);
        NVec3::new(
            data[self.index(body, 0, step)],
            data[self.index(body, 1, step)],
            data[self.index(body, 2, step)],
        )
    }

    pub(crate) fn set(&mut self, quantity: Quantity, body: usize, step: usize, value: NVec3) {
        let idx = [
            self.index(body, 0, step),
            self.index(body, 1, step),
            self.index(body, 2, step),
        ];
        let data = self.array_mut(quantity);
        for (axis, i) in idx.into_iter().enumerate() {
            data[i] = value[axis];
        }
    }

    pub fn position(&self, body: usize, step: usize) -> NVec3 {
        self.get(Quantity::Position, body, step)
    }

    pub fn velocity(&self, body: usize, step: usize) -> NVec3 {
        self.get(Quantity::Velocity, body, step)
    }

    pub fn acceleration(&self, body: usize, step: usize) -> NVec3 {
        self.get(Quantity::Acceleration, body, step)
    }

    /// Positions of every body at `step`, in body order
    pub fn positions_at(&self, step: usize) -> Vec<NVec3> {
        (0..self.num_bodies()).map(|b| self.position(b, step)).collect()
    }

    /// Distance between bodies `a` and `b` at `step`
    pub fn separation(&self, a: usize, b: usize, step: usize) -> f64 {
        (self.position(b, step) - self.position(a, step)).norm()
    }
}
