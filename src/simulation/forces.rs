//! Force contributors for the n-body engine
//!
//! Defines the force-law trait, a collection of force terms, and direct
//! Newtonian gravity evaluated over unique pairs (serially or with rayon)

use rayon::prelude::*;

use crate::simulation::states::NVec3;

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceLaw + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for bodies at `positions` with `masses`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        for term in &self.terms {
            term.forces(positions, masses, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources acting on a set of point masses.
/// Implementations add their contribution into `out[i]` for each body
pub trait ForceLaw {
    fn forces(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]);
}

/// How the unique pairs of a force evaluation are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairEvaluation {
    /// Nested i < j loop on the calling thread
    #[default]
    Serial,
    /// Outer index split across the rayon pool, per-thread accumulators
    /// summed at the end; every pair is still evaluated exactly once
    Parallel,
}

/// Gravitational force exerted on body i by body j.
///
/// `r = pos_j - pos_i`, magnitude `G m_i m_j / |r|^2` along `r / |r|`.
/// The force on j from i is the exact negation. Coincident positions give
/// NaN components (0 / 0), which is left to propagate.
#[inline]
pub fn pair_force(pos_i: NVec3, pos_j: NVec3, m_i: f64, m_j: f64, g: f64) -> NVec3 {
    let r = pos_j - pos_i;
    let r_norm = r.norm();
    let magnitude = g * m_i * m_j / (r_norm * r_norm);
    r * (magnitude / r_norm)
}

/// Newtonian gravity without softening (direct O(N^2) pair sum)
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub pairs: PairEvaluation, // serial or rayon pair loop
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self {
            g,
            pairs: PairEvaluation::Serial,
        }
    }

    pub fn with_pairs(mut self, pairs: PairEvaluation) -> Self {
        self.pairs = pairs;
        self
    }

    fn serial(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        let n = positions.len();

        // Loop over each unordered pair (i, j) with i < j:
        // i is pulled along +r, j along -r
        for i in 0..n {
            for j in (i + 1)..n {
                let f = pair_force(positions[i], positions[j], masses[i], masses[j], self.g);
                out[i] += f;
                out[j] -= f;
            }
        }
    }

    fn parallel(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        let n = positions.len();

        let total = (0..n)
            .into_par_iter()
            .fold(
                || vec![NVec3::zeros(); n],
                |mut acc, i| {
                    for j in (i + 1)..n {
                        let f = pair_force(positions[i], positions[j], masses[i], masses[j], self.g);
                        acc[i] += f;
                        acc[j] -= f;
                    }
                    acc
                },
            )
            .reduce(
                || vec![NVec3::zeros(); n],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        *x += y;
                    }
                    a
                },
            );

        for (o, f) in out.iter_mut().zip(total) {
            *o += f;
        }
    }
}

impl ForceLaw for NewtonianGravity {
    fn forces(&self, positions: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        if positions.len() < 2 { // Nothing to pair up
            return;
        }
        match self.pairs {
            PairEvaluation::Serial => self.serial(positions, masses, out),
            PairEvaluation::Parallel => self.parallel(positions, masses, out),
        }
    }
}
