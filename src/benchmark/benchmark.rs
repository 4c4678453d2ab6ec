use std::time::Instant;

use crate::error::SimError;
use crate::simulation::forces::PairEvaluation;
use crate::simulation::gravity::GravitySim;
use crate::simulation::integrator::Method;
use crate::simulation::states::{GravityBody, NVec3};

/// Helper to build a deterministic cloud of `n` unit masses
pub fn make_bodies(n: usize) -> Vec<GravityBody> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec3::new(
                (i_f * 0.37).sin() * 5.0 + i_f * 1e-3,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            );
            GravityBody::new(1.0, x).with_size(0.01)
        })
        .collect()
}

/// Time `steps` verlet timesteps of `simulate` for one body count and pair mode.
/// Returns seconds per timestep.
pub fn time_simulate(n: usize, steps: usize, pairs: PairEvaluation) -> Result<f64, SimError> {
    let dt = 0.001;
    let mut sim = GravitySim::new(make_bodies(n), 0.1).with_pairs(pairs);

    let t0 = Instant::now();
    // interval holds `steps + 1` samples, timestep 0 is free
    sim.simulate([0.0, steps as f64 * dt], dt, Method::Verlet)?;
    Ok(t0.elapsed().as_secs_f64() / steps.max(1) as f64)
}

/// Benchmark serial vs parallel pair evaluation for a range of n
/// Paste output directly into excel to graph
pub fn bench_gravity() -> Result<(), SimError> {
    println!("N,serial_ms,parallel_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 4 };

        // Warm-up the rayon pool once
        time_simulate(n, 1, PairEvaluation::Parallel)?;

        let serial = time_simulate(n, steps, PairEvaluation::Serial)? * 1000.0;
        let parallel = time_simulate(n, steps, PairEvaluation::Parallel)? * 1000.0;

        println!("{},{:.6},{:.6}", n, serial, parallel);
    }
    Ok(())
}
