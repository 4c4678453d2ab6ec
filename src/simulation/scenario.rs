//! Build runnable simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! holding the engine with its bodies, the numerical parameters, and the
//! integrator choice. Malformed vectors and a missing pendulum section are
//! reported here; physical values are passed through unchecked.

use std::borrow::Cow;

use crate::configuration::config::{ArmConfig, BodyConfig, EngineKind, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::forces::PairEvaluation;
use crate::simulation::gravity::GravitySim;
use crate::simulation::integrator::Method;
use crate::simulation::params::Parameters;
use crate::simulation::pendulum::PendulumSim;
use crate::simulation::states::{GravityBody, NVec3, PendulumBody};
use crate::simulation::trajectory::Trajectory;

pub struct GravityScenario {
    pub engine: GravitySim,
    pub parameters: Parameters,
    pub method: Method,
}

pub struct PendulumScenario {
    pub engine: PendulumSim,
    pub parameters: Parameters,
}

/// Fully-initialized scenario, ready to `run`
pub enum Scenario {
    Gravity(GravityScenario),
    Pendulum(PendulumScenario),
}

fn vec3(field: &str, index: usize, raw: &[f64]) -> Result<NVec3, SimError> {
    match raw {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::Config(format!(
            "body {index}: `{field}` needs 3 components, got {}",
            raw.len()
        ))),
    }
}

fn gravity_body(index: usize, bc: &BodyConfig) -> Result<GravityBody, SimError> {
    let mut body = GravityBody::new(bc.m, vec3("x", index, &bc.x)?);
    if let Some(v) = &bc.v {
        body = body.with_velocity(vec3("v", index, v)?);
    }
    if let Some(a) = &bc.a {
        body = body.with_acceleration(vec3("a", index, a)?);
    }
    body = body.with_label(bc.label.clone().unwrap_or_else(|| format!("body-{index}")));
    if let Some(size) = bc.size {
        body = body.with_size(size);
    }
    Ok(body)
}

fn pendulum_body(ac: &ArmConfig, default_label: &str) -> PendulumBody {
    let mut body = PendulumBody::new(ac.m, ac.w, ac.length, ac.theta)
        .with_label(ac.label.clone().unwrap_or_else(|| default_label.to_string()));
    if let Some(size) = ac.size {
        body = body.with_size(size);
    }
    body
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p = &cfg.parameters;

        match cfg.engine.kind {
            EngineKind::Gravity => {
                // Bodies: map `BodyConfig` -> runtime `GravityBody`
                let bodies = cfg
                    .bodies
                    .iter()
                    .enumerate()
                    .map(|(i, bc)| gravity_body(i, bc))
                    .collect::<Result<Vec<_>, _>>()?;

                let g = p.g.unwrap_or(GravitySim::DEFAULT_G);
                let pairs = if cfg.engine.parallel {
                    PairEvaluation::Parallel
                } else {
                    PairEvaluation::Serial
                };

                Ok(Scenario::Gravity(GravityScenario {
                    engine: GravitySim::new(bodies, g).with_pairs(pairs),
                    parameters: Parameters { t0: p.t0, t1: p.t1, dt: p.dt, g },
                    method: cfg.engine.integrator,
                }))
            }
            EngineKind::Pendulum => {
                let arms = cfg
                    .pendulum
                    .as_ref()
                    .ok_or_else(|| SimError::Config("pendulum scenario without a `pendulum` section".into()))?;

                let g = p.g.unwrap_or(PendulumSim::DEFAULT_G);
                let engine = PendulumSim::new(
                    pendulum_body(&arms.upper, "upper"),
                    pendulum_body(&arms.lower, "lower"),
                    g,
                );

                Ok(Scenario::Pendulum(PendulumScenario {
                    engine,
                    parameters: Parameters { t0: p.t0, t1: p.t1, dt: p.dt, g },
                }))
            }
        }
    }

    /// Run the engine over the configured interval
    pub fn run(&mut self) -> Result<(), SimError> {
        match self {
            Scenario::Gravity(s) => {
                s.engine.simulate(s.parameters.interval(), s.parameters.dt, s.method)?;
            }
            Scenario::Pendulum(s) => {
                s.engine.simulate(s.parameters.interval(), s.parameters.dt)?;
            }
        }
        Ok(())
    }

    /// Body labels in buffer order
    pub fn labels(&self) -> Vec<String> {
        match self {
            Scenario::Gravity(s) => s.engine.bodies.iter().map(|b| b.label.clone()).collect(),
            Scenario::Pendulum(s) => s.engine.bodies.iter().map(|b| b.label.clone()).collect(),
        }
    }

    /// Position buffer of the last run; pendulum angles are mapped into the
    /// 3d layout on the fly
    pub fn trajectory(&self) -> Option<Cow<'_, Trajectory>> {
        match self {
            Scenario::Gravity(s) => s.engine.trajectory().map(Cow::Borrowed),
            Scenario::Pendulum(s) => s.engine.display_trajectory().map(Cow::Owned),
        }
    }
}
