//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – which engine runs, and with which integrator
//! - [`ParametersConfig`] – time interval, step size and gravity constant
//! - [`BodyConfig`]       – initial state for each body of a gravity run
//! - [`PendulumConfig`]   – the two arms of a pendulum run
//! - [`ExportConfig`]     – row stride for table output
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body gravity scenario:
//!
//! ```yaml
//! engine:
//!   kind: gravity           # or pendulum
//!   integrator: verlet      # or eqMov
//!   parallel: false         # rayon pair evaluation
//!
//! parameters:
//!   t0: 0.0
//!   t1: 10.0                # inclusive
//!   dt: 0.01
//!   G: 1.0                  # defaults per engine when omitted
//!
//! bodies:
//!   - m: 1.0
//!     x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, -0.7071067811865476, 0.0 ]
//!     label: left
//!   - m: 1.0
//!     x: [  0.5, 0.0, 0.0 ]
//!     v: [  0.0, 0.7071067811865476, 0.0 ]
//!     label: right
//! ```
//!
//! A pendulum scenario replaces `bodies` with:
//!
//! ```yaml
//! pendulum:
//!   upper: { m: 1.0, length: 1.0, theta: 120.0 }
//!   lower: { m: 1.0, length: 1.0, theta: -10.0, w: 0.0 }
//! ```

use serde::Deserialize;

use crate::simulation::integrator::Method;

/// Which engine a scenario drives
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Gravity,
    Pendulum,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub kind: EngineKind, // gravity or pendulum
    #[serde(default)]
    pub integrator: Method, // n-body stepping scheme, ignored for the pendulum
    #[serde(default)]
    pub parallel: bool, // `true` - evaluate force pairs on the rayon pool
}

fn default_t0() -> f64 {
    0.0
}

/// Time grid and physical constant for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_t0")]
    pub t0: f64, // time start
    pub t1: f64, // time end, inclusive
    pub dt: f64, // step size
    #[serde(rename = "G", default)]
    pub g: Option<f64>, // gravitational constant or gravity, engine default when absent
}

/// Initial state of one gravity body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64, // mass
    pub x: Vec<f64>, // position, 3 components
    #[serde(default)]
    pub v: Option<Vec<f64>>, // velocity, zero when absent
    #[serde(default)]
    pub a: Option<Vec<f64>>, // acceleration, zero when absent
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
}

/// One pendulum arm, angles in degrees
#[derive(Deserialize, Debug, Clone)]
pub struct ArmConfig {
    pub m: f64, // bob mass
    pub length: f64, // rod length
    pub theta: f64, // initial angle (deg)
    #[serde(default)]
    pub w: f64, // initial angular velocity (deg/s)
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub size: Option<f64>, // defaults to the mass
}

#[derive(Deserialize, Debug, Clone)]
pub struct PendulumConfig {
    pub upper: ArmConfig, // hangs from the origin
    pub lower: ArmConfig, // hangs from the upper bob
}

fn default_every() -> usize {
    1
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_every")]
    pub every: usize, // keep one row per `every` timesteps
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            every: default_every(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // gravity bodies
    #[serde(default)]
    pub pendulum: Option<PendulumConfig>, // pendulum arms
    #[serde(default)]
    pub export: ExportConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
