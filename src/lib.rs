pub mod error;
pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{GravityBody, PendulumBody, NVec3};
pub use simulation::params::Parameters;
pub use simulation::trajectory::{time_grid, Quantity, Trajectory};
pub use simulation::forces::{pair_force, ForceLaw, ForceSet, NewtonianGravity, PairEvaluation};
pub use simulation::integrator::Method;
pub use simulation::gravity::GravitySim;
pub use simulation::pendulum::{CartesianPath, PendulumRun, PendulumSim, PendulumState};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, EngineKind, ParametersConfig, BodyConfig, ArmConfig, PendulumConfig, ExportConfig, ScenarioConfig};

pub use export::table::TrajectoryTable;

pub use benchmark::benchmark::bench_gravity;
