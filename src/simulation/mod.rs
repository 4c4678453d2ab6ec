pub mod states;
pub mod params;
pub mod trajectory;
pub mod forces;
pub mod integrator;
pub mod gravity;
pub mod pendulum;
pub mod scenario;
