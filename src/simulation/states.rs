//! Initial-condition records for the two simulation engines.
//!
//! Defines the body types read by the engines at timestep 0:
//! - `GravityBody`  point mass with position/velocity/acceleration (3d)
//! - `PendulumBody` one arm of a double pendulum (angles in degrees)
//!
//! Bodies are never validated and never mutated by an engine; negative masses
//! or zero lengths simply propagate into the arithmetic.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct GravityBody {
    pub mass: f64, // mass
    pub position: NVec3, // initial position
    pub velocity: NVec3, // initial velocity
    pub acceleration: NVec3, // initial acceleration
    pub label: String, // legend name
    pub size: f64, // marker size for display
}

impl GravityBody {
    /// Body at rest at `position`, labelled "body" with unit size
    pub fn new(mass: f64, position: NVec3) -> Self {
        Self {
            mass,
            position,
            velocity: NVec3::zeros(),
            acceleration: NVec3::zeros(),
            label: String::from("body"),
            size: 1.0,
        }
    }

    pub fn with_velocity(mut self, velocity: NVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: NVec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendulumBody {
    pub mass: f64, // bob mass
    pub w: f64, // initial angular velocity (deg/s)
    pub length: f64, // rod/rope length
    pub theta: f64, // initial angle from the downward vertical (deg)
    pub label: String, // legend name
    pub size: f64, // marker size, defaults to the mass
}

impl PendulumBody {
    /// Arm with `size` defaulting to `mass`
    pub fn new(mass: f64, w: f64, length: f64, theta: f64) -> Self {
        Self {
            mass,
            w,
            length,
            theta,
            label: String::from("body"),
            size: mass,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
