use std::num::NonZeroUsize;

use nalgebra::{Vector2, Vector3};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const GRAVITY: f64 = -9.81; // m/s^2, along +z (up)

// ---------------------------------------------------------------------------
// Net acceleration produced by the force model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetAccel {
    pub linear: Vector3<f64>, // m/s^2
    pub angular: f64,         // deg/s^2
}

impl NetAccel {
    pub fn new(ax: f64, ay: f64, az: f64, angular: f64) -> Self {
        Self { linear: Vector3::new(ax, ay, az), angular }
    }
}

// ---------------------------------------------------------------------------
// Commanded actuator output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceCommand {
    pub xy: Vector2<f64>, // N, body frame
    pub angular: f64,     // N·m
}

impl Default for ForceCommand {
    fn default() -> Self {
        Self { xy: Vector2::zeros(), angular: 0.0 }
    }
}

// ---------------------------------------------------------------------------
// Error snapshot read by controllers
// ---------------------------------------------------------------------------

/// Tracking errors of a body relative to its target, as of the last
/// error update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorTerms {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,       // absolute horizontal velocity
    pub velocity_error: Vector2<f64>,
    pub heading: f64,                 // deg, (-180, 180]
    pub angular_velocity: f64,        // deg/s
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub time_step: f64,
    /// Correct every N physics ticks.
    pub control_divisor: NonZeroUsize,
    /// Abort with an error instead of looping forever if the body never lands.
    pub max_steps: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,  // 100 Hz
            control_divisor: NonZeroUsize::MIN,
            max_steps: None,
        }
    }
}
