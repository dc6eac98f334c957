use nalgebra::{Vector2, Vector3};

use crate::control::{Controller, PidController};
use crate::dynamics::body::{Body, BodyBuilder};
use crate::dynamics::state::SimConfig;
use crate::error::SimError;
use super::runner::Simulator;

// ---------------------------------------------------------------------------
// Run parameters: everything a front end supplies for one run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RunParams {
    pub mass: f64,
    pub radius: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub heading: f64,
    pub drag: Vector3<f64>,
    pub target: Vector2<f64>,
    pub wind: Vector2<f64>,
    pub controller: PidController,
    pub config: SimConfig,
}

impl Default for RunParams {
    /// Skydiver released upside down 122 m above the origin, steering to
    /// (-7, -15) in still air.
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 0.05,
            position: Vector3::new(0.0, 0.0, 122.0),
            velocity: Vector3::zeros(),
            heading: 181.0,
            drag: Vector3::zeros(),
            target: Vector2::new(-7.0, -15.0),
            wind: Vector2::zeros(),
            controller: PidController::new(),
            config: SimConfig::default(),
        }
    }
}

impl RunParams {
    /// Reject inputs that would make the integration degenerate.
    ///
    /// Optional: the simulator itself never validates and will happily
    /// divide by a zero mass.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::configuration(format!("mass must be positive, got {}", self.mass)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::configuration(format!("radius must be positive, got {}", self.radius)));
        }
        let dt = self.config.time_step;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::configuration(format!("time step must be positive, got {}", dt)));
        }

        let vectors = [
            ("position", self.position.iter().all(|v| v.is_finite())),
            ("velocity", self.velocity.iter().all(|v| v.is_finite())),
            ("drag", self.drag.iter().all(|v| v.is_finite())),
            ("target", self.target.iter().all(|v| v.is_finite())),
            ("wind", self.wind.iter().all(|v| v.is_finite())),
        ];
        if let Some((name, _)) = vectors.iter().find(|(_, ok)| !ok) {
            return Err(SimError::configuration(format!("{} must be finite", name)));
        }
        if !self.heading.is_finite() {
            return Err(SimError::configuration("heading must be finite"));
        }

        let c = &self.controller;
        if c.force_limit < 0.0 || c.angular_force_limit < 0.0 {
            return Err(SimError::configuration("force limits must be non-negative"));
        }
        Ok(())
    }

    pub fn body(&self) -> Body {
        BodyBuilder::new()
            .mass(self.mass)
            .radius(self.radius)
            .position(self.position)
            .velocity(self.velocity)
            .heading(self.heading)
            .drag(self.drag)
            .target(self.target)
            .build()
    }

    pub fn into_simulator(self) -> Simulator {
        let body = self.body();
        Simulator::with_controller(body, self.wind, self.config, self.controller)
    }
}

/// Validate, build, and run with the PID controller from `params`.
/// Returns the finished simulator with its recorded series.
pub fn simulate(params: &RunParams) -> Result<Simulator, SimError> {
    params.validate()?;
    let mut sim = params.clone().into_simulator();
    sim.run()?;
    Ok(sim)
}

/// Same as [`simulate`] but steered by a custom controller.
pub fn simulate_with(
    params: &RunParams,
    controller: impl Controller + 'static,
) -> Result<Simulator, SimError> {
    params.validate()?;
    let mut sim = Simulator::with_controller(params.body(), params.wind, params.config.clone(), controller);
    sim.run()?;
    Ok(sim)
}
