use nalgebra::{Vector2, Vector3};
use tracing::{info, trace, warn};

use crate::control::{Controller, Integrals, PidController};
use crate::dynamics::body::Body;
use crate::dynamics::forces::accelerate;
use crate::dynamics::state::{SimConfig, GRAVITY};
use crate::error::SimError;
use super::record::{Sample, Series};

// ---------------------------------------------------------------------------
// Flight phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Altitude above zero.
    Running,
    /// Altitude at or below zero. Terminal.
    Landed,
}

impl FlightPhase {
    pub fn of(body: &Body) -> Self {
        if body.altitude() > 0.0 {
            FlightPhase::Running
        } else {
            FlightPhase::Landed
        }
    }
}

/// Final state reported when a run terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub steps: usize,
    pub time: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub position_error: Vector2<f64>,
    pub heading_error: f64,
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// Drives one body from release to the ground.
///
/// A simulator is single-use: it owns the body, the controller, the
/// integral accumulators, and the recorded series for exactly one run.
/// Construct a fresh one for every run.
pub struct Simulator {
    pub body: Body,
    pub wind: Vector2<f64>, // m/s^2 horizontal wind acceleration
    pub config: SimConfig,
    pub step_count: usize,
    pub series: Series,
    integrals: Integrals,
    controller: Box<dyn Controller>,
}

impl Simulator {
    /// Simulator steered by the default PID controller.
    pub fn new(body: Body, wind: Vector2<f64>, config: SimConfig) -> Self {
        Self::with_controller(body, wind, config, PidController::new())
    }

    pub fn with_controller(
        body: Body,
        wind: Vector2<f64>,
        config: SimConfig,
        controller: impl Controller + 'static,
    ) -> Self {
        // Free-fall tick count; a capacity hint only.
        let ticks = ((2.0 * body.altitude().max(0.0) / -GRAVITY).sqrt() / config.time_step) as usize;
        let series = Series::with_capacity(ticks.saturating_add(1).min(1 << 20));

        Self {
            body,
            wind,
            config,
            step_count: 0,
            series,
            integrals: Integrals::default(),
            controller: Box::new(controller),
        }
    }

    pub fn phase(&self) -> FlightPhase {
        FlightPhase::of(&self.body)
    }

    pub fn time(&self) -> f64 {
        self.config.time_step * self.step_count as f64
    }

    pub fn integrals(&self) -> &Integrals {
        &self.integrals
    }

    pub fn controller_name(&self) -> &str {
        self.controller.name()
    }

    /// Run until the body reaches the ground.
    ///
    /// No interpolation to the exact crossing: the final altitude may be up
    /// to one step below zero. Without `max_steps` this never returns if
    /// the body never descends.
    pub fn run(&mut self) -> Result<Landing, SimError> {
        self.integrals.reset();
        self.controller.reset();

        info!(
            controller = self.controller.name(),
            altitude = self.body.altitude(),
            time_step = self.config.time_step,
            "starting run"
        );

        while self.phase() == FlightPhase::Running {
            if let Some(limit) = self.config.max_steps {
                if self.step_count >= limit {
                    warn!(steps = self.step_count, altitude = self.body.altitude(), "step limit reached");
                    return Err(SimError::StepLimit {
                        steps: self.step_count,
                        altitude: self.body.altitude(),
                    });
                }
            }
            self.tick();
        }

        let landing = self.landing();
        info!(
            steps = landing.steps,
            time = landing.time,
            error_x = landing.position_error.x,
            error_y = landing.position_error.y,
            heading_error = landing.heading_error,
            "landed"
        );
        Ok(landing)
    }

    /// Advance exactly one fixed time step and record it.
    ///
    /// Exposed for externally driven loops; `run` is built on it. Returns
    /// `None` without touching any state once the body has landed.
    pub fn tick(&mut self) -> Option<Sample> {
        if self.phase() == FlightPhase::Landed {
            return None;
        }

        let accel = accelerate(&self.body, &self.wind);
        self.body.step(&accel, self.config.time_step);
        self.step_count += 1;

        self.body.update_errors();

        if self.step_count % self.config.control_divisor.get() == 0 {
            let cmd = self
                .controller
                .command(&self.body.errors(), &self.integrals.terms());
            self.body.apply_command(&cmd);
        }

        self.integrals.accumulate(
            self.body.position_error.x,
            self.body.position_error.y,
            self.body.heading_error,
        );

        let time = self.time();
        let sample = Sample {
            time,
            position: self.body.position,
            velocity: self.body.velocity,
            accel: accel.linear,
            heading: self.body.heading,
            angular_velocity: self.body.angular_velocity,
            angular_accel: accel.angular,
            command: self.body.command(),
        };
        self.series.push(&sample);

        trace!("{}", self.body.status_line(time));
        Some(sample)
    }

    pub fn landing(&self) -> Landing {
        Landing {
            steps: self.step_count,
            time: self.time(),
            position: self.body.position,
            velocity: self.body.velocity,
            position_error: self.body.position_error,
            heading_error: self.body.heading_error,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
