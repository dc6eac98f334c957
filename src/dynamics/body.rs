use nalgebra::{Vector2, Vector3};

use super::angle::{heading_error, wrap_heading};
use super::state::{ErrorTerms, ForceCommand, NetAccel};

// ---------------------------------------------------------------------------
// Body: kinematic state, tracking errors, and applied forces
// ---------------------------------------------------------------------------

/// A falling body steered toward a ground target.
///
/// Frame: x/y horizontal, z up, origin on the ground. Headings are in
/// degrees with 0 meaning upright.
#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f64,                       // kg
    pub radius: f64,                     // m, inertia only (uniform disk)
    pub drag: Vector3<f64>,              // per-axis quadratic coefficients
    pub target: Vector2<f64>,            // m
    pub target_velocity: Vector2<f64>,   // m/s, always zero
    pub target_angular_velocity: f64,    // deg/s, always zero

    pub position: Vector3<f64>,          // m
    pub velocity: Vector3<f64>,          // m/s
    pub heading: f64,                    // deg, [0, 360) after the first step
    pub angular_velocity: f64,           // deg/s

    // Recomputed once per tick; stale until the matching update runs.
    pub position_error: Vector2<f64>,
    pub velocity_error: Vector2<f64>,
    pub heading_error: f64,
    pub angular_velocity_error: f64,

    pub xy_force: Vector2<f64>,          // N
    pub angular_force: f64,              // N·m
}

impl Body {
    /// Rotational inertia of a uniform disk: `m r^2 / 2`.
    pub fn moment_of_inertia(&self) -> f64 {
        0.5 * self.mass * self.radius * self.radius
    }

    /// Advance kinematic state by one semi-implicit Euler step.
    ///
    /// Velocity is updated first; position then uses the new velocity.
    pub fn step(&mut self, accel: &NetAccel, dt: f64) {
        for i in 0..3 {
            self.velocity[i] += accel.linear[i] * dt;
            self.position[i] += self.velocity[i] * dt;
        }

        self.angular_velocity += accel.angular * dt;
        self.heading = wrap_heading(self.heading + self.angular_velocity * dt);
    }

    pub fn update_position_error(&mut self) {
        self.position_error = self.position.xy() - self.target;
    }

    pub fn update_velocity_error(&mut self) {
        self.velocity_error = self.velocity.xy() - self.target_velocity;
    }

    pub fn update_heading_error(&mut self) {
        self.heading_error = heading_error(self.heading);
    }

    pub fn update_angular_velocity_error(&mut self) {
        self.angular_velocity_error = self.angular_velocity - self.target_angular_velocity;
    }

    /// Recompute all four tracking errors from the current state.
    pub fn update_errors(&mut self) {
        self.update_position_error();
        self.update_velocity_error();
        self.update_heading_error();
        self.update_angular_velocity_error();
    }

    /// Snapshot of the last computed errors for a controller.
    pub fn errors(&self) -> ErrorTerms {
        ErrorTerms {
            position: self.position_error,
            velocity: self.velocity.xy(),
            velocity_error: self.velocity_error,
            heading: self.heading_error,
            angular_velocity: self.angular_velocity_error,
        }
    }

    pub fn apply_command(&mut self, cmd: &ForceCommand) {
        self.xy_force = cmd.xy;
        self.angular_force = cmd.angular;
    }

    pub fn command(&self) -> ForceCommand {
        ForceCommand { xy: self.xy_force, angular: self.angular_force }
    }

    /// Altitude above ground (z).
    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    // -- textual trace ------------------------------------------------------

    pub fn pos_report(&self) -> String {
        format!(
            "pos({:.2}, {:.2}, {:.2})",
            self.position.x, self.position.y, self.position.z
        )
    }

    pub fn vel_report(&self) -> String {
        format!(
            "vel({:.2}, {:.2}, {:.2})",
            self.velocity.x, self.velocity.y, self.velocity.z
        )
    }

    pub fn heading_report(&self) -> String {
        format!("heading({:.2})", self.heading)
    }

    pub fn ang_vel_report(&self) -> String {
        format!("ang_vel({:.2})", self.angular_velocity)
    }

    pub fn pos_error_report(&self) -> String {
        format!(
            "pos_error({:.2}, {:.2})",
            self.position_error.x, self.position_error.y
        )
    }

    pub fn vel_error_report(&self) -> String {
        format!(
            "vel_error({:.2}, {:.2})",
            self.velocity_error.x, self.velocity_error.y
        )
    }

    pub fn heading_error_report(&self) -> String {
        format!("heading_error({:.2})", self.heading_error)
    }

    /// One human-readable trace line. Not a stable machine format.
    pub fn status_line(&self, time: f64) -> String {
        format!(
            "time: {:.3}, {}, {}, {}, {}, {}",
            time,
            self.pos_report(),
            self.vel_report(),
            self.heading_report(),
            self.pos_error_report(),
            self.heading_error_report(),
        )
    }
}

// ---------------------------------------------------------------------------
// Body builder
// ---------------------------------------------------------------------------

pub struct BodyBuilder {
    mass: f64,
    radius: f64,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    heading: f64,
    angular_velocity: f64,
    drag: Vector3<f64>,
    target: Vector2<f64>,
    xy_force: Vector2<f64>,
    angular_force: f64,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self {
            mass: 1.0,
            radius: 0.05,
            position: Vector3::new(0.0, 0.0, 122.0),
            velocity: Vector3::zeros(),
            heading: 0.0,
            angular_velocity: 0.0,
            drag: Vector3::zeros(),
            target: Vector2::zeros(),
            xy_force: Vector2::zeros(),
            angular_force: 0.0,
        }
    }

    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn radius(mut self, v: f64) -> Self { self.radius = v; self }
    pub fn position(mut self, v: Vector3<f64>) -> Self { self.position = v; self }
    pub fn velocity(mut self, v: Vector3<f64>) -> Self { self.velocity = v; self }
    pub fn heading(mut self, v: f64) -> Self { self.heading = v; self }
    pub fn angular_velocity(mut self, v: f64) -> Self { self.angular_velocity = v; self }
    pub fn drag(mut self, v: Vector3<f64>) -> Self { self.drag = v; self }
    pub fn target(mut self, v: Vector2<f64>) -> Self { self.target = v; self }
    pub fn xy_force(mut self, v: Vector2<f64>) -> Self { self.xy_force = v; self }
    pub fn angular_force(mut self, v: f64) -> Self { self.angular_force = v; self }

    pub fn build(self) -> Body {
        Body {
            mass: self.mass,
            radius: self.radius,
            drag: self.drag,
            target: self.target,
            target_velocity: Vector2::zeros(),
            target_angular_velocity: 0.0,
            position: self.position,
            velocity: self.velocity,
            heading: self.heading,
            angular_velocity: self.angular_velocity,
            position_error: Vector2::zeros(),
            velocity_error: Vector2::zeros(),
            heading_error: 0.0,
            angular_velocity_error: 0.0,
            xy_force: self.xy_force,
            angular_force: self.angular_force,
        }
    }
}
