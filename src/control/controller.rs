use nalgebra::Vector2;

use crate::dynamics::state::{ErrorTerms, ForceCommand};
use super::integral::IntegralTerms;
use super::pid::PidController;

/// Trait for steering controllers.
///
/// Implement this to plug a custom control law into the simulation loop.
/// Controllers see only the error snapshot and the integral terms the
/// simulator has accumulated; they never touch the body directly.
pub trait Controller {
    /// Compute actuator commands from the current errors.
    fn command(&mut self, errors: &ErrorTerms, integrals: &IntegralTerms) -> ForceCommand;

    /// Called once at the start of every run. The PID law keeps no state
    /// between ticks (the simulator owns the integrals), so the default
    /// does nothing.
    fn reset(&mut self) {}

    /// Shown in the run-start `info!` event and the report banner.
    fn name(&self) -> &str {
        "unnamed"
    }
}

impl Controller for PidController {
    fn command(&mut self, errors: &ErrorTerms, integrals: &IntegralTerms) -> ForceCommand {
        // Heading first; both read the same errors and write disjoint outputs.
        let angular = self.correct_angle(errors.heading, errors.angular_velocity, integrals.angle);
        let xy = self.correct_xy(
            errors.position,
            errors.velocity,
            Vector2::new(integrals.x, integrals.y),
        );
        ForceCommand { xy, angular }
    }

    fn name(&self) -> &str {
        "PidController"
    }
}
