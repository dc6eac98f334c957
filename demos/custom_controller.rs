use freefall_sim::control::IntegralTerms;
use freefall_sim::dynamics::{ErrorTerms, ForceCommand};
use freefall_sim::{simulate_with, Controller, RunParams};
use nalgebra::Vector2;

/// A bang-bang steering law: full force toward the target on each axis,
/// full torque toward upright, no integral or derivative action.
struct BangBangController {
    force: f64,
    torque: f64,
    deadband: f64,
}

impl BangBangController {
    fn push(&self, error: f64, magnitude: f64) -> f64 {
        if error.abs() < self.deadband {
            0.0
        } else {
            -magnitude * error.signum()
        }
    }
}

impl Controller for BangBangController {
    fn command(&mut self, errors: &ErrorTerms, _integrals: &IntegralTerms) -> ForceCommand {
        ForceCommand {
            xy: Vector2::new(
                self.push(errors.position.x, self.force),
                self.push(errors.position.y, self.force),
            ),
            angular: self.push(errors.heading, self.torque),
        }
    }

    fn name(&self) -> &str {
        "BangBang"
    }
}

fn main() -> Result<(), freefall_sim::SimError> {
    let params = RunParams::default();
    let controller = BangBangController { force: 20.0, torque: 2.0, deadband: 0.5 };

    println!("Simulating with {} controller...", controller.name());
    let sim = simulate_with(&params, controller)?;
    let landing = sim.landing();

    println!("Flight time: {:.2} s", landing.time);
    println!(
        "Landed at ({:.2}, {:.2}), error ({:.2}, {:.2}) m",
        landing.position.x, landing.position.y, landing.position_error.x, landing.position_error.y
    );
    println!("Heading error: {:.2} deg", landing.heading_error);
    println!("Trajectory points: {}", sim.series.len());
    Ok(())
}
