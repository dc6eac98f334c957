use nalgebra::{Vector2, Vector3};

use freefall_sim::{simulate, PidController, RunParams};

/// Compare landing error in a crosswind with and without steering.
fn main() -> Result<(), freefall_sim::SimError> {
    let base = RunParams {
        heading: 0.0,
        drag: Vector3::new(0.0, 0.0, 0.05),
        target: Vector2::new(0.0, 0.0),
        wind: Vector2::new(2.0, -1.0),
        ..RunParams::default()
    };

    let passive = RunParams {
        controller: PidController::new().limits(0.0, 0.0),
        ..base.clone()
    };

    for (label, params) in [("passive", passive), ("steered", base)] {
        let sim = simulate(&params)?;
        let landing = sim.landing();
        println!(
            "{:>8}: t={:>6.2}s  landed ({:>7.2}, {:>7.2})  miss {:>6.2} m",
            label,
            landing.time,
            landing.position.x,
            landing.position.y,
            landing.position_error.norm()
        );
    }
    Ok(())
}
