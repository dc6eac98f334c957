use std::io::{self, Write};

use crate::sim::runner::Simulator;

/// Summary statistics computed from a finished run.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub steps: usize,
    pub flight_time: f64,
    pub landing_x: f64,
    pub landing_y: f64,
    pub impact_speed: f64,
    pub error_x: f64,
    pub error_y: f64,
    pub miss_distance: f64,
    pub heading_error: f64,
    pub max_speed: f64,
    pub max_xy_force: f64,
}

impl FlightSummary {
    pub fn from_simulator(sim: &Simulator) -> Self {
        let landing = sim.landing();
        let series = &sim.series;

        let max_speed = series
            .samples()
            .map(|s| s.velocity.norm())
            .fold(0.0_f64, f64::max);

        let max_xy_force = series
            .commands
            .iter()
            .map(|c| c.xy.norm())
            .fold(0.0_f64, f64::max);

        FlightSummary {
            steps: landing.steps,
            flight_time: landing.time,
            landing_x: landing.position.x,
            landing_y: landing.position.y,
            impact_speed: landing.velocity.norm(),
            error_x: landing.position_error.x,
            error_y: landing.position_error.y,
            miss_distance: landing.position_error.norm(),
            heading_error: landing.heading_error,
            max_speed,
            max_xy_force,
        }
    }
}

/// Write a flight summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &FlightSummary) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"steps\": {},", summary.steps)?;
    writeln!(writer, "  \"flight_time_s\": {:.3},", summary.flight_time)?;
    writeln!(writer, "  \"landing\": {{")?;
    writeln!(writer, "    \"x_m\": {:.3},", summary.landing_x)?;
    writeln!(writer, "    \"y_m\": {:.3},", summary.landing_y)?;
    writeln!(writer, "    \"impact_speed_ms\": {:.3}", summary.impact_speed)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"error\": {{")?;
    writeln!(writer, "    \"x_m\": {:.3},", summary.error_x)?;
    writeln!(writer, "    \"y_m\": {:.3},", summary.error_y)?;
    writeln!(writer, "    \"miss_distance_m\": {:.3},", summary.miss_distance)?;
    writeln!(writer, "    \"heading_deg\": {:.3}", summary.heading_error)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"max_speed_ms\": {:.3},", summary.max_speed)?;
    writeln!(writer, "  \"max_xy_force_n\": {:.3}", summary.max_xy_force)?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(path: &str, summary: &FlightSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::body::BodyBuilder;
    use crate::dynamics::state::SimConfig;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Vector2, Vector3};

    fn short_drop() -> Simulator {
        let body = BodyBuilder::new()
            .position(Vector3::new(0.0, 0.0, 2.0))
            .target(Vector2::new(3.0, 4.0))
            .build();
        let mut sim = Simulator::new(body, Vector2::zeros(), SimConfig::default());
        sim.run().unwrap();
        sim
    }

    #[test]
    fn summary_reflects_landing() {
        let sim = short_drop();
        let s = FlightSummary::from_simulator(&sim);
        assert_eq!(s.steps, sim.step_count);
        assert!(s.max_speed >= s.impact_speed - 1e-12);
        assert!(s.max_xy_force <= 50.0 * 2f64.sqrt() + 1e-9);
        assert_abs_diff_eq!(
            s.miss_distance,
            (s.error_x.powi(2) + s.error_y.powi(2)).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn json_output_has_sections() {
        let sim = short_drop();
        let summary = FlightSummary::from_simulator(&sim);

        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"landing\""));
        assert!(json.contains("\"miss_distance_m\""));
        assert!(json.contains(&format!("\"steps\": {},", sim.step_count)));
    }
}
