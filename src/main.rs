use tracing_subscriber::EnvFilter;

use freefall_sim::io::{self, FlightSummary};
use freefall_sim::{simulate, RunParams, SimError};

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional outputs: freefall-sim [series.csv] [summary.json]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next();
    let json_path = args.next();

    // -----------------------------------------------------------------------
    // Run: skydiver released upside down, steering to (-7, -15)
    // -----------------------------------------------------------------------
    let params = RunParams::default();
    let sim = simulate(&params)?;
    let summary = FlightSummary::from_simulator(&sim);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  FREE-FALL STEERING SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.2} kg    Radius:       {:>8.3} m",
        params.mass, params.radius
    );
    println!(
        "  Release:       ({:.1}, {:.1}, {:.1}) m   heading {:.1} deg",
        params.position.x, params.position.y, params.position.z, params.heading
    );
    println!(
        "  Target:        ({:.1}, {:.1}) m   wind ({:.2}, {:.2}) m/s^2",
        params.target.x, params.target.y, params.wind.x, params.wind.y
    );
    println!(
        "  Controller:    {}   dt={} s   every {} tick(s)",
        sim.controller_name(),
        params.config.time_step,
        params.config.control_divisor
    );
    println!();

    println!("  Landing");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  t={:>6.2}s   pos=({:.2}, {:.2})   impact={:.2} m/s",
        summary.flight_time, summary.landing_x, summary.landing_y, summary.impact_speed
    );
    println!(
        "  error=({:.2}, {:.2}) m   miss={:.2} m   heading error={:.2} deg",
        summary.error_x, summary.error_y, summary.miss_distance, summary.heading_error
    );
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
        "t (s)", "x (m)", "y (m)", "alt (m)", "hdg(deg)", "|F| (N)"
    );
    println!("  {}", "─".repeat(58));

    let series = &sim.series;
    let sample_interval = (series.len() / 25).max(1);
    for (i, s) in series.samples().enumerate() {
        if i % sample_interval != 0 && i + 1 != series.len() {
            continue;
        }
        println!(
            "  {:>7.2}  {:>8.2}  {:>8.2}  {:>8.2}  {:>8.2}  {:>8.2}",
            s.time,
            s.position.x,
            s.position.y,
            s.position.z,
            s.heading,
            s.command.xy.norm()
        );
    }

    println!();
    println!("  Simulation: {} steps", sim.step_count);
    println!("====================================================================");
    println!();

    if let Some(path) = csv_path {
        io::write_series_file(&path, series)?;
        println!("  Series written to {}", path);
    }
    if let Some(path) = json_path {
        io::write_summary_file(&path, &summary)?;
        println!("  Summary written to {}", path);
    }

    Ok(())
}
