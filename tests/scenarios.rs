use approx::assert_abs_diff_eq;
use nalgebra::{Vector2, Vector3};

use freefall_sim::control::{IntegralTerms, ResetIntegral};
use freefall_sim::dynamics::{accelerate, GRAVITY};
use freefall_sim::{simulate, BodyBuilder, Controller, PidController, RunParams, SimConfig, Simulator};

fn gravity_only(altitude: f64) -> RunParams {
    RunParams {
        position: Vector3::new(0.0, 0.0, altitude),
        heading: 0.0,
        target: Vector2::zeros(),
        ..RunParams::default()
    }
}

#[test]
fn skydiver_scenario_lands_with_finite_error() {
    let params = RunParams::default();
    assert_eq!(params.heading, 181.0);
    assert_eq!(params.target, Vector2::new(-7.0, -15.0));

    let sim = simulate(&params).unwrap();
    let landing = sim.landing();

    assert!(landing.position.z <= 0.0);
    assert!(landing.position_error.x.is_finite());
    assert!(landing.position_error.y.is_finite());
    assert!(landing.heading_error.is_finite());
    assert_eq!(sim.series.len(), sim.step_count);
}

#[test]
fn skydiver_scenario_respects_limits_every_tick() {
    let params = RunParams::default();
    let limit = params.controller.force_limit;
    let angular_limit = params.controller.angular_force_limit;
    let sim = simulate(&params).unwrap();

    for s in sim.series.samples() {
        assert!(s.command.xy.x.abs() <= limit);
        assert!(s.command.xy.y.abs() <= limit);
        assert!(s.command.angular.abs() <= angular_limit);
        assert!((0.0..360.0).contains(&s.heading), "heading {}", s.heading);
    }
}

#[test]
fn free_fall_terminates_on_schedule() {
    let params = gravity_only(122.0);
    let dt = params.config.time_step;
    let sim = simulate(&params).unwrap();

    let expected = ((2.0 * 122.0 / 9.81_f64).sqrt() / dt).ceil() as i64;
    let actual = sim.step_count as i64;
    assert!(
        (actual - expected).abs() <= 1,
        "expected ~{} ticks, got {}",
        expected,
        actual
    );
    assert!(sim.body.position.z <= 0.0);

    // Nothing steered the body sideways
    assert_eq!(sim.body.position.x, 0.0);
    assert_eq!(sim.body.position.y, 0.0);
    for z_accel in &sim.series.z_accel {
        assert_abs_diff_eq!(*z_accel, GRAVITY, epsilon = 1e-12);
    }
}

#[test]
fn runs_are_deterministic() {
    let params = RunParams {
        drag: Vector3::new(0.01, -0.02, 0.03),
        wind: Vector2::new(0.7, -0.4),
        ..RunParams::default()
    };
    let a = simulate(&params).unwrap();
    let b = simulate(&params).unwrap();

    assert_eq!(a.step_count, b.step_count);
    assert_eq!(a.series, b.series);
    assert_eq!(a.landing(), b.landing());
}

#[test]
fn body_at_target_commands_nothing() {
    let mut body = BodyBuilder::new()
        .position(Vector3::new(3.0, -2.0, 40.0))
        .target(Vector2::new(3.0, -2.0))
        .heading(0.0)
        .build();
    body.update_errors();

    let mut pid = PidController::new();
    let cmd = pid.command(&body.errors(), &IntegralTerms::default());
    assert_eq!(cmd.xy, Vector2::zeros());
    assert_eq!(cmd.angular, 0.0);

    body.apply_command(&cmd);
    let a = accelerate(&body, &Vector2::zeros());
    assert_eq!(a.linear.x, 0.0);
    assert_eq!(a.linear.y, 0.0);
    assert_eq!(a.angular, 0.0);
}

#[test]
fn integral_reset_trace() {
    let mut acc = ResetIntegral::new();
    let trace: Vec<f64> = [0.5, 2.0, 0.3].into_iter().map(|e| acc.accumulate(e)).collect();
    assert_eq!(trace, vec![0.5, 0.0, 0.3]);
}

#[test]
fn saturation_holds_for_extreme_errors() {
    let pid = PidController::new();
    for &e in &[-1e9, -500.0, -1.0, 0.0, 1.0, 500.0, 1e9] {
        let f = pid.correct_xy(Vector2::new(e, -e), Vector2::new(e, e), Vector2::new(-e, e));
        assert!(f.x.abs() <= pid.force_limit);
        assert!(f.y.abs() <= pid.force_limit);
        assert!(pid.correct_angle(e, -e, e).abs() <= pid.angular_force_limit);
    }
}

#[test]
fn steering_beats_drifting_in_crosswind() {
    let steered = RunParams {
        wind: Vector2::new(2.0, -1.0),
        ..gravity_only(122.0)
    };
    let passive = RunParams {
        controller: PidController::new().limits(0.0, 0.0),
        ..steered.clone()
    };

    let miss = |p: &RunParams| simulate(p).unwrap().landing().position_error.norm();
    let drift = miss(&passive);
    let steer = miss(&steered);

    // 1/2 a t^2 with |a| = sqrt(5) over ~5 s
    assert!(drift > 20.0, "passive drift {}", drift);
    assert!(steer < drift / 4.0, "steered miss {} vs drift {}", steer, drift);
}

#[test]
fn externally_driven_ticks_match_run() {
    let params = RunParams::default();
    let mut stepped = params.clone().into_simulator();
    while stepped.tick().is_some() {}
    assert_eq!(stepped.phase(), freefall_sim::FlightPhase::Landed);

    let ran = simulate(&params).unwrap();
    assert_eq!(stepped.series, ran.series);
}

#[test]
fn step_limit_is_opt_in() {
    let body = BodyBuilder::new()
        .position(Vector3::new(0.0, 0.0, 1.0))
        .velocity(Vector3::new(0.0, 0.0, 50.0))
        .build();
    let config = SimConfig { max_steps: Some(10), ..SimConfig::default() };
    let mut sim = Simulator::new(body.clone(), Vector2::zeros(), config);
    assert!(sim.run().is_err());

    let mut sim = Simulator::new(body, Vector2::zeros(), SimConfig::default());
    assert!(sim.run().is_ok());
}
