//! Integration tests for the record-then-step loop.
//!
//! Tests verify the telemetry log produced by full headless runs: header,
//! record count against the time ceiling, field layout, and the effect of
//! slider events on the logged spring force.

use std::path::PathBuf;
use std::rc::Rc;

use sphere_decay_sim::config::SimParameters;
use sphere_decay_sim::control::{ControlSurface, UiEvent, DAMPING_CONTROL_TAG};
use sphere_decay_sim::driver::{DriverState, StepDriver};
use sphere_decay_sim::hydro::{HydroCoefficients, HydroForceModel, WaveInputs};
use sphere_decay_sim::physics::{Gravity, HeaveBody, HeaveSystem};
use sphere_decay_sim::pto::{PtoParameterStore, SpringDamper};
use sphere_decay_sim::telemetry::{TelemetrySink, LOG_HEADER};

fn temp_log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sphere_decay_{}_{}.txt", name, std::process::id()))
}

/// Assemble a driver like the binary does, with an explicit ceiling and log
/// path and the default sphere coefficients
fn build_test_driver(
    time_ceiling_s: f64,
    output: &PathBuf,
) -> (StepDriver, Rc<PtoParameterStore>, ControlSurface) {
    let params = SimParameters::default();

    let store = Rc::new(PtoParameterStore::new(
        params.pto.default_stiffness_n_per_m,
        params.pto.default_damping_n_s_per_m,
    ));
    let surface = ControlSurface::with_default_bindings(store.clone(), &params.pto);

    let coeffs = HydroCoefficients::default();
    let mut body = HeaveBody::new(params.body.mass_kg, params.body.initial_heave_m);
    body.added_mass_kg = coeffs.added_mass_kg;

    let mut system = HeaveSystem::new(body, params.solver.timestep_s);
    system.add_element(Box::new(HydroForceModel::new(
        coeffs,
        WaveInputs {
            regular_wave_amplitude_m: params.wave.regular_wave_amplitude_m,
        },
        params.solver.timestep_s,
    )));
    system.add_element(Box::new(Gravity::new(
        params.body.mass_kg,
        params.body.gravity_m_per_s2,
    )));

    let spring = SpringDamper::new(store.clone(), &params.pto);
    system.add_element(Box::new(spring.clone()));

    let sink = TelemetrySink::open(output).expect("temp log must open");
    let driver = StepDriver::new(system, spring, sink, time_ceiling_s);
    (driver, store, surface)
}

fn parse_rows(contents: &str) -> Vec<Vec<f64>> {
    contents
        .lines()
        .skip(1)
        .map(|line| {
            line.split('\t')
                .map(|field| field.trim().parse::<f64>().expect("numeric field"))
                .collect()
        })
        .collect()
}

// ============================================================================
// Headless run to the ceiling
// ============================================================================

#[test]
fn test_headless_run_log_layout() {
    let path = temp_log_path("layout");
    let (mut driver, _store, _surface) = build_test_driver(1.0, &path);

    driver.run_to_ceiling().expect("run must complete");
    assert_eq!(driver.state(), DriverState::Terminated);
    driver.finish().expect("finish must close the sink");

    let contents = std::fs::read_to_string(&path).expect("log must exist");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(LOG_HEADER));

    // Records at t = k * 0.015 while t <= 1.0: k = 0..=66
    let rows = parse_rows(&contents);
    assert_eq!(rows.len(), 67);

    for row in &rows {
        assert_eq!(row.len(), 7, "each record has exactly 7 fields");
    }

    // Times are the step multiples, non-decreasing from zero
    assert!(rows[0][0].abs() < 1e-12);
    for pair in rows.windows(2) {
        assert!(pair[1][0] > pair[0][0]);
    }
    assert!((rows[66][0] - 0.99).abs() < 1e-9);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_first_record_is_initial_state() {
    let path = temp_log_path("initial");
    let (mut driver, _store, _surface) = build_test_driver(10.0, &path);

    // One iteration: record t = 0, then advance
    let state = driver.record_and_step().expect("step must succeed");
    assert_eq!(state, DriverState::Running);
    driver.finish().expect("finish must close the sink");

    let contents = std::fs::read_to_string(&path).expect("log must exist");
    let rows = parse_rows(&contents);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert!(row[0].abs() < 1e-12, "time starts at zero");
    assert!((row[1] + 1.0).abs() < 1e-12, "released 1 m below equilibrium");
    assert!(row[2].abs() < 1e-12, "released at rest");
    assert!(row[3].abs() < 1e-12, "no force applied before the first step");
    // Attachment at -2 m, anchor at -10 m
    assert!((row[4] - 8.0).abs() < 1e-12);
    assert!(row[5].abs() < 1e-12);
    // Stretched 3 m past the 5 m rest length at 1e5 N/m
    assert!((row[6] + 3.0e5).abs() < 1e-6);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_termination_is_final() {
    let path = temp_log_path("final");
    let (mut driver, _store, _surface) = build_test_driver(0.1, &path);

    driver.run_to_ceiling().expect("run must complete");
    assert_eq!(driver.state(), DriverState::Terminated);

    // Further iterations are no-ops
    let records_before = {
        let contents = std::fs::read_to_string(&path).expect("log must exist");
        parse_rows(&contents).len()
    };
    let state = driver.record_and_step().expect("no-op must succeed");
    assert_eq!(state, DriverState::Terminated);
    driver.finish().expect("finish must close the sink");

    let contents = std::fs::read_to_string(&path).expect("log must exist");
    assert_eq!(parse_rows(&contents).len(), records_before);

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Slider events feed the integration
// ============================================================================

#[test]
fn test_damping_event_changes_logged_spring_force() {
    let base_path = temp_log_path("base");
    let damped_path = temp_log_path("damped");

    let (mut base_driver, _, _) = build_test_driver(0.5, &base_path);
    base_driver.run_to_ceiling().expect("run must complete");
    base_driver.finish().expect("finish must close the sink");

    let (mut damped_driver, _, surface) = build_test_driver(0.5, &damped_path);
    // Slider pushed to the damping maximum before the run
    assert!(surface.handle(&UiEvent {
        tag: DAMPING_CONTROL_TAG,
        raw_position: 101,
    }));
    damped_driver.run_to_ceiling().expect("run must complete");
    damped_driver.finish().expect("finish must close the sink");

    let base_rows = parse_rows(&std::fs::read_to_string(&base_path).expect("log must exist"));
    let damped_rows = parse_rows(&std::fs::read_to_string(&damped_path).expect("log must exist"));
    assert_eq!(base_rows.len(), damped_rows.len());

    // At t = 0 the body is at rest, so the damping term vanishes and the
    // spring forces agree; once the body moves the logs must diverge
    assert!((base_rows[0][6] - damped_rows[0][6]).abs() < 1e-9);
    let diverged = base_rows
        .iter()
        .zip(damped_rows.iter())
        .skip(1)
        .any(|(b, d)| (b[6] - d[6]).abs() > 1e-9);
    assert!(diverged, "damping change must show up in the spring force");

    std::fs::remove_file(&base_path).ok();
    std::fs::remove_file(&damped_path).ok();
}

// ============================================================================
// Fatal setup
// ============================================================================

#[test]
fn test_unwritable_log_path_fails_fast() {
    let result = TelemetrySink::open("/no/such/directory/output.txt");
    assert!(result.is_err());
}
