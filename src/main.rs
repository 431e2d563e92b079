//! Sphere decay test - entry point
//!
//! Free decay of a floating sphere restrained by a tunable PTO spring-damper.
//!
//! CLI Usage:
//!   cargo run                        # Interactive simulation with HUD sliders
//!   cargo run -- --headless          # Run to the time ceiling without a window
//!   cargo run -- --headless -t 60    # Override the simulated duration
//!   cargo run -- -o decay.txt        # Override the telemetry log path

use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use sphere_decay_sim::{
    config::SimParameters,
    control::ControlSurface,
    driver::{DriverState, StepDriver},
    hydro::{HydroCoefficients, HydroForceModel, WaveInputs},
    physics::{Gravity, HeaveBody, HeaveSystem},
    pto::{PtoCoefficient, PtoParameterStore, SpringDamper},
    render::{HudOverlay, HudReadout, HudState, RenderState},
    telemetry::TelemetrySink,
};
use winit::{
    event::{DeviceEvent, ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Resource path of the precomputed hydrodynamic coefficients
const HYDRO_COEFFS_PATH: &str = "data/hydro/sphere.json";

/// Parsed CLI options
struct CliOptions {
    headless: bool,
    duration_s: Option<f64>,
    output_path: Option<String>,
}

/// Parse CLI arguments
fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        headless: false,
        duration_s: None,
        output_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--headless" => options.headless = true,
            "-t" | "--duration" => {
                i += 1;
                if i < args.len() {
                    options.duration_s = args[i].parse().ok();
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    options.output_path = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Sphere Decay Test");
                println!();
                println!("Usage: sphere-decay-sim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --headless         Run to the time ceiling without a window");
                println!("  -t, --duration S   Simulated duration in seconds (default: 1000)");
                println!("  -o, --output PATH  Telemetry log path (default: output.txt)");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

/// Assemble the simulation: store, control surface, system and telemetry
fn build_driver(params: &SimParameters) -> Result<(StepDriver, Rc<PtoParameterStore>, ControlSurface)> {
    let store = Rc::new(PtoParameterStore::new(
        params.pto.default_stiffness_n_per_m,
        params.pto.default_damping_n_s_per_m,
    ));
    let surface = ControlSurface::with_default_bindings(store.clone(), &params.pto);

    let coeffs = HydroCoefficients::load_or_default(HYDRO_COEFFS_PATH);
    let mut body = HeaveBody::new(params.body.mass_kg, params.body.initial_heave_m);
    body.added_mass_kg = coeffs.added_mass_kg;

    let wave = WaveInputs {
        regular_wave_amplitude_m: params.wave.regular_wave_amplitude_m,
    };

    let mut system = HeaveSystem::new(body, params.solver.timestep_s);
    system.add_element(Box::new(HydroForceModel::new(
        coeffs,
        wave,
        params.solver.timestep_s,
    )));
    system.add_element(Box::new(Gravity::new(
        params.body.mass_kg,
        params.body.gravity_m_per_s2,
    )));

    let spring = SpringDamper::new(store.clone(), &params.pto);
    system.add_element(Box::new(spring.clone()));

    // The only fatal setup condition: the log must be writable before the
    // loop starts
    let sink = TelemetrySink::open(&params.solver.output_path)?;

    let driver = StepDriver::new(system, spring, sink, params.solver.time_ceiling_s);
    Ok((driver, store, surface))
}

/// Run to the time ceiling without a window
fn run_headless(params: &SimParameters) -> Result<()> {
    let (mut driver, _store, _surface) = build_driver(params)?;

    let start = Instant::now();
    driver.run_to_ceiling()?;
    let elapsed = start.elapsed();

    driver.finish()?;
    println!("Simulation finished in {} ms", elapsed.as_millis());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args();

    let mut params = SimParameters::load_or_default();
    if let Some(duration_s) = options.duration_s {
        params.solver.time_ceiling_s = duration_s;
    }
    if let Some(ref output_path) = options.output_path {
        params.solver.output_path = output_path.clone();
    }

    if options.headless {
        return run_headless(&params);
    }

    log::info!("Sphere decay test starting...");

    let (mut driver, store, surface) = build_driver(&params)?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Sphere Decay Test")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
            .build(&event_loop)?,
    );

    let mut render_state = pollster::block_on(RenderState::new(window.clone()))?;

    // Seat the sliders at the store defaults so the HUD and the store agree
    // before the first event
    let mut hud_state = HudState::default();
    if let Some(binding) = surface.binding(PtoCoefficient::Damping) {
        hud_state.damping_raw_max = binding.raw_max();
        hud_state.damping_raw = binding.raw_for(params.pto.default_damping_n_s_per_m);
    }
    if let Some(binding) = surface.binding(PtoCoefficient::Stiffness) {
        hud_state.stiffness_raw_max = binding.raw_max();
        hud_state.stiffness_raw = binding.raw_for(params.pto.default_stiffness_n_per_m);
    }

    let mut hud = HudOverlay::new(
        &window,
        render_state.device(),
        render_state.surface_format(),
        hud_state,
    );

    let attachment_offset_m = params.pto.attachment_offset_m as f32;
    let anchor_heave_m = params.pto.anchor_heave_m as f32;

    let mut mouse_pressed = false;
    let mut last_frame = Instant::now();
    let mut fps = 0.0_f64;
    let mut loop_error: Option<anyhow::Error> = None;

    log::info!("Controls:");
    log::info!("  Mouse drag: Orbit camera");
    log::info!("  Scroll: Zoom");
    log::info!("  R: Reset camera");
    log::info!("  H: Toggle help");
    log::info!("  Tab: Toggle HUD");
    log::info!("  Escape: Exit");

    let start = Instant::now();

    event_loop.run(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                let consumed = hud.handle_event(&window, &event);

                match event {
                    WindowEvent::CloseRequested => {
                        driver.terminate();
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => {
                        if hud.wants_keyboard_input() {
                            return;
                        }
                        match key_code {
                            KeyCode::Escape => {
                                driver.terminate();
                                elwt.exit();
                            }
                            KeyCode::KeyH => hud.toggle_help(),
                            KeyCode::Tab => hud.toggle_hud(),
                            KeyCode::KeyR => {
                                render_state.camera.reset();
                                log::info!("Camera reset");
                            }
                            _ => {}
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if button == MouseButton::Left {
                            mouse_pressed = state == ElementState::Pressed && !consumed;
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        if !hud.wants_pointer_input() {
                            let amount = match delta {
                                MouseScrollDelta::LineDelta(_, y) => y,
                                MouseScrollDelta::PixelDelta(p) => p.y as f32 * 0.05,
                            };
                            render_state.camera.zoom(amount);
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        render_state.resize(new_size);
                    }
                    WindowEvent::RedrawRequested => {
                        // Commit slider changes before the step integrates
                        for ui_event in hud.take_events() {
                            if !surface.handle(&ui_event) {
                                log::warn!("Unhandled control event tag {}", ui_event.tag);
                            }
                        }

                        match driver.record_and_step() {
                            Ok(DriverState::Running) => {}
                            Ok(DriverState::Terminated) => elwt.exit(),
                            Err(e) => {
                                log::error!("Telemetry write failed: {e:#}");
                                loop_error = Some(e);
                                elwt.exit();
                            }
                        }

                        let now = Instant::now();
                        let frame_s = (now - last_frame).as_secs_f64();
                        last_frame = now;
                        if frame_s > 0.0 {
                            fps = 0.9 * fps + 0.1 / frame_s;
                        }

                        let record = driver.snapshot();
                        let readout = HudReadout {
                            time_s: record.time_s,
                            position_m: record.position_m,
                            velocity_m_per_s: record.velocity_m_per_s,
                            spring_length_m: record.spring_length_m,
                            spring_force_n: record.spring_force_n,
                            stiffness_n_per_m: store.stiffness(),
                            damping_n_s_per_m: store.damping(),
                            fps,
                        };

                        let heave = record.position_m as f32;
                        render_state.update(
                            heave,
                            heave + attachment_offset_m,
                            anchor_heave_m,
                        );
                        match render_state.render(&mut hud, &window, &readout) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => render_state.resize(render_state.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                driver.terminate();
                                elwt.exit();
                            }
                            Err(e) => log::error!("Render error: {:?}", e),
                        }
                    }
                    _ => {}
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                if mouse_pressed {
                    render_state
                        .camera
                        .orbit(delta.0 as f32 * 0.01, delta.1 as f32 * 0.01);
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    driver.terminate();
    driver.finish()?;

    if let Some(e) = loop_error {
        return Err(e);
    }

    println!("Simulation finished in {} ms", start.elapsed().as_millis());
    Ok(())
}
