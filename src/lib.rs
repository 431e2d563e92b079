//! Sphere decay simulator with a tunable power take-off.
//!
//! Free decay of a floating sphere released below its equilibrium draft,
//! restrained by a spring-damper whose stiffness and damping are adjusted
//! live through HUD sliders. Every integration step is logged to a
//! tab-separated telemetry file.

pub mod config;
pub mod control;
pub mod driver;
pub mod geometry;
pub mod hydro;
pub mod physics;
pub mod pto;
pub mod render;
pub mod telemetry;

pub use config::SimParameters;
pub use control::{ControlSurface, UiEvent};
pub use driver::{DriverState, StepDriver};
pub use hydro::{HydroCoefficients, HydroForceModel, WaveInputs};
pub use physics::{ForceElement, Gravity, HeaveBody, HeaveSystem};
pub use pto::{PtoCoefficient, PtoParameterStore, SpringDamper};
pub use telemetry::{TelemetryRecord, TelemetrySink};
