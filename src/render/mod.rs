//! Rendering: the wgpu scene and the egui HUD overlay.

pub mod camera;
pub mod hud;
pub mod pipeline;

pub use camera::Camera;
pub use hud::{HudOverlay, HudReadout, HudState};
pub use pipeline::RenderState;
