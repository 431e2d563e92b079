//! HUD panel definitions and rendering.

use egui::{Align2, Context, Window};

use super::state::HudState;
use super::theme::HudColors;
use super::widgets::{key_value, section_header};
use super::HudReadout;
use crate::control::{UiEvent, DAMPING_CONTROL_TAG, STIFFNESS_CONTROL_TAG};

/// Render all HUD panels.
///
/// Returns one event per slider the user moved this frame, carrying the
/// slider's raw position.
pub fn render_panels(ctx: &Context, state: &mut HudState, readout: &HudReadout) -> Vec<UiEvent> {
    let mut events = Vec::new();

    if !state.hud_enabled {
        return events;
    }

    if state.show_pto_panel {
        render_pto_panel(ctx, state, readout, &mut events);
    }

    if state.show_readout_panel {
        render_readout_panel(ctx, readout);
    }

    if state.show_help {
        render_help_overlay(ctx);
    }

    events
}

/// PTO control panel (top-left): the damping and stiffness sliders
fn render_pto_panel(
    ctx: &Context,
    state: &mut HudState,
    readout: &HudReadout,
    events: &mut Vec<UiEvent>,
) {
    Window::new("PTO CONTROLS")
        .anchor(Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(220.0);

            section_header(ui, "DAMPING");
            let damping = ui.add(
                egui::Slider::new(&mut state.damping_raw, 0..=state.damping_raw_max)
                    .show_value(false),
            );
            if damping.changed() {
                events.push(UiEvent {
                    tag: DAMPING_CONTROL_TAG,
                    raw_position: state.damping_raw,
                });
            }
            key_value(
                ui,
                "PTO damping",
                &format!("{:.1} N·s/m", readout.damping_n_s_per_m),
                None,
            );

            section_header(ui, "STIFFNESS");
            let stiffness = ui.add(
                egui::Slider::new(&mut state.stiffness_raw, 0..=state.stiffness_raw_max)
                    .show_value(false),
            );
            if stiffness.changed() {
                events.push(UiEvent {
                    tag: STIFFNESS_CONTROL_TAG,
                    raw_position: state.stiffness_raw,
                });
            }
            key_value(
                ui,
                "PTO stiffness",
                &format!("{:.0} N/m", readout.stiffness_n_per_m),
                None,
            );
        });
}

/// Simulation readout panel (top-right)
fn render_readout_panel(ctx: &Context, readout: &HudReadout) {
    Window::new("SIMULATION")
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(170.0);

            key_value(ui, "Time", &format!("{:.2} s", readout.time_s), None);

            let fps_color = if readout.fps >= 55.0 {
                HudColors::SUCCESS
            } else if readout.fps >= 30.0 {
                HudColors::WARNING
            } else {
                HudColors::CRITICAL
            };
            key_value(ui, "FPS", &format!("{:.0}", readout.fps), Some(fps_color));

            section_header(ui, "BODY");
            key_value(ui, "Heave", &format!("{:.3} m", readout.position_m), None);
            key_value(
                ui,
                "Velocity",
                &format!("{:.3} m/s", readout.velocity_m_per_s),
                None,
            );

            section_header(ui, "SPRING");
            key_value(
                ui,
                "Length",
                &format!("{:.3} m", readout.spring_length_m),
                None,
            );
            key_value(
                ui,
                "Force",
                &format!("{:.0} N", readout.spring_force_n),
                None,
            );
        });
}

/// Help overlay (center)
fn render_help_overlay(ctx: &Context) {
    Window::new("KEYBOARD SHORTCUTS")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(240.0);

            section_header(ui, "CAMERA");
            key_value(ui, "Mouse Drag", "Orbit camera", None);
            key_value(ui, "Scroll", "Zoom", None);
            key_value(ui, "R", "Reset camera", None);

            section_header(ui, "HUD");
            key_value(ui, "H", "Toggle help", None);
            key_value(ui, "Tab", "Toggle HUD", None);

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Press H to close")
                    .size(super::theme::HudTypography::SMALL_SIZE)
                    .color(HudColors::TEXT_SECONDARY),
            );
        });
}
