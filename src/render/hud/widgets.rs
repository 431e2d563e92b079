//! Small HUD widgets shared by the panels.

use egui::{Color32, Ui};

use super::theme::{HudColors, HudTypography};

/// Label/value row with an optional value color
pub fn key_value(ui: &mut Ui, label: &str, value: &str, color: Option<Color32>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_SECONDARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(HudTypography::LABEL_SIZE)
                    .monospace()
                    .color(color.unwrap_or(HudColors::TEXT_PRIMARY)),
            );
        });
    });
}

/// Uppercase section header with a separator rule
pub fn section_header(ui: &mut Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(title)
            .size(HudTypography::SMALL_SIZE)
            .color(HudColors::ACCENT)
            .strong(),
    );
    ui.separator();
}
