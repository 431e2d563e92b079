//! HUD theme - dark instrument-panel look.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// HUD color palette
pub struct HudColors;

impl HudColors {
    /// Near-black with blue tint - main background
    pub const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 15);
    /// Dark slate panel background (95% opacity)
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 22, 30, 242);
    /// Slightly lighter for hover states
    pub const PANEL_BG_HOVER: Color32 = Color32::from_rgb(30, 33, 42);

    /// Cool white - primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 235, 240);
    /// Muted gray - secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 180);

    /// Scientific blue - accent color
    pub const ACCENT: Color32 = Color32::from_rgb(100, 180, 255);
    /// Emerald green - healthy frame rate
    pub const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
    /// Amber - degraded frame rate
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 50);
    /// Alarm red
    pub const CRITICAL: Color32 = Color32::from_rgb(255, 80, 80);

    /// Slider track background
    pub const BAR_BG: Color32 = Color32::from_rgb(30, 35, 45);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(50, 55, 65);
}

/// Typography settings
pub struct HudTypography;

impl HudTypography {
    pub const TITLE_SIZE: f32 = 14.0;
    pub const VALUE_SIZE: f32 = 16.0;
    pub const LABEL_SIZE: f32 = 11.0;
    pub const SMALL_SIZE: f32 = 10.0;
}

/// HUD theme configuration
pub struct HudTheme {
    pub panel_rounding: f32,
    pub button_rounding: f32,
    pub panel_padding: f32,
    pub item_spacing: f32,
}

impl Default for HudTheme {
    fn default() -> Self {
        Self {
            panel_rounding: 6.0,
            button_rounding: 4.0,
            panel_padding: 12.0,
            item_spacing: 6.0,
        }
    }
}

impl HudTheme {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();

        visuals.panel_fill = HudColors::PANEL_BG;
        visuals.window_fill = HudColors::PANEL_BG;
        visuals.extreme_bg_color = HudColors::BACKGROUND;
        visuals.faint_bg_color = HudColors::PANEL_BG_HOVER;

        visuals.override_text_color = Some(HudColors::TEXT_PRIMARY);

        visuals.widgets.noninteractive.bg_fill = HudColors::PANEL_BG;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.panel_rounding);

        visuals.widgets.inactive.bg_fill = HudColors::BAR_BG;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.inactive.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.hovered.bg_fill = HudColors::PANEL_BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, HudColors::TEXT_PRIMARY);
        visuals.widgets.hovered.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.active.bg_fill = HudColors::ACCENT;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, HudColors::TEXT_PRIMARY);

        visuals.selection.bg_fill = HudColors::ACCENT.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, HudColors::ACCENT);

        visuals.window_stroke = Stroke::new(1.0, HudColors::BORDER);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.window_margin = egui::Margin::same(self.panel_padding);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.slider_width = 160.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(HudTypography::TITLE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(HudTypography::SMALL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }
}
