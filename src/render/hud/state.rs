//! HUD panel visibility and slider positions.

/// Panel toggles plus the raw positions of the PTO sliders.
///
/// The sliders hold raw integer positions; the control surface owns the
/// mapping to engineering units.
#[derive(Debug, Clone)]
pub struct HudState {
    /// Show the PTO control panel (top-left)
    pub show_pto_panel: bool,
    /// Show the simulation readout panel (top-right)
    pub show_readout_panel: bool,
    /// Show help overlay (center, toggle with H key)
    pub show_help: bool,
    /// HUD enabled at all
    pub hud_enabled: bool,

    /// Damping slider raw position
    pub damping_raw: u32,
    /// Damping slider upper bound
    pub damping_raw_max: u32,
    /// Stiffness slider raw position
    pub stiffness_raw: u32,
    /// Stiffness slider upper bound
    pub stiffness_raw_max: u32,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            show_pto_panel: true,
            show_readout_panel: true,
            show_help: false,
            hud_enabled: true,
            damping_raw: 0,
            damping_raw_max: 101,
            stiffness_raw: 0,
            stiffness_raw_max: 1000,
        }
    }
}

impl HudState {
    /// Toggle HUD visibility entirely
    pub fn toggle_hud(&mut self) {
        self.hud_enabled = !self.hud_enabled;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Toggle the PTO control panel
    pub fn toggle_pto(&mut self) {
        self.show_pto_panel = !self.show_pto_panel;
    }

    /// Toggle the readout panel
    pub fn toggle_readout(&mut self) {
        self.show_readout_panel = !self.show_readout_panel;
    }
}
