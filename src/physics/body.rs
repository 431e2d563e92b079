//! Heave body state.

/// Single-axis (heave) rigid body state.
///
/// Owned by the [`HeaveSystem`](super::HeaveSystem); force elements read it,
/// only the system's step mutates it.
#[derive(Debug, Clone, Copy)]
pub struct HeaveBody {
    /// Body mass (kg)
    pub mass_kg: f64,
    /// Hydrodynamic added mass at infinite frequency (kg)
    pub added_mass_kg: f64,
    /// Heave position relative to the calm free surface (m)
    pub position_m: f64,
    /// Heave velocity (m/s)
    pub velocity_m_per_s: f64,
    /// Net force applied by the last completed step (N)
    pub applied_force_n: f64,
}

impl HeaveBody {
    /// Create a body at rest at the given initial heave position
    pub fn new(mass_kg: f64, initial_heave_m: f64) -> Self {
        Self {
            mass_kg,
            added_mass_kg: 0.0,
            position_m: initial_heave_m,
            velocity_m_per_s: 0.0,
            applied_force_n: 0.0,
        }
    }

    /// Effective inertia seen by the integrator (kg)
    pub fn total_inertia_kg(&self) -> f64 {
        self.mass_kg + self.added_mass_kg
    }
}
