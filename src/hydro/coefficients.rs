//! Precomputed hydrodynamic coefficients for the floating body.
//!
//! Loaded from a JSON resource produced offline (BEM solver output reduced to
//! the heave degree of freedom). Defaults approximate the 5 m radius sphere
//! of the decay test.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Heave hydrodynamic coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydroCoefficients {
    /// Static displaced-volume buoyancy at the equilibrium draft (N)
    pub buoyancy_n: f64,
    /// Hydrostatic restoring stiffness about the equilibrium draft (N/m)
    pub hydrostatic_stiffness_n_per_m: f64,
    /// Added mass at infinite frequency (kg)
    pub added_mass_kg: f64,
    /// Constant radiation damping coefficient (N·s/m)
    pub radiation_damping_n_s_per_m: f64,
    /// Radiation impulse-response kernel sampled at the solver timestep
    /// (N/m); empty disables the memory convolution
    #[serde(default)]
    pub radiation_irf: Vec<f64>,
    /// Excitation force per unit wave amplitude (N/m)
    pub excitation_n_per_m: f64,
    /// Excitation phase (rad)
    pub excitation_phase_rad: f64,
    /// Frequency of the driving regular wave (rad/s)
    pub wave_frequency_rad_per_s: f64,
}

impl HydroCoefficients {
    /// Load coefficients from a JSON file or return the sphere defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(coeffs) => {
                    log::info!("Loaded hydro coefficients from {:?}", path.as_ref());
                    coeffs
                }
                Err(e) => {
                    log::warn!("Failed to parse hydro coefficients: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Hydro coefficients file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for HydroCoefficients {
    fn default() -> Self {
        Self {
            // Balances gravity on the 261.8 t sphere at its equilibrium draft
            buoyancy_n: 261.8e3 * 9.81,
            // rho g Aw for a 5 m waterplane radius, seawater
            hydrostatic_stiffness_n_per_m: 7.897e5,
            added_mass_kg: 1.309e5,
            radiation_damping_n_s_per_m: 5.0e4,
            radiation_irf: Vec::new(),
            excitation_n_per_m: 6.0e5,
            excitation_phase_rad: 0.0,
            wave_frequency_rad_per_s: 1.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buoyancy_balances_gravity() {
        let coeffs = HydroCoefficients::default();
        assert!((coeffs.buoyancy_n - 261.8e3 * 9.81).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let coeffs = HydroCoefficients::load_or_default("no/such/file.json");
        assert!(coeffs.radiation_irf.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut coeffs = HydroCoefficients::default();
        coeffs.radiation_irf = vec![1.0, 0.5, 0.25];
        let json = serde_json::to_string(&coeffs).unwrap();
        let parsed: HydroCoefficients = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.radiation_irf.len(), 3);
        assert!((parsed.added_mass_kg - coeffs.added_mass_kg).abs() < 1e-9);
    }
}
