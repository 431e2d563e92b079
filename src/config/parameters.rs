//! Parameter structures for the sphere decay simulation.
//!
//! Defaults reproduce the OES Task 10 sphere decay setup: a 261.8 t sphere
//! released 1 m below its equilibrium draft, restrained by a PTO spring-damper
//! with a 5 m rest length.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimParameters {
    /// Floating body parameters
    pub body: BodyParameters,
    /// PTO spring-damper parameters and control ranges
    pub pto: PtoParameters,
    /// Incident wave parameters
    pub wave: WaveParameters,
    /// Solver and output parameters
    pub solver: SolverParameters,
}

impl SimParameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir("data/parameters")
    }

    /// Load parameters from a specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            body: load_group(dir.join("body.json"), "body"),
            pto: load_group(dir.join("pto.json"), "pto"),
            wave: load_group(dir.join("wave.json"), "wave"),
            solver: load_group(dir.join("solver.json"), "solver"),
        }
    }
}

/// Load one parameter group from a JSON file, falling back to defaults
fn load_group<T, P>(path: P, what: &str) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded {} parameters from {:?}", what, path.as_ref());
                params
            }
            Err(e) => {
                log::warn!("Failed to parse {} parameters: {}, using defaults", what, e);
                T::default()
            }
        },
        Err(_) => {
            log::info!("{} parameters file not found, using defaults", what);
            T::default()
        }
    }
}

/// Floating body parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyParameters {
    /// Body mass (kg)
    pub mass_kg: f64,
    /// Initial heave position relative to the calm free surface (m)
    pub initial_heave_m: f64,
    /// Gravitational acceleration (m/s^2)
    pub gravity_m_per_s2: f64,
}

impl Default for BodyParameters {
    fn default() -> Self {
        Self {
            mass_kg: 261.8e3,
            initial_heave_m: -1.0,
            gravity_m_per_s2: 9.81,
        }
    }
}

/// PTO spring-damper parameters, including the slider control ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtoParameters {
    /// Default spring stiffness (N/m), effective until a slider event arrives
    pub default_stiffness_n_per_m: f64,
    /// Default damping coefficient (N·s/m)
    pub default_damping_n_s_per_m: f64,
    /// Spring rest length (m)
    pub rest_length_m: f64,
    /// Spring attachment point relative to the body origin (m, heave axis)
    pub attachment_offset_m: f64,
    /// Fixed anchor position on the heave axis (m)
    pub anchor_heave_m: f64,
    /// Damping slider raw range is 0..=damping_raw_max
    pub damping_raw_max: u32,
    /// Damping coefficient at the slider maximum (N·s/m)
    pub damping_max_n_s_per_m: f64,
    /// Stiffness slider raw range is 0..=stiffness_raw_max
    pub stiffness_raw_max: u32,
    /// Stiffness at the slider maximum (N/m)
    pub stiffness_max_n_per_m: f64,
}

impl Default for PtoParameters {
    fn default() -> Self {
        Self {
            default_stiffness_n_per_m: 1.0e5,
            default_damping_n_s_per_m: 1.0e2,
            rest_length_m: 5.0,
            attachment_offset_m: -1.0,
            anchor_heave_m: -10.0,
            damping_raw_max: 101,
            damping_max_n_s_per_m: 1.0e3,
            stiffness_raw_max: 1000,
            stiffness_max_n_per_m: 2.0e6,
        }
    }
}

/// Incident wave parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Amplitude of the driving regular wave (m)
    pub regular_wave_amplitude_m: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            regular_wave_amplitude_m: 0.022,
        }
    }
}

/// Solver and output parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverParameters {
    /// Fixed integration timestep (s)
    pub timestep_s: f64,
    /// Simulated time after which the loop terminates (s)
    pub time_ceiling_s: f64,
    /// Telemetry log path
    pub output_path: String,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            timestep_s: 0.015,
            time_ceiling_s: 1000.0,
            output_path: "output.txt".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_params() {
        let params = BodyParameters::default();
        assert!((params.mass_kg - 261.8e3).abs() < 1.0);
        assert!((params.initial_heave_m + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_pto_params() {
        let params = PtoParameters::default();
        assert!((params.default_stiffness_n_per_m - 1.0e5).abs() < 1e-6);
        assert!((params.rest_length_m - 5.0).abs() < 1e-12);
        assert!(params.damping_raw_max > 0);
        assert!(params.stiffness_raw_max > 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let params = SimParameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let parsed: SimParameters = serde_json::from_str(&json).unwrap();
        assert!((parsed.solver.timestep_s - params.solver.timestep_s).abs() < 1e-12);
        assert_eq!(parsed.solver.output_path, params.solver.output_path);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let params = SimParameters::load_from_dir("does/not/exist");
        assert!((params.solver.time_ceiling_s - 1000.0).abs() < 1e-12);
    }
}
