//! Latest-value store for the live-tunable PTO coefficients.
//!
//! A single-slot store: the control surface overwrites, the spring-damper
//! reads fresh once per step. Both run on the one control thread, so plain
//! `Cell`s are enough; a multi-threaded UI substrate would swap these for
//! atomics behind the same `set`/`get` surface.

use std::cell::Cell;

/// The two operator-tunable PTO coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtoCoefficient {
    /// Spring stiffness (N/m)
    Stiffness,
    /// Damping coefficient (N·s/m)
    Damping,
}

/// Shared store holding the current PTO coefficients
#[derive(Debug)]
pub struct PtoParameterStore {
    stiffness_n_per_m: Cell<f64>,
    damping_n_s_per_m: Cell<f64>,
}

impl PtoParameterStore {
    /// Create a store seeded with the configured defaults
    pub fn new(default_stiffness_n_per_m: f64, default_damping_n_s_per_m: f64) -> Self {
        Self {
            stiffness_n_per_m: Cell::new(default_stiffness_n_per_m),
            damping_n_s_per_m: Cell::new(default_damping_n_s_per_m),
        }
    }

    /// Overwrite the named coefficient unconditionally
    pub fn set(&self, kind: PtoCoefficient, value: f64) {
        match kind {
            PtoCoefficient::Stiffness => self.stiffness_n_per_m.set(value),
            PtoCoefficient::Damping => self.damping_n_s_per_m.set(value),
        }
    }

    /// Latest written value, or the construction-time default
    pub fn get(&self, kind: PtoCoefficient) -> f64 {
        match kind {
            PtoCoefficient::Stiffness => self.stiffness_n_per_m.get(),
            PtoCoefficient::Damping => self.damping_n_s_per_m.get(),
        }
    }

    /// Current spring stiffness (N/m)
    pub fn stiffness(&self) -> f64 {
        self.stiffness_n_per_m.get()
    }

    /// Current damping coefficient (N·s/m)
    pub fn damping(&self) -> f64 {
        self.damping_n_s_per_m.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_until_first_write() {
        let store = PtoParameterStore::new(1.0e5, 100.0);
        assert_eq!(store.get(PtoCoefficient::Stiffness), 1.0e5);
        assert_eq!(store.get(PtoCoefficient::Damping), 100.0);
    }

    #[test]
    fn test_latest_write_wins() {
        let store = PtoParameterStore::new(1.0e5, 100.0);
        store.set(PtoCoefficient::Damping, 250.0);
        store.set(PtoCoefficient::Damping, 750.0);
        assert_eq!(store.get(PtoCoefficient::Damping), 750.0);
        // Stiffness slot untouched
        assert_eq!(store.get(PtoCoefficient::Stiffness), 1.0e5);
    }
}
