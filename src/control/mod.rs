//! Control surface translating raw UI slider positions into PTO coefficients.
//!
//! Each adjustable parameter has a tagged binding holding its own linear
//! range mapping, so no magic-number comparisons leak into the loop. Events
//! with unrecognized tags are left unconsumed for other handlers.

use std::rc::Rc;

use crate::config::PtoParameters;
use crate::pto::{PtoCoefficient, PtoParameterStore};

/// Stable tag of the damping slider
pub const DAMPING_CONTROL_TAG: u32 = 101;
/// Stable tag of the stiffness slider
pub const STIFFNESS_CONTROL_TAG: u32 = 102;

/// A slider change: which control moved and its new raw position.
///
/// Ephemeral: consumed on the iteration it is polled, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiEvent {
    /// Control tag
    pub tag: u32,
    /// Raw position within the control's declared range
    pub raw_position: u32,
}

/// One control's mapping from raw slider positions to a coefficient range
#[derive(Debug, Clone)]
pub struct ControlBinding {
    tag: u32,
    kind: PtoCoefficient,
    raw_max: u32,
    min: f64,
    max: f64,
}

impl ControlBinding {
    /// Create a binding; panics on a degenerate range
    pub fn new(tag: u32, kind: PtoCoefficient, raw_max: u32, min: f64, max: f64) -> Self {
        assert!(raw_max > 0, "control {tag}: raw range must be non-degenerate");
        assert!(min < max, "control {tag}: range must satisfy min < max");
        Self {
            tag,
            kind,
            raw_max,
            min,
            max,
        }
    }

    /// Control tag
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Coefficient this control drives
    pub fn kind(&self) -> PtoCoefficient {
        self.kind
    }

    /// Raw range upper bound (inclusive)
    pub fn raw_max(&self) -> u32 {
        self.raw_max
    }

    /// Linear, monotone map from a raw position to a coefficient value.
    ///
    /// Raw 0 maps to the range minimum, `raw_max` to the range maximum. The
    /// UI substrate already clamps the reported position to the declared
    /// range; out-of-range values are clamped again here anyway.
    pub fn map(&self, raw: u32) -> f64 {
        let raw = raw.min(self.raw_max);
        self.min + (self.max - self.min) * f64::from(raw) / f64::from(self.raw_max)
    }

    /// Nearest raw position for a coefficient value (used to seat sliders
    /// at the store defaults on startup)
    pub fn raw_for(&self, value: f64) -> u32 {
        let t = (value - self.min) / (self.max - self.min);
        (t * f64::from(self.raw_max)).round().clamp(0.0, f64::from(self.raw_max)) as u32
    }
}

/// Dispatches slider events to the parameter store
pub struct ControlSurface {
    bindings: Vec<ControlBinding>,
    store: Rc<PtoParameterStore>,
}

impl ControlSurface {
    /// Create a surface with explicit bindings
    pub fn new(store: Rc<PtoParameterStore>, bindings: Vec<ControlBinding>) -> Self {
        Self { bindings, store }
    }

    /// Create a surface with the two standard PTO bindings from config
    pub fn with_default_bindings(store: Rc<PtoParameterStore>, params: &PtoParameters) -> Self {
        let bindings = vec![
            ControlBinding::new(
                DAMPING_CONTROL_TAG,
                PtoCoefficient::Damping,
                params.damping_raw_max,
                0.0,
                params.damping_max_n_s_per_m,
            ),
            ControlBinding::new(
                STIFFNESS_CONTROL_TAG,
                PtoCoefficient::Stiffness,
                params.stiffness_raw_max,
                0.0,
                params.stiffness_max_n_per_m,
            ),
        ];
        Self::new(store, bindings)
    }

    /// Handle one slider event.
    ///
    /// Returns `true` when the event matched a binding and the mapped value
    /// was written to the store; `false` leaves the event for other handlers.
    pub fn handle(&self, event: &UiEvent) -> bool {
        match self.bindings.iter().find(|b| b.tag == event.tag) {
            Some(binding) => {
                let value = binding.map(event.raw_position);
                self.store.set(binding.kind, value);
                log::debug!(
                    "control {} -> {:?} = {}",
                    event.tag,
                    binding.kind,
                    value
                );
                true
            }
            None => false,
        }
    }

    /// Binding for a coefficient, if one is configured
    pub fn binding(&self, kind: PtoCoefficient) -> Option<&ControlBinding> {
        self.bindings.iter().find(|b| b.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_surface() -> (Rc<PtoParameterStore>, ControlSurface) {
        let store = Rc::new(PtoParameterStore::new(1.0e5, 100.0));
        let surface = ControlSurface::with_default_bindings(store.clone(), &PtoParameters::default());
        (store, surface)
    }

    #[test]
    fn test_mapping_endpoints() {
        let binding = ControlBinding::new(101, PtoCoefficient::Damping, 101, 0.0, 1000.0);
        assert_eq!(binding.map(0), 0.0);
        assert_eq!(binding.map(101), 1000.0);
    }

    #[test]
    fn test_mapping_monotone_and_injective() {
        let binding = ControlBinding::new(101, PtoCoefficient::Damping, 101, 0.0, 1000.0);
        let mut prev = binding.map(0);
        for raw in 1..=101 {
            let value = binding.map(raw);
            assert!(value > prev, "map must be strictly increasing at raw={raw}");
            assert!((0.0..=1000.0).contains(&value));
            prev = value;
        }
    }

    #[test]
    fn test_raw_for_inverts_map() {
        let binding = ControlBinding::new(102, PtoCoefficient::Stiffness, 1000, 0.0, 2.0e6);
        for raw in [0, 1, 50, 499, 1000] {
            assert_eq!(binding.raw_for(binding.map(raw)), raw);
        }
    }

    #[test]
    fn test_out_of_range_raw_clamped() {
        let binding = ControlBinding::new(101, PtoCoefficient::Damping, 101, 0.0, 1000.0);
        assert_eq!(binding.map(5000), 1000.0);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_range_rejected() {
        let _ = ControlBinding::new(7, PtoCoefficient::Damping, 10, 5.0, 5.0);
    }

    #[test]
    fn test_handled_event_updates_store() {
        let (store, surface) = test_surface();
        let consumed = surface.handle(&UiEvent {
            tag: STIFFNESS_CONTROL_TAG,
            raw_position: 1000,
        });
        assert!(consumed);
        assert_eq!(store.get(PtoCoefficient::Stiffness), 2.0e6);
    }

    #[test]
    fn test_unrecognized_tag_is_not_consumed() {
        let (store, surface) = test_surface();
        let consumed = surface.handle(&UiEvent {
            tag: 999,
            raw_position: 3,
        });
        assert!(!consumed);
        // Store untouched
        assert_eq!(store.get(PtoCoefficient::Stiffness), 1.0e5);
        assert_eq!(store.get(PtoCoefficient::Damping), 100.0);
    }

    #[test]
    fn test_sequential_writes_latest_wins() {
        let (store, surface) = test_surface();
        surface.handle(&UiEvent {
            tag: DAMPING_CONTROL_TAG,
            raw_position: 10,
        });
        surface.handle(&UiEvent {
            tag: DAMPING_CONTROL_TAG,
            raw_position: 101,
        });
        assert_eq!(store.get(PtoCoefficient::Damping), 1000.0);
    }
}
