//! PTO spring-damper force element.
//!
//! Connects the floating body to a fixed anchor below it. The force combines
//! a linear spring term about the rest length with a linear damping term on
//! the stretch rate; both coefficients are pulled from the parameter store on
//! every evaluation, so a slider change committed before a step is the value
//! that step integrates with.

use std::rc::Rc;

use crate::config::PtoParameters;
use crate::physics::{ForceElement, HeaveBody};

use super::PtoParameterStore;

/// Spring-damper between the body attachment point and a fixed anchor
#[derive(Clone)]
pub struct SpringDamper {
    store: Rc<PtoParameterStore>,
    rest_length_m: f64,
    attachment_offset_m: f64,
    anchor_heave_m: f64,
}

impl SpringDamper {
    /// Create the spring-damper from the PTO configuration
    pub fn new(store: Rc<PtoParameterStore>, params: &PtoParameters) -> Self {
        Self {
            store,
            rest_length_m: params.rest_length_m,
            attachment_offset_m: params.attachment_offset_m,
            anchor_heave_m: params.anchor_heave_m,
        }
    }

    /// Current spring length: attachment point to anchor (m)
    pub fn length(&self, body: &HeaveBody) -> f64 {
        body.position_m + self.attachment_offset_m - self.anchor_heave_m
    }

    /// Rate of change of the spring length (m/s)
    pub fn stretch_rate(&self, body: &HeaveBody) -> f64 {
        // The anchor is fixed, so the stretch rate is the body heave velocity
        body.velocity_m_per_s
    }

    /// Spring-damper force on the body along the heave axis (N)
    ///
    /// Reads the stiffness and damping coefficients fresh from the store.
    pub fn force(&self, body: &HeaveBody) -> f64 {
        let stiffness = self.store.stiffness();
        let damping = self.store.damping();
        -stiffness * (self.length(body) - self.rest_length_m)
            - damping * self.stretch_rate(body)
    }

    /// Spring rest length (m)
    pub fn rest_length_m(&self) -> f64 {
        self.rest_length_m
    }

    /// Attachment offset relative to the body origin (m)
    pub fn attachment_offset_m(&self) -> f64 {
        self.attachment_offset_m
    }

    /// Fixed anchor position on the heave axis (m)
    pub fn anchor_heave_m(&self) -> f64 {
        self.anchor_heave_m
    }
}

impl ForceElement for SpringDamper {
    fn name(&self) -> &'static str {
        "pto-spring-damper"
    }

    fn force(&mut self, body: &HeaveBody, _time_s: f64) -> f64 {
        SpringDamper::force(self, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pto::PtoCoefficient;

    fn test_spring() -> SpringDamper {
        let store = Rc::new(PtoParameterStore::new(1000.0, 10.0));
        SpringDamper::new(store, &PtoParameters::default())
    }

    #[test]
    fn test_length_from_geometry() {
        let spring = test_spring();
        let body = HeaveBody::new(1.0, -1.0);
        // Attachment at -1 + -1 = -2, anchor at -10
        assert!((spring.length(&body) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_force_combines_spring_and_damping_terms() {
        let spring = test_spring();
        let mut body = HeaveBody::new(1.0, -1.0);
        body.velocity_m_per_s = 2.0;
        // Stretch = 8 - 5 = 3 m, so -1000*3 - 10*2 = -3020 N
        assert!((spring.force(&body) + 3020.0).abs() < 1e-9);
    }

    #[test]
    fn test_force_uses_latest_store_values() {
        let store = Rc::new(PtoParameterStore::new(1000.0, 0.0));
        let spring = SpringDamper::new(store.clone(), &PtoParameters::default());
        let body = HeaveBody::new(1.0, -1.0);

        let before = spring.force(&body);
        store.set(PtoCoefficient::Stiffness, 2000.0);
        let after = spring.force(&body);

        assert!((before + 3000.0).abs() < 1e-9);
        assert!((after + 6000.0).abs() < 1e-9);
    }
}
