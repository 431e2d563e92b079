//! Fixed-step heave dynamics engine.
//!
//! The system owns the body and a set of registered force elements. One step
//! evaluates every element exactly once against the pre-step body state,
//! stores the accumulated force on the body, then advances velocity and
//! position with a semi-implicit Euler update:
//!
//! 1. F = Σ elementᵢ(body, t)
//! 2. v(t + dt) = v(t) + dt · F / (m + a∞)
//! 3. x(t + dt) = x(t) + dt · v(t + dt)
//!
//! Simulated time is derived from the step count, so the fixed-step schedule
//! carries no accumulation drift.

use super::HeaveBody;

/// A force contribution evaluated once per step during force accumulation
pub trait ForceElement {
    /// Element name for logging
    fn name(&self) -> &'static str;

    /// Force on the body along the heave axis (N) at the pre-step state
    fn force(&mut self, body: &HeaveBody, time_s: f64) -> f64;
}

/// Constant gravitational force
pub struct Gravity {
    mass_kg: f64,
    g_m_per_s2: f64,
}

impl Gravity {
    pub fn new(mass_kg: f64, g_m_per_s2: f64) -> Self {
        Self { mass_kg, g_m_per_s2 }
    }
}

impl ForceElement for Gravity {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn force(&mut self, _body: &HeaveBody, _time_s: f64) -> f64 {
        -self.mass_kg * self.g_m_per_s2
    }
}

/// The discrete-time heave dynamics system
pub struct HeaveSystem {
    /// Body state, readable by the loop for telemetry and rendering
    pub body: HeaveBody,
    elements: Vec<Box<dyn ForceElement>>,
    timestep_s: f64,
    step_count: u64,
}

impl HeaveSystem {
    /// Create a system around a body with a fixed timestep
    pub fn new(body: HeaveBody, timestep_s: f64) -> Self {
        assert!(timestep_s > 0.0, "timestep must be positive");
        Self {
            body,
            elements: Vec::new(),
            timestep_s,
            step_count: 0,
        }
    }

    /// Register a force element for the accumulation phase
    pub fn add_element(&mut self, element: Box<dyn ForceElement>) {
        log::debug!("Registered force element: {}", element.name());
        self.elements.push(element);
    }

    /// Current simulated time (s)
    pub fn time_s(&self) -> f64 {
        self.step_count as f64 * self.timestep_s
    }

    /// Fixed timestep (s)
    pub fn timestep_s(&self) -> f64 {
        self.timestep_s
    }

    /// Number of completed steps
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Advance the system by one fixed timestep
    pub fn step(&mut self) {
        let time_s = self.time_s();

        let mut total_n = 0.0;
        for element in &mut self.elements {
            total_n += element.force(&self.body, time_s);
        }
        self.body.applied_force_n = total_n;

        let accel = total_n / self.body.total_inertia_kg();
        self.body.velocity_m_per_s += accel * self.timestep_s;
        self.body.position_m += self.body.velocity_m_per_s * self.timestep_s;
        self.step_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantForce(f64);

    impl ForceElement for ConstantForce {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn force(&mut self, _body: &HeaveBody, _time_s: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_time_advances_by_fixed_timestep() {
        let mut system = HeaveSystem::new(HeaveBody::new(1.0, 0.0), 0.015);
        assert_eq!(system.time_s(), 0.0);
        system.step();
        system.step();
        assert!((system.time_s() - 0.03).abs() < 1e-12);
        assert_eq!(system.step_count(), 2);
    }

    #[test]
    fn test_semi_implicit_euler_step() {
        // 2 kg body, 10 N upward: a = 5, v = 5*0.1 = 0.5, x = 0.5*0.1 = 0.05
        let mut system = HeaveSystem::new(HeaveBody::new(2.0, 0.0), 0.1);
        system.add_element(Box::new(ConstantForce(10.0)));
        system.step();
        assert!((system.body.velocity_m_per_s - 0.5).abs() < 1e-12);
        assert!((system.body.position_m - 0.05).abs() < 1e-12);
        assert!((system.body.applied_force_n - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_added_mass_increases_inertia() {
        let mut body = HeaveBody::new(2.0, 0.0);
        body.added_mass_kg = 2.0;
        let mut system = HeaveSystem::new(body, 0.1);
        system.add_element(Box::new(ConstantForce(10.0)));
        system.step();
        // a = 10 / 4 = 2.5, v = 0.25
        assert!((system.body.velocity_m_per_s - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_forces_accumulate_across_elements() {
        let mut system = HeaveSystem::new(HeaveBody::new(1.0, 0.0), 0.1);
        system.add_element(Box::new(ConstantForce(3.0)));
        system.add_element(Box::new(ConstantForce(-1.0)));
        system.step();
        assert!((system.body.applied_force_n - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_force() {
        let mut gravity = Gravity::new(100.0, 9.81);
        let body = HeaveBody::new(100.0, 0.0);
        assert!((gravity.force(&body, 0.0) + 981.0).abs() < 1e-9);
    }
}
