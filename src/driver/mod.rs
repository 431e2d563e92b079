//! Step driver: the record-then-advance loop state machine.
//!
//! Each iteration appends one telemetry record computed from the pre-step
//! state, then advances the physical system by one fixed timestep. The log's
//! last row therefore reflects the final pre-step state of the iteration the
//! loop exits on. The driver terminates when simulated time exceeds the
//! configured ceiling or when the windowing substrate reports the window
//! closed; both transitions are final.

use anyhow::Result;

use crate::physics::HeaveSystem;
use crate::pto::SpringDamper;
use crate::telemetry::{TelemetryRecord, TelemetrySink};

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminated,
}

/// Owns the system, the telemetry sink and the termination conditions
pub struct StepDriver {
    system: HeaveSystem,
    spring: SpringDamper,
    sink: TelemetrySink,
    time_ceiling_s: f64,
    state: DriverState,
}

impl StepDriver {
    /// Enter `Running`; the sink must already be open
    pub fn new(
        system: HeaveSystem,
        spring: SpringDamper,
        sink: TelemetrySink,
        time_ceiling_s: f64,
    ) -> Self {
        log::info!(
            "Simulation loop entering Running: dt = {} s, ceiling = {} s",
            system.timestep_s(),
            time_ceiling_s
        );
        Self {
            system,
            spring,
            sink,
            time_ceiling_s,
            state: DriverState::Running,
        }
    }

    /// Current loop state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Physical system, readable for rendering and HUD readouts
    pub fn system(&self) -> &HeaveSystem {
        &self.system
    }

    /// PTO spring element, readable for rendering and HUD readouts
    pub fn spring(&self) -> &SpringDamper {
        &self.spring
    }

    /// Observables of the current (pre-step) state
    pub fn snapshot(&self) -> TelemetryRecord {
        let body = &self.system.body;
        TelemetryRecord {
            time_s: self.system.time_s(),
            position_m: body.position_m,
            velocity_m_per_s: body.velocity_m_per_s,
            applied_force_n: body.applied_force_n,
            spring_length_m: self.spring.length(body),
            spring_velocity_m_per_s: self.spring.stretch_rate(body),
            spring_force_n: self.spring.force(body),
        }
    }

    /// One loop iteration: append the pre-step record, then advance.
    ///
    /// Returns the state after the iteration. Records are appended while
    /// simulated time has not passed the ceiling, so the last logged time is
    /// the largest step multiple not exceeding it.
    pub fn record_and_step(&mut self) -> Result<DriverState> {
        if self.state == DriverState::Terminated {
            return Ok(DriverState::Terminated);
        }
        if self.system.time_s() > self.time_ceiling_s {
            log::info!(
                "Time ceiling {} s reached after {} steps; terminating",
                self.time_ceiling_s,
                self.system.step_count()
            );
            self.state = DriverState::Terminated;
            return Ok(DriverState::Terminated);
        }

        let record = self.snapshot();
        self.sink.append(&record)?;
        self.system.step();
        Ok(DriverState::Running)
    }

    /// External termination (window closed). Final, like the ceiling.
    pub fn terminate(&mut self) {
        if self.state == DriverState::Running {
            log::info!(
                "Loop terminated externally at t = {} s",
                self.system.time_s()
            );
            self.state = DriverState::Terminated;
        }
    }

    /// Run iterations until the ceiling terminates the loop (headless mode)
    pub fn run_to_ceiling(&mut self) -> Result<()> {
        while self.record_and_step()? == DriverState::Running {}
        Ok(())
    }

    /// Close the telemetry sink; must be called on every exit path
    pub fn finish(self) -> Result<()> {
        self.sink.finish()?;
        Ok(())
    }
}
