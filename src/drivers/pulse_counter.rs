//! PCNT pulse-counter driver.
//!
//! Counts rising edges of the companion controller's pulse train on
//! [`pins::PULSE_INPUT_GPIO`](crate::pins::PULSE_INPUT_GPIO).  The gate is
//! the PCNT pause/resume control; there is no interrupt, so nothing is
//! counted while the unit is paused.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives PCNT unit 0 via hw_init.  The hardware counter is
//! signed 16-bit and resets at its high limit; the value is reinterpreted
//! as unsigned.
//! On host/test: a process-global atomic counter fed by
//! [`hw_init::sim_inject_pulses`].

use crate::app::ports::PulseCounterPort;
use crate::drivers::hw_init;

/// Handle to the board's single pulse-counter unit.
pub struct PcntCounter {
    running: bool,
}

impl PcntCounter {
    /// Wrap the unit configured by [`hw_init::init_peripherals`].
    pub fn new() -> Self {
        hw_init::pcnt_pause();
        hw_init::pcnt_clear();
        Self { running: false }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for PcntCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounterPort for PcntCounter {
    fn clear(&mut self) {
        hw_init::pcnt_clear();
    }

    fn resume(&mut self) {
        hw_init::pcnt_resume();
        self.running = true;
    }

    fn pause(&mut self) {
        hw_init::pcnt_pause();
        self.running = false;
    }

    fn count(&self) -> u16 {
        hw_init::pcnt_read()
    }
}
