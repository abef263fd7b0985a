//! Igniter MOSFET gate driver.
//!
//! A dumb actuator: the frequency band check in the service is the only
//! thing deciding when the gate goes HIGH.  Every edge is logged since it
//! is the one output with physical consequences.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the gate GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use log::{info, warn};

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgniterState {
    Safe,
    Energised,
}

pub struct IgniterDriver {
    state: IgniterState,
    /// Number of Safe → Energised edges since boot.
    firings: u32,
}

impl IgniterDriver {
    pub fn new() -> Self {
        Self {
            state: IgniterState::Safe,
            firings: 0,
        }
    }

    pub fn energise(&mut self) {
        hw_init::gpio_write(pins::IGNITER_GATE_GPIO, true);
        if self.state == IgniterState::Safe {
            self.firings = self.firings.saturating_add(1);
            warn!("Igniter ENERGISED (firing #{})", self.firings);
        }
        self.state = IgniterState::Energised;
    }

    pub fn safe(&mut self) {
        hw_init::gpio_write(pins::IGNITER_GATE_GPIO, false);
        if self.state == IgniterState::Energised {
            info!("Igniter safed");
        }
        self.state = IgniterState::Safe;
    }

    pub fn state(&self) -> IgniterState {
        self.state
    }

    pub fn is_energised(&self) -> bool {
        self.state == IgniterState::Energised
    }

    pub fn firings(&self) -> u32 {
        self.firings
    }
}

impl Default for IgniterDriver {
    fn default() -> Self {
        Self::new()
    }
}
