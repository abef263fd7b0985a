//! Hardware adapter — bridges the board's output lines to the domain port.
//!
//! Owns both indicator lines and the igniter gate, exposing them through
//! [`OutputPort`].  On non-espidf targets the underlying drivers use
//! cfg-gated simulation stubs.

use crate::app::ports::OutputPort;
use crate::drivers::igniter::IgniterDriver;
use crate::drivers::output_line::OutputLine;
use crate::fsm::OutputState;
use crate::pins;

/// Concrete adapter that combines all output hardware behind [`OutputPort`].
pub struct HardwareAdapter {
    ignition_led: OutputLine,
    link_led: OutputLine,
    igniter: IgniterDriver,
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            ignition_led: OutputLine::new(pins::LED_IGNITION_GPIO),
            link_led: OutputLine::new(pins::LED_LINK_GPIO),
            igniter: IgniterDriver::new(),
        }
    }

    /// The levels currently driven on the three lines.
    pub fn state(&self) -> OutputState {
        OutputState {
            ignition_indicator: self.ignition_led.is_on(),
            link_indicator: self.link_led.is_on(),
            igniter: self.igniter.is_energised(),
        }
    }

    /// Safe → energised edges of the igniter since boot.
    pub fn igniter_firings(&self) -> u32 {
        self.igniter.firings()
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn set_ignition_indicator(&mut self, on: bool) {
        self.ignition_led.set(on);
    }

    fn set_link_indicator(&mut self, on: bool) {
        self.link_led.set(on);
    }

    fn set_igniter(&mut self, on: bool) {
        if on {
            self.igniter.energise();
        } else {
            self.igniter.safe();
        }
    }
}
