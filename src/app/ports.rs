//! Port traits — the hexagonal boundary between domain logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IgniterService (domain)
//! ```
//!
//! Driven adapters (pulse counter, output lines, event sinks) implement
//! these traits.  The [`IgniterService`](super::service::IgniterService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::fsm::{OutputState, Sample};

// ───────────────────────────────────────────────────────────────
// Pulse counter port (driven adapter: hardware → sampler)
// ───────────────────────────────────────────────────────────────

/// A free-running 16-bit pulse counter gated by an enable control.
///
/// No operation can fail: a dead input simply reads zero.
pub trait PulseCounterPort {
    /// Zero the accumulated count.  Does not change the gate.
    fn clear(&mut self);

    /// Open the gate: pulses on the input start accumulating.
    fn resume(&mut self);

    /// Close the gate: the count freezes.
    fn pause(&mut self);

    /// Current accumulated count, reinterpreted as unsigned.
    fn count(&self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Sampler port (sampler → domain)
// ───────────────────────────────────────────────────────────────

/// Produces one [`Sample`] per call by gating a counter for one window.
pub trait SamplerPort {
    /// Block for one measurement window and return the pulse count.
    fn measure(&mut self) -> Sample;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the three lines.
pub trait OutputPort {
    /// Drive the ignition indicator LED.
    fn set_ignition_indicator(&mut self, on: bool);

    /// Drive the link indicator LED.
    fn set_link_indicator(&mut self, on: bool);

    /// Drive the igniter MOSFET gate.
    fn set_igniter(&mut self, on: bool);

    /// Apply a full output combination within one call.
    ///
    /// The igniter is de-energised before the indicators change and only
    /// energised after them, so an observer never sees the igniter on
    /// next to a stale indicator pattern.
    fn apply(&mut self, state: OutputState) {
        if !state.igniter {
            self.set_igniter(false);
        }
        self.set_ignition_indicator(state.ignition_indicator);
        self.set_link_indicator(state.link_indicator);
        if state.igniter {
            self.set_igniter(true);
        }
    }

    /// Kill every line — igniter first.
    fn all_off(&mut self) {
        self.apply(OutputState::all_off());
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
