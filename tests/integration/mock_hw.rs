//! Mock hardware adapters for integration tests.
//!
//! Records every output-line call so tests can assert on the full command
//! history without touching real GPIO registers.

use std::collections::VecDeque;

use igniter::app::events::AppEvent;
use igniter::app::ports::{EventSink, OutputPort, SamplerPort};
use igniter::fsm::{OutputState, Sample};

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    IgnitionLed(bool),
    LinkLed(bool),
    Igniter(bool),
}

// ── MockOutputs ───────────────────────────────────────────────

pub struct MockOutputs {
    pub calls: Vec<OutputCall>,
    pub state: OutputState,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            state: OutputState::all_off(),
        }
    }

    /// Every output state observable between two individual line writes.
    pub fn intermediate_states(&self) -> Vec<OutputState> {
        let mut s = OutputState::all_off();
        self.calls
            .iter()
            .map(|c| {
                match *c {
                    OutputCall::IgnitionLed(on) => s.ignition_indicator = on,
                    OutputCall::LinkLed(on) => s.link_indicator = on,
                    OutputCall::Igniter(on) => s.igniter = on,
                }
                s
            })
            .collect()
    }
}

impl Default for MockOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for MockOutputs {
    fn set_ignition_indicator(&mut self, on: bool) {
        self.calls.push(OutputCall::IgnitionLed(on));
        self.state.ignition_indicator = on;
    }

    fn set_link_indicator(&mut self, on: bool) {
        self.calls.push(OutputCall::LinkLed(on));
        self.state.link_indicator = on;
    }

    fn set_igniter(&mut self, on: bool) {
        self.calls.push(OutputCall::Igniter(on));
        self.state.igniter = on;
    }
}

// ── ScriptedSampler ───────────────────────────────────────────

/// Replays a fixed list of samples; reads zero (dead input) once empty.
pub struct ScriptedSampler {
    samples: VecDeque<u16>,
    pub measured: usize,
}

impl ScriptedSampler {
    pub fn new(samples: &[u16]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            measured: 0,
        }
    }
}

impl SamplerPort for ScriptedSampler {
    fn measure(&mut self) -> Sample {
        self.measured += 1;
        Sample(self.samples.pop_front().unwrap_or(0))
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
