//! Fuzz target: `IgniterService` cycle invariants
//!
//! Feeds arbitrary sample sequences (two bytes per sample, little endian)
//! through the service and a recording output port, verifying:
//! - No panics for any sample value
//! - The igniter is on iff the cycle classified as IGNITION
//! - No intermediate line state pairs an energised igniter with the
//!   link indicator on or the ignition indicator off
//!
//! cargo fuzz run fuzz_cycle_invariants

#![no_main]

use igniter::app::events::AppEvent;
use igniter::app::ports::{EventSink, OutputPort};
use igniter::app::service::IgniterService;
use igniter::config::IgniterConfig;
use igniter::fsm::{Mode, OutputState, Sample};
use libfuzzer_sys::fuzz_target;

// ── Checking output port ──────────────────────────────────────

struct CheckedLines {
    state: OutputState,
}

impl CheckedLines {
    fn check(&self) {
        if self.state.igniter {
            assert!(self.state.ignition_indicator, "igniter on, ignition LED off");
            assert!(!self.state.link_indicator, "igniter on, link LED on");
        }
    }
}

impl OutputPort for CheckedLines {
    fn set_ignition_indicator(&mut self, on: bool) {
        self.state.ignition_indicator = on;
        self.check();
    }

    fn set_link_indicator(&mut self, on: bool) {
        self.state.link_indicator = on;
        self.check();
    }

    fn set_igniter(&mut self, on: bool) {
        self.state.igniter = on;
        self.check();
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut app = IgniterService::new(&IgniterConfig::default());
    let mut lines = CheckedLines {
        state: OutputState::all_off(),
    };
    let mut sink = NullSink;
    app.start(&mut lines, &mut sink);

    for chunk in data.chunks_exact(2) {
        let v = u16::from_le_bytes([chunk[0], chunk[1]]);
        let report = app.step(Sample(v), &mut lines, &mut sink);
        assert_eq!(report.outputs.igniter, report.mode == Mode::Ignition);
        assert_eq!(lines.state, report.outputs);
    }
});
