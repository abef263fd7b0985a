//! Application service — the hexagonal core.
//!
//! [`IgniterService`] owns the band table and the last applied output
//! state.  It exposes a hardware-agnostic API; all I/O flows through port
//! traits injected at call sites, making the entire service testable with
//! mock adapters.
//!
//! ```text
//!  SamplerPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │      IgniterService       │
//!   OutputPort ◀── │  classify · drive outputs │
//!                  └──────────────────────────┘
//! ```
//!
//! One task, no interrupts: sample (blocking for the window) → classify →
//! apply all three lines → repeat.  Nothing else runs while the window is
//! open.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::IgniterConfig;
use crate::fsm::{self, BandTable, Mode, OutputState, Sample};

use super::events::{AppEvent, CycleReport};
use super::ports::{EventSink, OutputPort, SamplerPort};

// ───────────────────────────────────────────────────────────────
// IgniterService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct IgniterService {
    bands: BandTable,
    /// Output combination applied by the last cycle.
    outputs: OutputState,
    /// Mode of the last cycle.  Only used to report changes.
    last_mode: Option<Mode>,
    cycle_count: u64,
    self_test_cycles: u8,
    self_test_half_period_ms: u32,
}

impl IgniterService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the outputs — call [`start`](Self::start) next.
    pub fn new(config: &IgniterConfig) -> Self {
        Self {
            bands: config.band_table(),
            outputs: OutputState::all_off(),
            last_mode: None,
            cycle_count: 0,
            self_test_cycles: config.self_test_cycles,
            self_test_half_period_ms: config.self_test_half_period_ms,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force every line off and announce the service.
    pub fn start(&mut self, out: &mut impl OutputPort, sink: &mut impl EventSink) {
        out.all_off();
        self.outputs = OutputState::all_off();
        sink.emit(&AppEvent::Started);
        info!("IgniterService started, bands {:?}", self.bands);
    }

    /// Startup lamp check: alternate the two indicators so an operator can
    /// see both work.  The igniter stays off throughout, and every line is
    /// off again when this returns.
    pub fn self_test(
        &mut self,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        out.set_igniter(false);
        for _ in 0..self.self_test_cycles {
            out.set_ignition_indicator(true);
            out.set_link_indicator(false);
            delay.delay_ms(self.self_test_half_period_ms);
            out.set_ignition_indicator(false);
            out.set_link_indicator(true);
            delay.delay_ms(self.self_test_half_period_ms);
        }
        out.all_off();
        self.outputs = OutputState::all_off();
        sink.emit(&AppEvent::SelfTestComplete(self.self_test_cycles));
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: measure → classify → apply outputs.
    pub fn cycle(
        &mut self,
        sampler: &mut impl SamplerPort,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        let sample = sampler.measure();
        self.step(sample, out, sink)
    }

    /// Classify an already-measured sample and apply the result.
    pub fn step(
        &mut self,
        sample: Sample,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count += 1;

        let (mode, next) = fsm::drive(self.outputs, sample, &self.bands);
        out.apply(next);
        self.outputs = next;

        if self.last_mode != Some(mode) {
            sink.emit(&AppEvent::ModeChanged {
                from: self.last_mode,
                to: mode,
            });
            self.last_mode = Some(mode);
        }

        let report = CycleReport {
            cycle: self.cycle_count,
            sample,
            mode,
            outputs: next,
        };
        sink.emit(&AppEvent::Cycle(report));
        report
    }

    /// Cycle forever.  `after_cycle` runs once per completed cycle (the
    /// firmware feeds its watchdog there).
    pub fn run(
        &mut self,
        sampler: &mut impl SamplerPort,
        out: &mut impl OutputPort,
        sink: &mut impl EventSink,
        mut after_cycle: impl FnMut(&CycleReport),
    ) -> ! {
        info!("Entering sample loop");
        loop {
            let report = self.cycle(sampler, out, sink);
            after_cycle(&report);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Output combination applied by the last cycle.
    pub fn outputs(&self) -> OutputState {
        self.outputs
    }

    /// Mode of the last cycle, `None` before the first one.
    pub fn mode(&self) -> Option<Mode> {
        self.last_mode
    }

    /// Total cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Active classification bands.
    pub fn bands(&self) -> &BandTable {
        &self.bands
    }
}
