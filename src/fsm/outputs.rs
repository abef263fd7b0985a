//! Output realisation per mode.
//!
//! ```text
//!  Mode      │ ignition LED │ link LED        │ igniter
//! ───────────┼──────────────┼─────────────────┼─────────
//!  Ignition  │ ON           │ OFF             │ ON
//!  LinkOk    │ OFF          │ !previous       │ OFF
//!  Idle      │ OFF          │ ON              │ OFF
//! ```
//!
//! The link LED in `LinkOk` is a heartbeat: it blinks only while the input
//! stays in the link band across consecutive cycles.

use super::{BandTable, Mode, Sample, classify};

/// The three output lines, always set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputState {
    pub ignition_indicator: bool,
    pub link_indicator: bool,
    pub igniter: bool,
}

impl OutputState {
    /// Everything off: the state the loop starts from.
    pub const fn all_off() -> Self {
        Self {
            ignition_indicator: false,
            link_indicator: false,
            igniter: false,
        }
    }

    /// Output combination for `mode`, given the link indicator's value
    /// after the previous cycle.
    pub const fn for_mode(mode: Mode, prev_link: bool) -> Self {
        match mode {
            Mode::Ignition => Self {
                ignition_indicator: true,
                link_indicator: false,
                igniter: true,
            },
            Mode::LinkOk => Self {
                ignition_indicator: false,
                link_indicator: !prev_link,
                igniter: false,
            },
            Mode::Idle => Self {
                ignition_indicator: false,
                link_indicator: true,
                igniter: false,
            },
        }
    }
}

/// One cycle of the machine: classify `sample` and derive the next output
/// state from the previous one.
pub fn drive(prev: OutputState, sample: Sample, bands: &BandTable) -> (Mode, OutputState) {
    let mode = classify(sample, bands);
    (mode, OutputState::for_mode(mode, prev.link_indicator))
}
