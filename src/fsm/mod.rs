//! Frequency-band mode machine.
//!
//! Every cycle the machine is re-entered from scratch: the mode is a pure
//! function of the current [`Sample`], and the only carried state is the
//! link indicator's own previous value (see [`outputs`]).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  BandTable (checked top to bottom)                   │
//! │  ┌───────────┬─────────┬─────────┬───────────────┐   │
//! │  │ Band      │ Lower   │ Upper   │ Mode          │   │
//! │  ├───────────┼─────────┼─────────┼───────────────┤   │
//! │  │ ignition  │   300   │   600   │ Ignition      │   │
//! │  │ link      │  4500   │  5500   │ LinkOk        │   │
//! │  │ (else)    │    —    │    —    │ Idle          │   │
//! │  └───────────┴─────────┴─────────┴───────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The ignition band is tested first so the only check that can energise
//! the igniter short-circuits the others.  Bounds are inclusive.

pub mod outputs;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use outputs::{OutputState, drive};

// ---------------------------------------------------------------------------
// Sample
// ---------------------------------------------------------------------------

/// Pulses counted during one measurement window (Hz for a 1 s window).
///
/// Lives for a single cycle.  The counter wraps silently, so an input far
/// above the bands may alias to any value; that is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sample(pub u16);

impl From<u16> for Sample {
    fn from(count: u16) -> Self {
        Self(count)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Operating mode derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Sample inside the ignition band: igniter energised.
    Ignition = 0,
    /// Sample inside the link-test band: link indicator heartbeat.
    LinkOk = 1,
    /// Anything else, including a dead or saturated input.
    Idle = 2,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ignition => "IGNITION",
            Self::LinkOk => "LINK_OK",
            Self::Idle => "IDLE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Inclusive range of sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub lower: u16,
    pub upper: u16,
}

impl Band {
    pub const fn new(lower: u16, upper: u16) -> Self {
        Self { lower, upper }
    }

    pub const fn contains(&self, sample: Sample) -> bool {
        sample.0 >= self.lower && sample.0 <= self.upper
    }

    /// True if the two bands share at least one value.
    pub const fn overlaps(&self, other: &Band) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

/// The two classification bands, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandTable {
    pub ignition: Band,
    pub link: Band,
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            ignition: Band::new(300, 600),
            link: Band::new(4500, 5500),
        }
    }
}

/// Map a sample to its mode.  Total over the whole `u16` range.
pub fn classify(sample: Sample, bands: &BandTable) -> Mode {
    if bands.ignition.contains(sample) {
        Mode::Ignition
    } else if bands.link.contains(sample) {
        Mode::LinkOk
    } else {
        Mode::Idle
    }
}
