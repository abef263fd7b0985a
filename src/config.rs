//! System configuration parameters
//!
//! All tunable parameters for the igniter.  The firmware runs from
//! [`IgniterConfig::default`]; a bench build may bake in an override as
//! JSON through the `IGNITER_CONFIG` environment variable at compile time.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::fsm::{Band, BandTable};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgniterConfig {
    // --- Bands ---
    /// Sample range (Hz, inclusive) that energises the igniter.
    pub ignition_band: Band,
    /// Sample range (Hz, inclusive) used by the companion's link test.
    pub link_band: Band,

    // --- Timing ---
    /// Pulse-counter gate window (milliseconds).
    pub window_ms: u32,
    /// Number of ignition/link alternations in the startup self-test.
    pub self_test_cycles: u8,
    /// Duration of each half of a self-test alternation (milliseconds).
    pub self_test_half_period_ms: u32,
    /// Task watchdog timeout (milliseconds).
    pub watchdog_timeout_ms: u32,
}

impl Default for IgniterConfig {
    fn default() -> Self {
        Self {
            ignition_band: Band::new(300, 600),
            link_band: Band::new(4500, 5500),

            window_ms: 1000,
            self_test_cycles: 5,
            self_test_half_period_ms: 50,
            watchdog_timeout_ms: 10_000,
        }
    }
}

impl IgniterConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject any configuration that could blur the band boundaries or
    /// starve the watchdog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ignition_band.lower > self.ignition_band.upper {
            return Err(ConfigError::InvertedBand("ignition"));
        }
        if self.link_band.lower > self.link_band.upper {
            return Err(ConfigError::InvertedBand("link"));
        }
        if self.ignition_band.overlaps(&self.link_band) {
            return Err(ConfigError::OverlappingBands);
        }
        if self.window_ms == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        // A cycle is the window plus classification and logging, so one
        // window's worth of slack is required on top.
        if u64::from(self.watchdog_timeout_ms) < 2 * u64::from(self.window_ms) {
            return Err(ConfigError::WatchdogTooShort);
        }
        Ok(())
    }

    /// The classification table derived from the configured bands.
    pub fn band_table(&self) -> BandTable {
        BandTable {
            ignition: self.ignition_band,
            link: self.link_band,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a configuration is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`IgniterConfig`].
    Malformed,
    /// A band's lower bound is above its upper bound.
    InvertedBand(&'static str),
    /// The ignition and link bands share at least one value.
    OverlappingBands,
    /// The measurement window is zero milliseconds.
    ZeroWindow,
    /// The watchdog timeout is shorter than two measurement windows.
    WatchdogTooShort,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config document"),
            Self::InvertedBand(name) => write!(f, "{} band lower bound above upper bound", name),
            Self::OverlappingBands => write!(f, "ignition and link bands overlap"),
            Self::ZeroWindow => write!(f, "measurement window is zero"),
            Self::WatchdogTooShort => write!(f, "watchdog timeout shorter than two windows"),
        }
    }
}
