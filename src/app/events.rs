//! Outbound application events.
//!
//! The [`IgniterService`](super::service::IgniterService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them.

use crate::fsm::{Mode, OutputState, Sample};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has been constructed and its outputs forced off.
    Started,

    /// The startup indicator blink finished (carries the cycle count).
    SelfTestComplete(u8),

    /// The classified mode differs from the previous cycle's.
    /// `from` is `None` on the very first cycle.
    ModeChanged { from: Option<Mode>, to: Mode },

    /// One sample → classify → drive cycle completed.
    Cycle(CycleReport),
}

/// Everything one cycle decided, suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    pub sample: Sample,
    pub mode: Mode,
    pub outputs: OutputState,
}
