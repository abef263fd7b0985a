//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::fsm::Mode;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "off" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs forced off");
            }
            AppEvent::SelfTestComplete(cycles) => {
                info!("SELFTEST | {} blink cycles done", cycles);
            }
            AppEvent::ModeChanged { from, to: Mode::Ignition } => {
                warn!("MODE | {:?} -> IGNITION, igniter energised", from);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {}", from, to);
            }
            AppEvent::Cycle(r) => {
                debug!(
                    "CYCLE {} | {} | {} | ign_led={} link_led={} igniter={}",
                    r.cycle,
                    r.sample,
                    r.mode,
                    on_off(r.outputs.ignition_indicator),
                    on_off(r.outputs.link_indicator),
                    on_off(r.outputs.igniter),
                );
            }
        }
    }
}
