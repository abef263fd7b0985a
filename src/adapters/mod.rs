//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to                    |
//! |------------|-------------|--------------------------------|
//! | `hardware` | OutputPort  | Indicator LEDs, igniter gate   |
//! | `log_sink` | EventSink   | Serial log output              |
//! | `time`     | DelayNs     | ESP32 system timer / FreeRTOS  |
//!
//! The pulse counter port is implemented directly by
//! [`PcntCounter`](crate::drivers::pulse_counter::PcntCounter).

pub mod hardware;
pub mod log_sink;
pub mod time;
