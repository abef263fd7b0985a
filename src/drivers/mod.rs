//! Actuator drivers, the pulse counter, hardware initialisation, and the
//! task watchdog.

pub mod hw_init;
pub mod igniter;
pub mod output_line;
pub mod pulse_counter;
pub mod watchdog;
