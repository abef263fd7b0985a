//! Application core — pure domain logic, zero I/O.
//!
//! Sampling, classification and output arbitration for the igniter.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
