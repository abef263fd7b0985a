//! GPIO / peripheral pin assignments for the igniter board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Status indicators
// ---------------------------------------------------------------------------

/// Digital output: ignition indicator LED (active HIGH).
pub const LED_IGNITION_GPIO: i32 = 4;
/// Digital output: link indicator LED (active HIGH).
pub const LED_LINK_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Igniter switch
// ---------------------------------------------------------------------------

/// Digital output: gate of the igniter MOSFET.  HIGH = igniter energised.
pub const IGNITER_GATE_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Pulse input (from the companion controller)
// ---------------------------------------------------------------------------

/// Pulse-train input routed to the PCNT unit.
pub const PULSE_INPUT_GPIO: i32 = 34;

/// Input-isolation line, tied to the pulse input through the board.
/// Driving it LOW would hold the counter input at 0 V; bring-up leaves it
/// as a high-impedance input.
pub const INPUT_DISABLE_GPIO: i32 = 35;

// ---------------------------------------------------------------------------
// Pulse counter (PCNT) configuration
// ---------------------------------------------------------------------------

/// PCNT unit used for the frequency window.
pub const PCNT_UNIT: u32 = 0;
/// PCNT channel inside [`PCNT_UNIT`].
pub const PCNT_CHANNEL: u32 = 0;
/// High limit of the PCNT counter.  The hardware counter is signed 16-bit,
/// so this is the largest count a single window can report before it
/// resets to zero.
pub const PCNT_HIGH_LIMIT: i16 = i16::MAX;
