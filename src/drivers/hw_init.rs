//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions and the PCNT pulse-counter unit using raw
//! ESP-IDF sys calls.  Called once from `main()` before the sample loop
//! starts.  Also hosts the thin register helpers the drivers call.
//!
//! On non-espidf targets every helper is a simulation stub; the pulse
//! counter becomes an atomic 16-bit counter fed by [`sim_inject_pulses`].

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    PcntConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::PcntConfigFailed(rc) => write!(f, "PCNT config failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the sample loop; single-threaded.
    unsafe {
        init_gpio_outputs()?;
        init_gpio_inputs()?;
        init_pcnt()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    // Igniter gate first so it is driven LOW before anything else moves.
    let output_pins = [
        pins::IGNITER_GATE_GPIO,
        pins::LED_IGNITION_GPIO,
        pins::LED_LINK_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured (all LOW)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    // The pulse input is claimed by PCNT in init_pcnt(); only the isolation
    // line is configured here, floating so it never loads the pulse input.
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::INPUT_DISABLE_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }

    info!("hw_init: input-disable line left high-impedance");
    Ok(())
}

// ── PCNT pulse counter ───────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_pcnt() -> Result<(), HwInitError> {
    let cfg = pcnt_config_t {
        pulse_gpio_num: pins::PULSE_INPUT_GPIO,
        ctrl_gpio_num: PCNT_PIN_NOT_USED,
        lctrl_mode: pcnt_ctrl_mode_t_PCNT_MODE_KEEP,
        hctrl_mode: pcnt_ctrl_mode_t_PCNT_MODE_KEEP,
        pos_mode: pcnt_count_mode_t_PCNT_COUNT_INC,
        neg_mode: pcnt_count_mode_t_PCNT_COUNT_DIS,
        counter_h_lim: pins::PCNT_HIGH_LIMIT,
        counter_l_lim: 0,
        unit: pins::PCNT_UNIT,
        channel: pins::PCNT_CHANNEL,
    };
    let ret = unsafe { pcnt_unit_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::PcntConfigFailed(ret)); }

    // Raw edges only: no glitch filter on the input.
    unsafe { pcnt_filter_disable(pins::PCNT_UNIT) };

    // Leave the unit stopped and zeroed until the first window.
    unsafe {
        pcnt_counter_pause(pins::PCNT_UNIT);
        pcnt_counter_clear(pins::PCNT_UNIT);
    }

    info!(
        "hw_init: PCNT unit {} counting rising edges on GPIO {}",
        pins::PCNT_UNIT,
        pins::PULSE_INPUT_GPIO
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn pcnt_clear() {
    // SAFETY: unit configured in init_pcnt(); only the main task touches it.
    unsafe { pcnt_counter_clear(pins::PCNT_UNIT); }
}

#[cfg(target_os = "espidf")]
pub fn pcnt_resume() {
    // SAFETY: see pcnt_clear().
    unsafe { pcnt_counter_resume(pins::PCNT_UNIT); }
}

#[cfg(target_os = "espidf")]
pub fn pcnt_pause() {
    // SAFETY: see pcnt_clear().
    unsafe { pcnt_counter_pause(pins::PCNT_UNIT); }
}

#[cfg(target_os = "espidf")]
pub fn pcnt_read() -> u16 {
    let mut raw: i16 = 0;
    // SAFETY: see pcnt_clear().
    let ret = unsafe { pcnt_get_counter_value(pins::PCNT_UNIT, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw as u16
}

// ── PCNT simulation ──────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_COUNT: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_ENABLED: AtomicBool = AtomicBool::new(false);

/// Simulate `n` rising edges on the pulse input.  Dropped unless the
/// counter is running; wraps at 65536 like a plain 16-bit counter.
#[cfg(not(target_os = "espidf"))]
pub fn sim_inject_pulses(n: u16) {
    if SIM_ENABLED.load(Ordering::Acquire) {
        SIM_COUNT.fetch_add(n, Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn pcnt_clear() {
    SIM_COUNT.store(0, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn pcnt_resume() {
    SIM_ENABLED.store(true, Ordering::Release);
}

#[cfg(not(target_os = "espidf"))]
pub fn pcnt_pause() {
    SIM_ENABLED.store(false, Ordering::Release);
}

#[cfg(not(target_os = "espidf"))]
pub fn pcnt_read() -> u16 {
    SIM_COUNT.load(Ordering::Relaxed)
}
