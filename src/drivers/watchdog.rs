//! Task Watchdog Timer (TWDT) guard for the sample loop.
//!
//! The igniter gate only drops when a later cycle classifies outside the
//! ignition band.  If the loop hangs mid-cycle with the gate energised,
//! nothing else would ever safe it, so the TWDT panics the chip instead:
//! reset drives every GPIO back to its default input state and the gate
//! falls LOW.
//!
//! [`IgniterService::run`](crate::app::service::IgniterService::run) feeds
//! once per completed cycle through its `after_cycle` hook.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    ESP_OK, esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure,
    esp_task_wdt_reset,
};
use log::{info, warn};

/// Subscription of the sample-loop task to the TWDT.
pub struct Watchdog {
    /// False if subscribing failed; feeding is then a no-op.
    armed: bool,
    timeout_ms: u32,
}

impl Watchdog {
    /// Arm the TWDT for the calling task.  Panic-on-trigger is always set:
    /// a stalled loop must reset, not merely log.
    pub fn new(timeout_ms: u32) -> Self {
        let armed = arm(timeout_ms);
        if armed {
            info!("Watchdog: armed, {} ms per cycle, reset on stall", timeout_ms);
        } else {
            warn!("Watchdog: not armed, a stalled loop will not reset");
        }
        Self { armed, timeout_ms }
    }

    /// Mark one cycle complete.
    pub fn feed(&self) {
        if self.armed {
            kick();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

#[cfg(target_os = "espidf")]
fn arm(timeout_ms: u32) -> bool {
    let cfg = esp_task_wdt_config_t {
        timeout_ms,
        idle_core_mask: 0,
        trigger_panic: true,
    };
    // SAFETY: plain FFI calls on a config owned by this frame; called once
    // from the main task before the loop starts.
    unsafe {
        let ret = esp_task_wdt_reconfigure(&cfg);
        if ret != ESP_OK as i32 {
            // Already initialised by the bootloader config; keep going.
            warn!("Watchdog: reconfigure returned {}", ret);
        }
        esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK as i32
    }
}

#[cfg(not(target_os = "espidf"))]
fn arm(_timeout_ms: u32) -> bool {
    true
}

#[cfg(target_os = "espidf")]
fn kick() {
    // SAFETY: only reached after this task subscribed in `arm`.
    unsafe {
        esp_task_wdt_reset();
    }
}

#[cfg(not(target_os = "espidf"))]
fn kick() {}
