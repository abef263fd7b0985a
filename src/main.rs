//! Igniter Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  PcntCounter ──▶ FrequencySampler    HardwareAdapter           │
//! │  BlockingDelay ─┘  (SamplerPort)     (OutputPort)              │
//! │                                      LogEventSink (EventSink)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           IgniterService (pure logic)                  │    │
//! │  │  classify · heartbeat · output arbitration             │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use igniter::adapters::hardware::HardwareAdapter;
use igniter::adapters::log_sink::LogEventSink;
use igniter::adapters::time::BlockingDelay;
use igniter::app::service::IgniterService;
use igniter::config::IgniterConfig;
use igniter::drivers::hw_init;
use igniter::drivers::pulse_counter::PcntCounter;
use igniter::drivers::watchdog::Watchdog;
use igniter::sensors::frequency::FrequencySampler;

/// Bench builds may bake alternative bands in at compile time.
fn load_config() -> igniter::error::Result<IgniterConfig> {
    let config = match option_env!("IGNITER_CONFIG") {
        Some(json) => {
            info!("Config: compile-time override");
            IgniterConfig::from_json(json)?
        }
        None => {
            let config = IgniterConfig::default();
            config.validate()?;
            config
        }
    };
    Ok(config)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Igniter v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Outputs may be half-configured; the gate was driven LOW first.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration ─────────────────────────────────────
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Config rejected: {} — halting with igniter safe", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new();
    let mut log_sink = LogEventSink::new();
    let mut sampler = FrequencySampler::new(
        PcntCounter::new(),
        BlockingDelay::new(),
        config.window_ms,
    );

    // ── 5. Service + startup lamp check ──────────────────────
    let mut app = IgniterService::new(&config);
    let bands = app.bands();
    info!(
        "Bands: ignition {}..={} Hz, link {}..={} Hz, window {} ms",
        bands.ignition.lower,
        bands.ignition.upper,
        bands.link.lower,
        bands.link.upper,
        sampler.window_ms()
    );
    app.start(&mut hw, &mut log_sink);
    app.self_test(&mut hw, &mut BlockingDelay::new(), &mut log_sink);

    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    info!(
        "System ready. Entering sample loop (watchdog {} ms).",
        watchdog.timeout_ms()
    );

    // ── 6. Sample loop (never returns) ───────────────────────
    app.run(&mut sampler, &mut hw, &mut log_sink, |_| watchdog.feed())
}
