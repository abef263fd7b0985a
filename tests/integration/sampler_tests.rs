//! Host-simulated PCNT counter driven through the real sampler.
//!
//! The simulated counter is process-global, so everything touching it
//! lives in this single test.

use embedded_hal::delay::DelayNs;

use igniter::app::ports::{PulseCounterPort, SamplerPort};
use igniter::drivers::hw_init;
use igniter::drivers::pulse_counter::PcntCounter;
use igniter::fsm::Sample;
use igniter::sensors::frequency::FrequencySampler;

/// Stands in for one second of input at `hz`: injects pulses instead of
/// sleeping.
struct SignalGenerator {
    hz: u32,
}

impl DelayNs for SignalGenerator {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        let mut pulses = u64::from(self.hz) * u64::from(ms) / 1000;
        while pulses > 0 {
            let chunk = pulses.min(u64::from(u16::MAX));
            hw_init::sim_inject_pulses(chunk as u16);
            pulses -= chunk;
        }
    }
}

#[test]
fn pcnt_sim_measures_window_frequency() {
    let mut sampler = FrequencySampler::new(PcntCounter::new(), SignalGenerator { hz: 450 }, 1000);
    assert_eq!(sampler.measure(), Sample(450));
    assert_eq!(sampler.measure(), Sample(450));

    // Between windows the gate is closed.
    hw_init::sim_inject_pulses(777);
    assert_eq!(hw_init::pcnt_read(), 0);

    let mut fast = FrequencySampler::new(PcntCounter::new(), SignalGenerator { hz: 70_000 }, 1000);
    // 70_000 mod 65_536
    assert_eq!(fast.measure(), Sample(4464));

    let mut half = FrequencySampler::new(PcntCounter::new(), SignalGenerator { hz: 5000 }, 500);
    assert_eq!(half.measure(), Sample(2500));

    let mut counter = PcntCounter::new();
    assert!(!counter.is_running());
    counter.resume();
    assert!(counter.is_running());
    counter.pause();
    assert_eq!(counter.count(), 0);
}
