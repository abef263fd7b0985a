//! Gated-window frequency sampler.
//!
//! Zeroes the pulse counter, opens its gate, blocks for one fixed window,
//! closes the gate and reads the count.  For a 1 s window the count is the
//! input frequency in hertz.
//!
//! Pulses arriving while the gate is closed (between windows, while the
//! previous cycle is classified and the outputs updated) are lost.  The
//! counter wraps silently.  Neither is detected.
//!
//! On the board the PCNT unit resets to zero when it reaches
//! [`PCNT_HIGH_LIMIT`](crate::pins::PCNT_HIGH_LIMIT) (32767), so readings
//! alias modulo 32767 rather than 65536.  With a 1 s window an input just
//! above 33 kHz reads as a few hundred counts and lands in the ignition
//! band.  The host simulation wraps at 65536.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{PulseCounterPort, SamplerPort};
use crate::fsm::Sample;

/// Frequency sampler over any pulse counter and blocking delay.
pub struct FrequencySampler<C, D> {
    counter: C,
    delay: D,
    window_ms: u32,
}

impl<C: PulseCounterPort, D: DelayNs> FrequencySampler<C, D> {
    pub fn new(counter: C, delay: D, window_ms: u32) -> Self {
        Self {
            counter,
            delay,
            window_ms,
        }
    }

    /// Measurement window length in milliseconds.
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }
}

impl<C: PulseCounterPort, D: DelayNs> SamplerPort for FrequencySampler<C, D> {
    fn measure(&mut self) -> Sample {
        self.counter.clear();
        self.counter.resume();
        self.delay.delay_ms(self.window_ms);
        self.counter.pause();

        let count = self.counter.count();

        // Leave the counter stopped and zeroed for the next window.
        self.counter.clear();

        Sample(count)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Clear,
        Resume,
        Pause,
        Delay(u32),
    }

    /// Shared bench state: the counter and the delay both see it, so the
    /// delay can deliver pulses that only land while the gate is open.
    #[derive(Default)]
    struct Bench {
        ops: Vec<Op>,
        value: u16,
        running: bool,
        pulses_per_window: u32,
    }

    impl Bench {
        /// Pulses on the input line; they only count while the gate is open.
        fn deliver(&mut self, n: u32) {
            if self.running {
                self.value = self.value.wrapping_add(n as u16);
            }
        }
    }

    struct BenchCounter(Rc<RefCell<Bench>>);
    struct BenchDelay(Rc<RefCell<Bench>>);

    impl PulseCounterPort for BenchCounter {
        fn clear(&mut self) {
            let mut b = self.0.borrow_mut();
            b.ops.push(Op::Clear);
            b.value = 0;
        }
        fn resume(&mut self) {
            let mut b = self.0.borrow_mut();
            b.ops.push(Op::Resume);
            b.running = true;
        }
        fn pause(&mut self) {
            let mut b = self.0.borrow_mut();
            b.ops.push(Op::Pause);
            b.running = false;
        }
        fn count(&self) -> u16 {
            self.0.borrow().value
        }
    }

    impl DelayNs for BenchDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            let mut b = self.0.borrow_mut();
            b.ops.push(Op::Delay(ms));
            let n = b.pulses_per_window;
            b.deliver(n);
        }
    }

    type BenchSampler = FrequencySampler<BenchCounter, BenchDelay>;

    fn bench(pulses_per_window: u32) -> (Rc<RefCell<Bench>>, BenchSampler) {
        let state = Rc::new(RefCell::new(Bench {
            pulses_per_window,
            ..Bench::default()
        }));
        let sampler = FrequencySampler::new(
            BenchCounter(Rc::clone(&state)),
            BenchDelay(Rc::clone(&state)),
            1000,
        );
        (state, sampler)
    }

    #[test]
    fn window_gates_counter_in_order() {
        let (state, mut s) = bench(450);
        assert_eq!(s.measure(), Sample(450));
        assert_eq!(
            state.borrow().ops,
            vec![Op::Clear, Op::Resume, Op::Delay(1000), Op::Pause, Op::Clear]
        );
    }

    #[test]
    fn leaves_counter_stopped_and_zeroed() {
        let (state, mut s) = bench(5000);
        s.measure();
        let b = state.borrow();
        assert!(!b.running);
        assert_eq!(b.value, 0);
    }

    #[test]
    fn stale_count_is_discarded() {
        let (state, mut s) = bench(300);
        state.borrow_mut().value = 9999;
        assert_eq!(s.measure(), Sample(300));
    }

    #[test]
    fn pulses_outside_the_window_are_lost() {
        let (state, mut s) = bench(450);
        assert_eq!(s.measure(), Sample(450));
        // Activity while the previous window is being classified.
        state.borrow_mut().deliver(1000);
        assert_eq!(state.borrow().value, 0);
        assert_eq!(s.measure(), Sample(450));
    }

    #[test]
    fn counter_wraps_without_report() {
        let (_, mut s) = bench(65_536 + 10);
        assert_eq!(s.measure(), Sample(10));
    }

    #[test]
    fn window_length_comes_from_constructor() {
        let state = Rc::new(RefCell::new(Bench::default()));
        let mut s = FrequencySampler::new(
            BenchCounter(Rc::clone(&state)),
            BenchDelay(Rc::clone(&state)),
            250,
        );
        assert_eq!(s.window_ms(), 250);
        s.measure();
        assert!(state.borrow().ops.contains(&Op::Delay(250)));
    }
}
