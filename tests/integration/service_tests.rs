//! Integration tests for the sampler → IgniterService → outputs pipeline.

use super::mock_hw::{MockOutputs, OutputCall, RecordingSink, ScriptedSampler};

use igniter::app::events::AppEvent;
use igniter::app::service::IgniterService;
use igniter::config::IgniterConfig;
use igniter::fsm::{Mode, OutputState};

fn make_app() -> (IgniterService, MockOutputs, RecordingSink) {
    let config = IgniterConfig::default();
    let mut app = IgniterService::new(&config);
    let mut out = MockOutputs::new();
    let mut sink = RecordingSink::new();
    app.start(&mut out, &mut sink);
    (app, out, sink)
}

fn run(
    app: &mut IgniterService,
    out: &mut MockOutputs,
    sink: &mut RecordingSink,
    samples: &[u16],
) -> Vec<(Mode, OutputState)> {
    let mut sampler = ScriptedSampler::new(samples);
    (0..samples.len())
        .map(|_| {
            let r = app.cycle(&mut sampler, out, sink);
            (r.mode, r.outputs)
        })
        .collect()
}

#[test]
fn launch_sequence_end_to_end() {
    let (mut app, mut out, mut sink) = make_app();

    let result = run(&mut app, &mut out, &mut sink, &[450, 450, 5000, 5000, 5000, 10]);

    let modes: Vec<Mode> = result.iter().map(|(m, _)| *m).collect();
    assert_eq!(
        modes,
        [Mode::Ignition, Mode::Ignition, Mode::LinkOk, Mode::LinkOk, Mode::LinkOk, Mode::Idle]
    );

    let igniter: Vec<bool> = result.iter().map(|(_, o)| o.igniter).collect();
    assert_eq!(igniter, [true, true, false, false, false, false]);

    // Heartbeat: link LED was forced off by ignition, then flips.
    let link: Vec<bool> = result.iter().map(|(_, o)| o.link_indicator).collect();
    assert_eq!(link, [false, false, true, false, true, true]);

    assert_eq!(out.state, app.outputs());
    assert_eq!(app.cycle_count(), 6);
}

#[test]
fn start_forces_everything_off() {
    let (_app, out, sink) = make_app();
    assert_eq!(out.state, OutputState::all_off());
    assert!(out.calls.contains(&OutputCall::Igniter(false)));
    assert_eq!(sink.events, vec![AppEvent::Started]);
}

#[test]
fn igniter_never_on_next_to_stale_indicators() {
    let (mut app, mut out, mut sink) = make_app();
    out.calls.clear();

    run(&mut app, &mut out, &mut sink, &[5000, 450, 10, 450, 5000, 5000, 300, 601]);

    for s in out.intermediate_states() {
        if s.igniter {
            assert!(s.ignition_indicator, "igniter on with ignition LED off: {:?}", s);
            assert!(!s.link_indicator, "igniter on with link LED on: {:?}", s);
        }
    }
}

#[test]
fn link_then_idle_forces_link_on() {
    for lead in [&[5000u16][..], &[5000, 5000][..]] {
        let (mut app, mut out, mut sink) = make_app();
        let mut samples = lead.to_vec();
        samples.push(10);
        let result = run(&mut app, &mut out, &mut sink, &samples);
        let (mode, last) = *result.last().unwrap();
        assert_eq!(mode, Mode::Idle);
        assert!(last.link_indicator);
    }
}

#[test]
fn link_then_ignition_forces_link_off() {
    for lead in [&[5000u16][..], &[5000, 5000][..]] {
        let (mut app, mut out, mut sink) = make_app();
        let mut samples = lead.to_vec();
        samples.push(600);
        let result = run(&mut app, &mut out, &mut sink, &samples);
        let (mode, last) = *result.last().unwrap();
        assert_eq!(mode, Mode::Ignition);
        assert!(!last.link_indicator);
        assert!(last.igniter);
    }
}

#[test]
fn dead_input_idles() {
    let (mut app, mut out, mut sink) = make_app();
    let result = run(&mut app, &mut out, &mut sink, &[0, 0, 65535]);
    for (mode, o) in result {
        assert_eq!(mode, Mode::Idle);
        assert_eq!(
            o,
            OutputState {
                ignition_indicator: false,
                link_indicator: true,
                igniter: false,
            }
        );
    }
}

#[test]
fn self_test_keeps_igniter_safe() {
    struct NoDelay;
    impl embedded_hal::delay::DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    let (mut app, mut out, mut sink) = make_app();
    out.calls.clear();
    app.self_test(&mut out, &mut NoDelay, &mut sink);

    assert!(!out.calls.contains(&OutputCall::Igniter(true)));
    let ign_on = out.calls.iter().filter(|c| **c == OutputCall::IgnitionLed(true)).count();
    let link_on = out.calls.iter().filter(|c| **c == OutputCall::LinkLed(true)).count();
    assert_eq!(ign_on, 5);
    assert_eq!(link_on, 5);
    assert_eq!(out.state, OutputState::all_off());
}

#[test]
fn mode_changes_and_cycles_are_reported() {
    let (mut app, mut out, mut sink) = make_app();
    sink.events.clear();

    run(&mut app, &mut out, &mut sink, &[450, 450, 10]);

    let changes: Vec<&AppEvent> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
        .collect();
    assert_eq!(changes.len(), 2);

    let cycles = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Cycle(_)))
        .count();
    assert_eq!(cycles, 3);
    assert_eq!(app.mode(), Some(Mode::Idle));
}
