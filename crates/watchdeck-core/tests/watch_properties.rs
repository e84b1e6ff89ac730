//! State-machine properties for the two watch widgets.
//!
//! Checks the full command surface against small reference models, plus
//! the complete 25-minute countdown scenario.

use proptest::prelude::*;

use watchdeck_core::format;
use watchdeck_core::{Countdown, Event, Stopwatch, Watch, WatchState};

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Stop,
    Reset,
    Tick,
    Increment,
    Decrement,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Stop),
        Just(Op::Reset),
        Just(Op::Tick),
        Just(Op::Increment),
        Just(Op::Decrement),
    ]
}

#[test]
fn stopwatch_counts_exactly_n_ticks() {
    let mut watch = Stopwatch::new();
    assert!(watch.start().is_some());
    for _ in 0..3661 {
        watch.tick();
    }
    assert_eq!(watch.seconds(), 3661);
    assert_eq!(watch.display(), "61:01");
}

#[test]
fn countdown_runs_to_zero_and_stays_there() {
    let mut watch = Countdown::with_initial(1500, 60);
    assert!(watch.start().is_some());

    let mut finished = 0;
    for n in 1..=1500u64 {
        if let Some(Event::CountdownFinished { .. }) = watch.tick() {
            finished += 1;
        }
        assert_eq!(watch.seconds(), 1500 - n);
    }

    assert_eq!(finished, 1);
    assert_eq!(watch.display(), "00:00");
    assert_eq!(watch.state(), WatchState::Stopped);

    // The run is over without stop() ever being called; later firings
    // are inert and restart is guarded.
    assert!(watch.tick().is_none());
    assert!(watch.start().is_none());
    assert_eq!(watch.seconds(), 0);
}

proptest! {
    /// The stopwatch agrees with a trivial reference model under any
    /// command sequence.
    #[test]
    fn stopwatch_matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..300)) {
        let mut watch = Stopwatch::new();
        let mut model_running = false;
        let mut model_secs: u64 = 0;

        for op in ops {
            match op {
                Op::Start => {
                    let event = watch.start();
                    prop_assert_eq!(event.is_some(), !model_running);
                    model_running = true;
                }
                Op::Stop => {
                    let event = watch.stop();
                    prop_assert_eq!(event.is_some(), model_running);
                    model_running = false;
                }
                Op::Reset => {
                    if !model_running {
                        model_secs = 0;
                        prop_assert!(watch.reset().is_some());
                    } else {
                        prop_assert!(watch.reset().is_none());
                    }
                }
                Op::Tick => {
                    watch.tick();
                    if model_running {
                        model_secs += 1;
                    }
                }
                // The stopwatch has no adjustment controls.
                Op::Increment | Op::Decrement => {}
            }

            prop_assert_eq!(watch.seconds(), model_secs);
            prop_assert_eq!(watch.is_running(), model_running);
            prop_assert_eq!(watch.display(), format::mmss(model_secs));
        }
    }

    /// The countdown agrees with a reference model that clamps at zero
    /// and stops on the zero-reaching tick.
    #[test]
    fn countdown_matches_reference_model(
        initial_min in 1u64..120,
        ops in proptest::collection::vec(op_strategy(), 0..300),
    ) {
        let initial = initial_min * 60;
        let mut watch = Countdown::with_initial(initial, 60);
        let mut model_running = false;
        let mut model_secs = initial;

        for op in ops {
            match op {
                Op::Start => {
                    let event = watch.start();
                    prop_assert_eq!(event.is_some(), !model_running && model_secs > 0);
                    if model_secs > 0 {
                        model_running = true;
                    }
                }
                Op::Stop => {
                    let event = watch.stop();
                    prop_assert_eq!(event.is_some(), model_running);
                    model_running = false;
                }
                Op::Reset => {
                    if !model_running {
                        model_secs = initial;
                        prop_assert!(watch.reset().is_some());
                    } else {
                        prop_assert!(watch.reset().is_none());
                    }
                }
                Op::Tick => {
                    let event = watch.tick();
                    if model_running {
                        model_secs -= 1;
                        if model_secs == 0 {
                            model_running = false;
                            prop_assert!(matches!(event, Some(Event::CountdownFinished { .. })), "expected CountdownFinished event");
                        } else {
                            prop_assert!(event.is_none());
                        }
                    } else {
                        prop_assert!(event.is_none());
                    }
                }
                Op::Increment => {
                    prop_assert!(watch.increment().is_some());
                    model_secs = model_secs.saturating_add(60);
                }
                Op::Decrement => {
                    prop_assert!(watch.decrement().is_some());
                    model_secs = model_secs.saturating_sub(60);

                    let finished = watch.finish_if_exhausted();
                    if model_running && model_secs == 0 {
                        model_running = false;
                        prop_assert!(matches!(finished, Some(Event::CountdownFinished { .. })), "expected CountdownFinished event");
                    } else {
                        prop_assert!(finished.is_none());
                    }
                }
            }

            prop_assert_eq!(watch.seconds(), model_secs);
            prop_assert_eq!(watch.is_running(), model_running);
            prop_assert_eq!(watch.display(), format::mmss(model_secs));
            // Running implies something left to count down.
            prop_assert!(!watch.is_running() || watch.seconds() > 0);
        }
    }

    /// Formatting matches the arithmetic definition for all inputs.
    #[test]
    fn mmss_matches_definition(secs in 0u64..1_000_000) {
        let rendered = format::mmss(secs);
        prop_assert_eq!(&rendered, &format!("{:02}:{:02}", secs / 60, secs % 60));
        prop_assert!(rendered.len() >= 5);
    }
}
