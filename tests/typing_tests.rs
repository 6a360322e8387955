// Host-side tests for the typing label state machine and its timer driver.

use std::cell::RefCell;
use std::rc::Rc;

use folio_web::core::typing::*;
use folio_web::core::ManualTimers;

fn texts(seq: TypingSequencer, n: usize) -> Vec<String> {
    seq.take(n).map(|f| f.text).collect()
}

#[test]
fn abc_round_trip_has_no_skipped_or_repeated_states() {
    let got = texts(TypingSequencer::new(TypingConfig::new("ABC")), 10);
    let expected = ["A", "AB", "ABC", "AB", "A", "", "A", "AB", "ABC", "AB"];
    assert_eq!(got, expected);
}

#[test]
fn phases_and_delays_follow_the_cycle() {
    let cfg = TypingConfig {
        char_interval_ms: 40,
        ..TypingConfig::new("AB")
    };
    let frames: Vec<(TypingPhase, Option<u32>)> = TypingSequencer::new(cfg)
        .take(5)
        .map(|f| (f.phase, f.next_delay_ms))
        .collect();
    assert_eq!(
        frames,
        vec![
            (TypingPhase::Typing, Some(40)),
            (TypingPhase::PausingFull, Some(2000)),
            (TypingPhase::Deleting, Some(20)),
            (TypingPhase::PausingEmpty, Some(500)),
            (TypingPhase::Typing, Some(40)),
        ]
    );
}

#[test]
fn no_repeat_halts_at_full_text() {
    let cfg = TypingConfig {
        repeat: false,
        ..TypingConfig::new("X")
    };
    let frames: Vec<TypingFrame> = TypingSequencer::new(cfg).collect();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].text, "X");
    assert_eq!(frames[0].phase, TypingPhase::Complete);
    assert_eq!(frames[0].next_delay_ms, None);
}

#[test]
fn empty_text_completes_immediately() {
    let mut seq = TypingSequencer::new(TypingConfig::new(""));
    let frame = seq.next().unwrap();
    assert_eq!(frame.text, "");
    assert_eq!(frame.phase, TypingPhase::Complete);
    assert!(seq.next().is_none());
}

#[test]
fn multibyte_text_types_whole_characters() {
    let got = texts(TypingSequencer::new(TypingConfig::new("né→")), 4);
    assert_eq!(got, ["n", "né", "né→", "né"]);
}

fn recording_driver(timers: &ManualTimers, cfg: TypingConfig) -> (TypingDriver<ManualTimers>, Rc<RefCell<Vec<String>>>) {
    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = shown.clone();
    let driver = TypingDriver::start(timers.clone(), cfg, move |s| sink.borrow_mut().push(s.to_string()));
    (driver, shown)
}

#[test]
fn driver_waits_for_start_delay_then_types_on_schedule() {
    let timers = ManualTimers::new();
    let cfg = TypingConfig {
        start_delay_ms: 500,
        char_interval_ms: 30,
        ..TypingConfig::new("hey")
    };
    let (driver, shown) = recording_driver(&timers, cfg);
    assert_eq!(*shown.borrow(), [""]);

    timers.advance(499);
    assert_eq!(shown.borrow().len(), 1, "nothing before the start delay");
    timers.advance(1);
    assert_eq!(driver.display(), "h");
    timers.advance(60);
    assert_eq!(driver.display(), "hey");
    assert_eq!(driver.phase(), TypingPhase::PausingFull);
    timers.advance(1999);
    assert_eq!(driver.display(), "hey");
    timers.advance(1);
    assert_eq!(driver.display(), "he");
    timers.advance(15);
    assert_eq!(driver.display(), "h");
}

#[test]
fn driver_keeps_exactly_one_timer_armed() {
    let timers = ManualTimers::new();
    let (driver, _shown) = recording_driver(&timers, TypingConfig::new("typing"));
    for _ in 0..100 {
        assert_eq!(timers.pending_count(), 1);
        assert!(driver.has_pending_tick());
        assert!(timers.fire_next());
    }
}

#[test]
fn driver_stops_arming_after_completion() {
    let timers = ManualTimers::new();
    let cfg = TypingConfig {
        repeat: false,
        ..TypingConfig::new("X")
    };
    let (driver, shown) = recording_driver(&timers, cfg);
    timers.advance(10_000);
    assert_eq!(*shown.borrow(), ["", "X"]);
    assert_eq!(timers.pending_count(), 0);
    assert_eq!(driver.phase(), TypingPhase::Complete);
}

#[test]
fn restart_cancels_pending_tick_and_starts_from_idle() {
    let timers = ManualTimers::new();
    let (mut driver, shown) = recording_driver(&timers, TypingConfig::new("old"));
    timers.advance(100);
    assert_eq!(driver.display(), "old");

    driver.restart(TypingConfig::new("new"));
    assert_eq!(timers.pending_count(), 1, "stale tick cancelled");
    assert_eq!(driver.display(), "");
    assert_eq!(driver.phase(), TypingPhase::Idle);
    timers.advance(0);
    assert_eq!(driver.display(), "n");
    assert!(!shown.borrow().iter().skip_while(|s| s.as_str() != "n").any(|s| s.contains('o')));
}

#[test]
fn stop_and_drop_silence_the_label() {
    let timers = ManualTimers::new();
    let (mut driver, shown) = recording_driver(&timers, TypingConfig::new("abc"));
    timers.advance(50);
    driver.stop();
    assert_eq!(timers.pending_count(), 0);
    let before = shown.borrow().len();
    timers.advance(10_000);
    assert_eq!(shown.borrow().len(), before);

    let (driver, shown) = recording_driver(&timers, TypingConfig::new("abc"));
    drop(driver);
    timers.advance(10_000);
    assert_eq!(*shown.borrow(), [""], "no tick after drop");
}
