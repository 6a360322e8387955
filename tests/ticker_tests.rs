// Host-side tests for the frame and timer seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_web::core::ticker::SubscriptionId;
use folio_web::core::timer::TimerHost;
use folio_web::core::{ManualTicker, ManualTimers, Ticker};

#[test]
fn subscribers_run_once_per_frame() {
    let ticker = ManualTicker::new();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    ticker.subscribe(Box::new(move |_| h.set(h.get() + 1)));
    ticker.advance_frames(5, 0.016);
    assert_eq!(hits.get(), 5);
    assert_eq!(ticker.frames(), 5);
}

#[test]
fn ticks_carry_delta_and_elapsed_time() {
    let ticker = ManualTicker::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    ticker.subscribe(Box::new(move |tick| s.borrow_mut().push(tick)));
    ticker.advance(0.5);
    ticker.advance(0.25);
    let seen = seen.borrow();
    assert_eq!(seen[1].dt_sec, 0.25);
    assert!((seen[1].elapsed_sec - 0.75).abs() < 1e-9);
}

#[test]
fn unsubscribed_callback_never_runs_again() {
    let ticker = ManualTicker::new();
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let id = ticker.subscribe(Box::new(move |_| h.set(h.get() + 1)));
    ticker.advance(0.016);
    ticker.unsubscribe(id);
    ticker.unsubscribe(id);
    ticker.advance_frames(10, 0.016);
    assert_eq!(hits.get(), 1);
    assert_eq!(ticker.subscriber_count(), 0);
}

#[test]
fn callback_may_unsubscribe_itself_mid_frame() {
    let ticker = ManualTicker::new();
    let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
    let hits = Rc::new(Cell::new(0));
    let (t, own, h) = (ticker.clone(), own_id.clone(), hits.clone());
    let id = ticker.subscribe(Box::new(move |_| {
        h.set(h.get() + 1);
        if let Some(id) = own.get() {
            t.unsubscribe(id);
        }
    }));
    own_id.set(Some(id));
    ticker.advance_frames(3, 0.016);
    assert_eq!(hits.get(), 1);
    assert_eq!(ticker.subscriber_count(), 0);
}

#[test]
fn callback_removed_by_earlier_callback_is_skipped() {
    let ticker = ManualTicker::new();
    let victim: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
    let victim_hits = Rc::new(Cell::new(0));
    let (t, v) = (ticker.clone(), victim.clone());
    ticker.subscribe(Box::new(move |_| {
        if let Some(id) = v.take() {
            t.unsubscribe(id);
        }
    }));
    let vh = victim_hits.clone();
    victim.set(Some(ticker.subscribe(Box::new(move |_| vh.set(vh.get() + 1)))));
    ticker.advance_frames(2, 0.016);
    assert_eq!(victim_hits.get(), 0);
    assert_eq!(ticker.subscriber_count(), 1);
}

#[test]
fn subscribing_during_a_frame_starts_next_frame() {
    let ticker = ManualTicker::new();
    let late_hits = Rc::new(Cell::new(0));
    let (t, lh) = (ticker.clone(), late_hits.clone());
    let added = Rc::new(Cell::new(false));
    let a = added.clone();
    ticker.subscribe(Box::new(move |_| {
        if !a.replace(true) {
            let lh = lh.clone();
            t.subscribe(Box::new(move |_| lh.set(lh.get() + 1)));
        }
    }));
    ticker.advance(0.016);
    assert_eq!(late_hits.get(), 0);
    ticker.advance(0.016);
    assert_eq!(late_hits.get(), 1);
}

#[test]
fn timers_fire_in_due_order() {
    let timers = ManualTimers::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (delay, name) in [(300, "c"), (100, "a"), (200, "b")] {
        let l = log.clone();
        timers.set_timeout(delay, Box::new(move || l.borrow_mut().push(name)));
    }
    timers.advance(250);
    assert_eq!(*log.borrow(), ["a", "b"]);
    timers.advance(50);
    assert_eq!(*log.borrow(), ["a", "b", "c"]);
    assert_eq!(timers.pending_count(), 0);
    assert_eq!(timers.now_ms(), 300);
}

#[test]
fn cleared_timer_never_fires() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    let id = timers.set_timeout(10, Box::new(move || f.set(true)));
    timers.clear_timeout(id);
    timers.clear_timeout(id);
    timers.advance(1000);
    assert!(!fired.get());
    assert!(!timers.fire_next());
}

#[test]
fn timer_armed_by_callback_fires_within_window() {
    let timers = ManualTimers::new();
    let count = Rc::new(Cell::new(0));
    fn chain(timers: ManualTimers, count: Rc<Cell<u32>>) {
        let t = timers.clone();
        timers.set_timeout(
            10,
            Box::new(move || {
                count.set(count.get() + 1);
                chain(t, count);
            }),
        );
    }
    chain(timers.clone(), count.clone());
    timers.advance(55);
    assert_eq!(count.get(), 5);
    assert_eq!(timers.pending_count(), 1);
}
