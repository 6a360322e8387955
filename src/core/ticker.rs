//! Per-frame scheduling seam.
//!
//! Components that animate every frame depend on [`Ticker`] only. The browser
//! implementation drives it from `requestAnimationFrame`; [`ManualTicker`]
//! advances it by hand in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub dt_sec: f32,
    pub elapsed_sec: f64,
}

pub type FrameCallback = Box<dyn FnMut(FrameTick)>;

pub trait Ticker {
    /// Register a callback invoked once per frame until unsubscribed.
    fn subscribe(&self, callback: FrameCallback) -> SubscriptionId;
    /// Remove a callback. Unknown or already removed ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
    fn subscriber_count(&self) -> usize;
}

/// Subscriber list shared by ticker implementations.
///
/// Callbacks are taken out of the list while they run, so a callback may
/// subscribe or unsubscribe (itself included) without a re-entrant borrow.
#[derive(Default)]
pub struct Subscribers {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Option<FrameCallback>)>,
}

impl Subscribers {
    pub fn add(&mut self, callback: FrameCallback) -> SubscriptionId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push((id, Some(callback)));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(eid, _)| *eid == id)
    }

    /// Run every callback registered before this call once.
    pub fn dispatch(list: &RefCell<Subscribers>, tick: FrameTick) {
        let taken: Vec<(SubscriptionId, FrameCallback)> = {
            let mut subs = list.borrow_mut();
            subs.entries
                .iter_mut()
                .filter_map(|(id, cb)| cb.take().map(|cb| (*id, cb)))
                .collect()
        };
        for (id, mut cb) in taken {
            // An earlier callback in this frame may have removed this one.
            if !list.borrow().contains(id) {
                continue;
            }
            cb(tick);
            let mut subs = list.borrow_mut();
            if let Some((_, slot)) = subs.entries.iter_mut().find(|(eid, _)| *eid == id) {
                *slot = Some(cb);
            }
        }
    }
}

/// Deterministic ticker for tests and headless use.
#[derive(Clone, Default)]
pub struct ManualTicker {
    subscribers: Rc<RefCell<Subscribers>>,
    elapsed: Rc<Cell<f64>>,
    frames: Rc<Cell<u64>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame of `dt_sec` seconds.
    pub fn advance(&self, dt_sec: f32) {
        let elapsed = self.elapsed.get() + dt_sec as f64;
        self.elapsed.set(elapsed);
        self.frames.set(self.frames.get() + 1);
        Subscribers::dispatch(
            &self.subscribers,
            FrameTick {
                dt_sec,
                elapsed_sec: elapsed,
            },
        );
    }

    pub fn advance_frames(&self, frames: usize, dt_sec: f32) {
        for _ in 0..frames {
            self.advance(dt_sec);
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

impl Ticker for ManualTicker {
    fn subscribe(&self, callback: FrameCallback) -> SubscriptionId {
        self.subscribers.borrow_mut().add(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().remove(id);
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
