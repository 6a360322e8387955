//! `requestAnimationFrame` driven [`Ticker`].
//!
//! The loop only runs while somebody is subscribed: the first subscription
//! requests a frame, each frame re-requests itself while subscribers remain,
//! and removing the last one cancels the pending request.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::ticker::{FrameCallback, FrameTick, Subscribers, SubscriptionId, Ticker};

struct RafInner {
    subscribers: RefCell<Subscribers>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    last_instant: Cell<Option<Instant>>,
    elapsed_sec: Cell<f64>,
}

#[derive(Clone)]
pub struct RafTicker {
    inner: Rc<RafInner>,
}

impl RafTicker {
    pub fn new() -> Self {
        let inner = Rc::new(RafInner {
            subscribers: RefCell::new(Subscribers::default()),
            handle: Cell::new(None),
            tick: RefCell::new(None),
            last_instant: Cell::new(None),
            elapsed_sec: Cell::new(0.0),
        });
        let weak: Weak<RafInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handle.set(None);
                inner.frame();
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    /// Cancel the pending frame and drop every subscriber and the frame
    /// closure. The ticker is inert afterwards.
    pub fn shutdown(&self) {
        self.inner.cancel();
        self.inner.subscribers.borrow_mut().clear();
        self.inner.tick.borrow_mut().take();
    }
}

impl Default for RafTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RafInner {
    fn frame(&self) {
        let now = Instant::now();
        let dt_sec = self
            .last_instant
            .replace(Some(now))
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        let elapsed = self.elapsed_sec.get() + dt_sec as f64;
        self.elapsed_sec.set(elapsed);
        Subscribers::dispatch(
            &self.subscribers,
            FrameTick {
                dt_sec,
                elapsed_sec: elapsed,
            },
        );
        if !self.subscribers.borrow().is_empty() {
            self.request();
        }
    }

    fn request(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {e:?}"),
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
        // the next run measures its first delta from zero
        self.last_instant.set(None);
    }
}

impl Ticker for RafTicker {
    fn subscribe(&self, callback: FrameCallback) -> SubscriptionId {
        let id = self.inner.subscribers.borrow_mut().add(callback);
        self.inner.request();
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        let empty = {
            let mut subs = self.inner.subscribers.borrow_mut();
            subs.remove(id);
            subs.is_empty()
        };
        if empty {
            self.inner.cancel();
        }
    }

    fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}
