//! `setTimeout` backed [`TimerHost`].

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::timer::{TimerHost, TimerId};

struct Armed {
    handle: i32,
    closure: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct TimersState {
    next_id: TimerId,
    armed: FnvHashMap<TimerId, Armed>,
    /// Closures of timers that already fired. A closure cannot be freed
    /// while it is running, so they are released on a later call instead.
    spent: Vec<(TimerId, Closure<dyn FnMut()>)>,
    firing: Option<TimerId>,
}

#[derive(Clone, Default)]
pub struct WindowTimers {
    state: Rc<RefCell<TimersState>>,
}

impl WindowTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every armed timer.
    pub fn shutdown(&self) {
        let armed: Vec<Armed> = self.state.borrow_mut().armed.drain().map(|(_, a)| a).collect();
        if let Some(w) = web::window() {
            for a in &armed {
                w.clear_timeout_with_handle(a.handle);
            }
        }
    }
}

impl TimerHost for WindowTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = {
            let mut st = self.state.borrow_mut();
            let firing = st.firing;
            st.spent.retain(|(sid, _)| Some(*sid) == firing);
            st.next_id += 1;
            st.next_id
        };
        let Some(w) = web::window() else {
            log::warn!("[timers] no window; timer {id} dropped");
            return id;
        };
        let state = Rc::downgrade(&self.state);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = state.upgrade() {
                let mut st = state.borrow_mut();
                st.firing = Some(id);
                if let Some(armed) = st.armed.remove(&id) {
                    st.spent.push((id, armed.closure));
                }
            }
            if let Some(cb) = callback.take() {
                cb();
            }
            if let Some(state) = state.upgrade() {
                state.borrow_mut().firing = None;
            }
        }) as Box<dyn FnMut()>);
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => {
                self.state.borrow_mut().armed.insert(id, Armed { handle, closure });
            }
            Err(e) => log::warn!("[timers] setTimeout failed: {e:?}"),
        }
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        let armed = self.state.borrow_mut().armed.remove(&id);
        if let (Some(armed), Some(w)) = (armed, web::window()) {
            w.clear_timeout_with_handle(armed.handle);
        }
    }
}
