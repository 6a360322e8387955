//! One-shot timer seam used by the typing labels.

use std::cell::RefCell;
use std::rc::Rc;

pub type TimerId = u64;

pub trait TimerHost {
    /// Arm a one-shot timer. The callback runs at most once.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;
    /// Disarm a timer. Ids that already fired or were cleared are ignored.
    fn clear_timeout(&self, id: TimerId);
}

struct PendingTimer {
    id: TimerId,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now_ms: u64,
    next_id: TimerId,
    pending: Vec<PendingTimer>,
}

/// Virtual-clock timer host for tests.
#[derive(Clone, Default)]
pub struct ManualTimers {
    state: Rc<RefCell<ManualState>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward, firing due timers in order. Timers armed by a
    /// firing callback also fire if they fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let next = {
                let mut st = self.state.borrow_mut();
                let idx = st
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(i, _)| i);
                match idx {
                    Some(i) => {
                        let timer = st.pending.remove(i);
                        st.now_ms = timer.due_ms;
                        Some(timer.callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now_ms = target;
    }

    /// Fire the earliest pending timer, jumping the clock to it.
    pub fn fire_next(&self) -> bool {
        let due = {
            let st = self.state.borrow();
            st.pending.iter().map(|t| t.due_ms).min()
        };
        match due {
            Some(due) => {
                let now = self.now_ms();
                self.advance(due.saturating_sub(now));
                true
            }
            None => false,
        }
    }
}

impl TimerHost for ManualTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut st = self.state.borrow_mut();
        st.next_id += 1;
        let id = st.next_id;
        let due_ms = st.now_ms + delay_ms as u64;
        st.pending.push(PendingTimer {
            id,
            due_ms,
            callback,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.state.borrow_mut().pending.retain(|t| t.id != id);
    }
}
