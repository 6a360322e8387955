//! Typewriter label: types a string forward, holds, deletes it, holds, and
//! starts over.
//!
//! [`TypingSequencer`] is the pure state machine, exposed as a lazy iterator
//! of display states each paired with the delay until the next one.
//! [`TypingDriver`] runs a sequencer on a [`TimerHost`], keeping exactly one
//! timer armed at a time.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::constants::{TYPING_CHAR_INTERVAL_MS, TYPING_EMPTY_DWELL_MS, TYPING_FULL_DWELL_MS};
use super::timer::{TimerHost, TimerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub text: String,
    pub char_interval_ms: u32,
    pub start_delay_ms: u32,
    pub repeat: bool,
    pub full_dwell_ms: u32,
    pub empty_dwell_ms: u32,
}

impl TypingConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            char_interval_ms: TYPING_CHAR_INTERVAL_MS,
            start_delay_ms: 0,
            repeat: true,
            full_dwell_ms: TYPING_FULL_DWELL_MS,
            empty_dwell_ms: TYPING_EMPTY_DWELL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Idle,
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
    Complete,
}

/// One display state and how long it stays on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub phase: TypingPhase,
    /// `None` once the sequence has finished for good.
    pub next_delay_ms: Option<u32>,
}

pub struct TypingSequencer {
    config: TypingConfig,
    // byte offset where the first `i` characters end
    boundaries: Vec<usize>,
    shown: usize,
    phase: TypingPhase,
}

impl TypingSequencer {
    pub fn new(config: TypingConfig) -> Self {
        let boundaries = std::iter::once(0)
            .chain(config.text.char_indices().map(|(i, c)| i + c.len_utf8()))
            .collect();
        Self {
            config,
            boundaries,
            shown: 0,
            phase: TypingPhase::Idle,
        }
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn display(&self) -> &str {
        &self.config.text[..self.boundaries[self.shown]]
    }

    fn type_one(&mut self) -> Option<u32> {
        let len = self.char_len();
        if len == 0 {
            self.phase = TypingPhase::Complete;
            return None;
        }
        self.shown += 1;
        if self.shown < len {
            self.phase = TypingPhase::Typing;
            return Some(self.config.char_interval_ms);
        }
        if self.config.repeat {
            self.phase = TypingPhase::PausingFull;
            Some(self.config.full_dwell_ms)
        } else {
            self.phase = TypingPhase::Complete;
            None
        }
    }

    fn delete_one(&mut self) -> Option<u32> {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.phase = TypingPhase::PausingEmpty;
            Some(self.config.empty_dwell_ms)
        } else {
            self.phase = TypingPhase::Deleting;
            Some((self.config.char_interval_ms / 2).max(1))
        }
    }
}

impl Iterator for TypingSequencer {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<TypingFrame> {
        let next_delay_ms = match self.phase {
            TypingPhase::Complete => return None,
            TypingPhase::Idle | TypingPhase::Typing | TypingPhase::PausingEmpty => self.type_one(),
            TypingPhase::PausingFull | TypingPhase::Deleting => self.delete_one(),
        };
        Some(TypingFrame {
            text: self.display().to_string(),
            phase: self.phase,
            next_delay_ms,
        })
    }
}

struct DriverState {
    seq: TypingSequencer,
    pending: Option<TimerId>,
    sink: Box<dyn FnMut(&str)>,
}

/// Runs a [`TypingSequencer`] on timers, pushing each display state to a sink.
pub struct TypingDriver<H: TimerHost + Clone + 'static> {
    host: H,
    state: Rc<RefCell<DriverState>>,
}

impl<H: TimerHost + Clone + 'static> TypingDriver<H> {
    /// Show the empty label and arm the start-delay timer.
    pub fn start(host: H, config: TypingConfig, sink: impl FnMut(&str) + 'static) -> Self {
        let delay = config.start_delay_ms;
        let state = Rc::new(RefCell::new(DriverState {
            seq: TypingSequencer::new(config),
            pending: None,
            sink: Box::new(sink),
        }));
        (state.borrow_mut().sink)("");
        Self::arm(&host, &state, delay);
        Self { host, state }
    }

    fn arm(host: &H, state: &Rc<RefCell<DriverState>>, delay_ms: u32) {
        if let Some(stale) = state.borrow_mut().pending.take() {
            host.clear_timeout(stale);
        }
        let weak: Weak<RefCell<DriverState>> = Rc::downgrade(state);
        let host_for_tick = host.clone();
        let id = host.set_timeout(
            delay_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    Self::tick(&host_for_tick, &state);
                }
            }),
        );
        state.borrow_mut().pending = Some(id);
    }

    fn tick(host: &H, state: &Rc<RefCell<DriverState>>) {
        let frame = {
            let mut st = state.borrow_mut();
            st.pending = None;
            st.seq.next()
        };
        let Some(frame) = frame else {
            return;
        };
        (state.borrow_mut().sink)(&frame.text);
        if let Some(delay) = frame.next_delay_ms {
            Self::arm(host, state, delay);
        }
    }

    /// Replace the label or its timings: the pending tick is cancelled and the
    /// sequence starts again from idle.
    pub fn restart(&mut self, config: TypingConfig) {
        self.stop();
        let delay = config.start_delay_ms;
        {
            let mut st = self.state.borrow_mut();
            st.seq = TypingSequencer::new(config);
            (st.sink)("");
        }
        Self::arm(&self.host, &self.state, delay);
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.state.borrow_mut().pending.take() {
            self.host.clear_timeout(id);
        }
    }

    pub fn display(&self) -> String {
        self.state.borrow().seq.display().to_string()
    }

    pub fn phase(&self) -> TypingPhase {
        self.state.borrow().seq.phase()
    }

    pub fn has_pending_tick(&self) -> bool {
        self.state.borrow().pending.is_some()
    }
}

impl<H: TimerHost + Clone + 'static> Drop for TypingDriver<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
