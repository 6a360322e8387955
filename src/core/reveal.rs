//! Scroll-driven reveals.
//!
//! Elements are registered by key together with an [`Animation`]. Every
//! frame the engine reads each trigger element's position from the
//! [`Stage`], decides which animations are playing, and writes the resulting
//! [`ElementStyle`] back, only when it changed since the last frame.
//!
//! Registration is idempotent per `(element, animation kind)`: registering
//! again replaces the descriptor and keeps the binding id, so a remount never
//! stacks a second trigger on the same element. Sections hold their ids in a
//! [`RevealScope`] and revert it on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

use super::constants::*;
use super::easing::Easing;
use super::env::{EnvSignals, SharedEnv};
use super::error::CoreError;
use super::parallax::ScrubTrack;
use super::style::ElementStyle;
use super::ticker::{SubscriptionId, Ticker};

/// Element position relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Where reveal animations read layout from and write styles to.
pub trait Stage {
    fn rect(&self, key: &str) -> Option<ElementRect>;
    fn apply(&mut self, key: &str, style: &ElementStyle) -> Result<(), CoreError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset: Vec2,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        opacity: 1.0,
        offset: Vec2::ZERO,
    };

    pub fn hidden(offset: Vec2) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }

    pub fn lerp(&self, to: &Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset: self.offset.lerp(to.offset, t),
        }
    }
}

/// When an entrance starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// As soon as the binding is first evaluated.
    OnMount,
    /// When the trigger element's top rises above this fraction of the
    /// viewport height.
    Line(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceMode {
    /// Plays once and stays.
    Once,
    /// Plays forward while the trigger is in range and backwards when it
    /// leaves, either way.
    PlayReverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub easing: Easing,
}

impl Timeline {
    fn total(&self) -> f32 {
        self.delay_sec + self.duration_sec
    }

    /// Eased progress at `t` seconds into the timeline.
    pub fn eased(&self, t: f32) -> f32 {
        if self.duration_sec <= 0.0 {
            return if t >= self.delay_sec { 1.0 } else { 0.0 };
        }
        self.easing
            .apply(((t - self.delay_sec) / self.duration_sec).clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub to: Pose,
    pub trigger: Trigger,
    pub mode: EntranceMode,
    pub timeline: Timeline,
}

impl Entrance {
    /// Section heading sliding in from the left.
    pub fn section_title() -> Self {
        Self {
            from: Pose::hidden(Vec2::new(TITLE_OFFSET_X, 0.0)),
            to: Pose::RESTING,
            trigger: Trigger::Line(TITLE_START_LINE),
            mode: EntranceMode::Once,
            timeline: Timeline {
                duration_sec: TITLE_ENTRANCE_SEC,
                delay_sec: 0.0,
                easing: Easing::Power2Out,
            },
        }
    }

    /// `index`-th item of a staggered list rising into place.
    pub fn stagger_item(index: usize) -> Self {
        Self {
            from: Pose::hidden(Vec2::new(0.0, STAGGER_OFFSET_Y)),
            to: Pose::RESTING,
            trigger: Trigger::Line(STAGGER_START_LINE),
            mode: EntranceMode::Once,
            timeline: Timeline {
                duration_sec: STAGGER_ENTRANCE_SEC,
                delay_sec: index as f32 * STAGGER_STEP_SEC,
                easing: Easing::Power2Out,
            },
        }
    }

    /// Contact card popping in on page load.
    pub fn contact_card(index: usize) -> Self {
        Self {
            trigger: Trigger::OnMount,
            timeline: Timeline {
                easing: Easing::BackOut(CONTACT_BACK_OVERSHOOT),
                ..Self::stagger_item(index).timeline
            },
            ..Self::stagger_item(index)
        }
    }

    pub fn with_mode(mut self, mode: EntranceMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub enter_line: f32,
    pub leave_line: f32,
}

impl Highlight {
    pub fn card() -> Self {
        Self {
            enter_line: CARD_HIGHLIGHT_ENTER,
            leave_line: CARD_HIGHLIGHT_LEAVE,
        }
    }

    pub fn contact() -> Self {
        Self {
            enter_line: CONTACT_HIGHLIGHT_ENTER,
            leave_line: CONTACT_HIGHLIGHT_LEAVE,
        }
    }

    /// On while the top is above the enter line and the bottom still below
    /// the leave line.
    pub fn is_active(&self, rect: &ElementRect, viewport_height: f32) -> bool {
        rect.top <= self.enter_line * viewport_height && rect.bottom() >= self.leave_line * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Underline {
    pub trigger: Trigger,
    pub timeline: Timeline,
}

impl Underline {
    pub fn section_title() -> Self {
        Self {
            trigger: Trigger::Line(TITLE_START_LINE),
            timeline: Timeline {
                duration_sec: UNDERLINE_SEC,
                delay_sec: UNDERLINE_DELAY_SEC,
                easing: Easing::Power2InOut,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    Entrance(Entrance),
    Underline(Underline),
    Highlight(Highlight),
    Scrub(ScrubTrack),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Entrance,
    Underline,
    Highlight,
    Scrub,
}

impl Animation {
    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::Entrance(_) => AnimationKind::Entrance,
            Animation::Underline(_) => AnimationKind::Underline,
            Animation::Highlight(_) => AnimationKind::Highlight,
            Animation::Scrub(_) => AnimationKind::Scrub,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Forward,
    Reverse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BindingState {
    pub playback: Playback,
    /// Seconds into the timeline.
    pub t: f32,
    pub fired: bool,
    pub highlighted: bool,
    last_applied: Option<ElementStyle>,
}

impl Default for BindingState {
    fn default() -> Self {
        Self {
            playback: Playback::Idle,
            t: 0.0,
            fired: false,
            highlighted: false,
            last_applied: None,
        }
    }
}

pub type BindingId = u64;

#[derive(Clone, Debug)]
pub struct Binding {
    pub target: String,
    /// Element whose position triggers the animation; the target itself if `None`.
    pub trigger: Option<String>,
    pub animation: Animation,
    pub state: BindingState,
}

#[derive(Default)]
pub struct RevealEngine {
    next_id: BindingId,
    bindings: FnvHashMap<BindingId, Binding>,
    by_target: FnvHashMap<(String, AnimationKind), BindingId>,
    order: Vec<BindingId>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn binding(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(&id)
    }

    /// Bind `animation` to `target`, triggered by `trigger` (or the target).
    /// A second registration for the same target and kind replaces the first
    /// and returns the same id.
    pub fn register(&mut self, target: &str, trigger: Option<&str>, animation: Animation) -> BindingId {
        let slot = (target.to_string(), animation.kind());
        let binding = Binding {
            target: target.to_string(),
            trigger: trigger.map(str::to_string),
            animation,
            state: BindingState::default(),
        };
        if let Some(&id) = self.by_target.get(&slot) {
            log::debug!("[reveal] rebind {target} ({:?}) as #{id}", slot.1);
            self.bindings.insert(id, binding);
            return id;
        }
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("[reveal] bind {target} ({:?}) as #{id}", slot.1);
        self.bindings.insert(id, binding);
        self.by_target.insert(slot, id);
        self.order.push(id);
        id
    }

    /// Remove a binding. Unknown ids are ignored.
    pub fn unregister(&mut self, id: BindingId) -> bool {
        let Some(binding) = self.bindings.remove(&id) else {
            return false;
        };
        self.by_target
            .remove(&(binding.target.clone(), binding.animation.kind()));
        self.order.retain(|&o| o != id);
        log::debug!("[reveal] unbind #{id} ({})", binding.target);
        true
    }

    /// Evaluate every binding for this frame and push changed styles.
    pub fn update<S: Stage + ?Sized>(&mut self, env: &EnvSignals, dt_sec: f32, stage: &mut S) {
        for id in &self.order {
            let Some(binding) = self.bindings.get_mut(id) else {
                continue;
            };
            let Some(style) = evaluate(binding, env, dt_sec, stage) else {
                continue;
            };
            if binding.state.last_applied.as_ref() == Some(&style) {
                continue;
            }
            match stage.apply(&binding.target, &style) {
                Ok(()) => binding.state.last_applied = Some(style),
                Err(e) => log::trace!("[reveal] skip #{id}: {e}"),
            }
        }
    }
}

/// Advance the binding's playback; `None` when its trigger element is missing.
/// `rect` is only read when the trigger line still matters.
fn step_timeline(
    state: &mut BindingState,
    trigger: Trigger,
    mode: EntranceMode,
    timeline: &Timeline,
    rect: impl FnOnce() -> Option<ElementRect>,
    env: &EnvSignals,
    dt_sec: f32,
) -> Option<f32> {
    let vh = env.viewport.height;
    let mut rect_now = None;
    let past_line = match trigger {
        Trigger::OnMount => true,
        // a fired one-shot never looks at the page again
        Trigger::Line(_) if mode == EntranceMode::Once && state.fired => true,
        Trigger::Line(line) => {
            let r = rect()?;
            rect_now = Some(r);
            r.top <= line * vh
        }
    };
    match mode {
        EntranceMode::Once => {
            if past_line && !state.fired {
                state.fired = true;
                state.playback = Playback::Forward;
            }
        }
        EntranceMode::PlayReverse => {
            // in range until the trigger's bottom scrolls off the top
            let in_range = past_line && rect_now.map_or(true, |r| r.bottom() >= 0.0);
            if in_range {
                state.fired = true;
            }
            state.playback = match (in_range, state.playback) {
                (true, _) => Playback::Forward,
                (false, Playback::Idle) => Playback::Idle,
                (false, _) => Playback::Reverse,
            };
        }
    }
    let total = timeline.total();
    state.t = match state.playback {
        Playback::Idle => state.t,
        Playback::Forward => (state.t + dt_sec).min(total),
        Playback::Reverse => (state.t - dt_sec).max(0.0),
    };
    Some(timeline.eased(state.t))
}

fn evaluate<S: Stage + ?Sized>(
    binding: &mut Binding,
    env: &EnvSignals,
    dt_sec: f32,
    stage: &S,
) -> Option<ElementStyle> {
    let Binding {
        target,
        trigger,
        animation,
        state,
    } = binding;
    let key = trigger.as_deref().unwrap_or(target.as_str());
    // layout reads are deferred to the arms that use them
    let rect = || stage.rect(key);
    let vh = env.viewport.height;
    match animation {
        Animation::Entrance(e) => {
            let e = *e;
            let p = step_timeline(state, e.trigger, e.mode, &e.timeline, rect, env, dt_sec)?;
            let pose = e.from.lerp(&e.to, p);
            Some(ElementStyle {
                opacity: Some(pose.opacity),
                translate: Some(pose.offset),
                ..Default::default()
            })
        }
        Animation::Underline(u) => {
            let u = *u;
            let p = step_timeline(state, u.trigger, EntranceMode::Once, &u.timeline, rect, env, dt_sec)?;
            Some(ElementStyle {
                width_pct: Some(100.0 * p),
                ..Default::default()
            })
        }
        Animation::Highlight(h) => {
            let active = h.is_active(&rect()?, vh);
            state.highlighted = active;
            Some(ElementStyle {
                highlighted: Some(active),
                ..Default::default()
            })
        }
        Animation::Scrub(track) => {
            track.advance(env, dt_sec);
            Some(track.style(env))
        }
    }
}

/// Bindings registered by one mounted section.
#[derive(Default)]
pub struct RevealScope {
    ids: SmallVec<[BindingId; 8]>,
}

impl RevealScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        engine: &mut RevealEngine,
        target: &str,
        trigger: Option<&str>,
        animation: Animation,
    ) -> BindingId {
        let id = engine.register(target, trigger, animation);
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Unregister everything this scope registered. Safe to call twice.
    pub fn revert(&mut self, engine: &mut RevealEngine) {
        for id in self.ids.drain(..) {
            engine.unregister(id);
        }
    }
}

pub type SharedReveal = Rc<RefCell<RevealEngine>>;

/// Reveal engine attached to a [`Ticker`].
pub struct RevealLoop<T: Ticker> {
    ticker: T,
    subscription: Option<SubscriptionId>,
}

impl<T: Ticker> RevealLoop<T> {
    pub fn mount<S: Stage + 'static>(ticker: T, env: SharedEnv, engine: SharedReveal, mut stage: S) -> Self {
        let id = ticker.subscribe(Box::new(move |tick| {
            let env = *env.borrow();
            engine.borrow_mut().update(&env, tick.dt_sec, &mut stage);
        }));
        Self {
            ticker,
            subscription: Some(id),
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.ticker.unsubscribe(id);
        }
    }
}

impl<T: Ticker> Drop for RevealLoop<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
