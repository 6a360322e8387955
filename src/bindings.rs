//! Which element gets which animation. The shell calls these once per mount
//! and keeps the returned scopes until unmount.

use crate::constants::*;
use crate::core::parallax::ScrubTrack;
use crate::core::reveal::{Animation, Entrance, EntranceMode, Highlight, RevealEngine, RevealScope, Underline};

/// Shape of one rendered section.
#[derive(Clone, Copy, Debug)]
pub struct SectionPlan<'a> {
    pub id: &'a str,
    /// Number of `stagger-item` children, keyed by [`item_key`].
    pub items: usize,
    /// Whether the stagger items are also `cyber-card`s that glow while
    /// centred.
    pub cards: bool,
    pub mode: EntranceMode,
}

/// Title slide-in, underline, staggered items and card highlights for one
/// section. Titles trigger on the section, items on its content block.
pub fn bind_section(engine: &mut RevealEngine, plan: &SectionPlan<'_>) -> RevealScope {
    let mut scope = RevealScope::new();
    let section = plan.id;
    scope.register(
        engine,
        &title_key(section),
        Some(section),
        Animation::Entrance(Entrance::section_title().with_mode(plan.mode)),
    );
    scope.register(
        engine,
        &title_line_key(section),
        Some(section),
        Animation::Underline(Underline::section_title()),
    );
    let content = content_key(section);
    for i in 0..plan.items {
        let key = item_key(section, i);
        scope.register(
            engine,
            &key,
            Some(&content),
            Animation::Entrance(Entrance::stagger_item(i).with_mode(plan.mode)),
        );
        if plan.cards {
            scope.register(engine, &key, None, Animation::Highlight(Highlight::card()));
        }
    }
    log::debug!("[bindings] {section}: {} bindings", scope.len());
    scope
}

/// Hero contact cards: entrance on load, glow while centred.
pub fn bind_contact_cards(engine: &mut RevealEngine, count: usize) -> RevealScope {
    let mut scope = RevealScope::new();
    for i in 0..count {
        let key = contact_key(i);
        scope.register(engine, &key, None, Animation::Entrance(Entrance::contact_card(i)));
        scope.register(engine, &key, None, Animation::Highlight(Highlight::contact()));
    }
    scope
}

/// Ambient glows, the header logo and the background wordmark.
pub fn bind_parallax(engine: &mut RevealEngine) -> RevealScope {
    let mut scope = RevealScope::new();
    let tracks = [
        (ORB_PRIMARY_ID, ScrubTrack::primary_orb()),
        (ORB_SECONDARY_ID, ScrubTrack::secondary_orb()),
        (NAV_LOGO_ID, ScrubTrack::header_logo()),
        (WORDMARK_ID, ScrubTrack::wordmark()),
    ];
    for (key, track) in tracks {
        scope.register(engine, key, None, Animation::Scrub(track));
    }
    scope
}
