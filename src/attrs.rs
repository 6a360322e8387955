//! `data-*` overrides read from the host page. Anything missing or
//! unparsable falls back to the component default.

use crate::core::reveal::EntranceMode;
use crate::core::tilt::TiltConfig;
use crate::core::typing::TypingConfig;

/// Attribute values of one typing label, as read from the DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypingAttrs<'a> {
    pub text: Option<&'a str>,
    pub speed: Option<&'a str>,
    pub delay: Option<&'a str>,
    pub repeat: Option<&'a str>,
}

fn parse_ms(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
}

fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") | Some("yes") | Some("") => Some(true),
        Some("false") | Some("0") | Some("no") => Some(false),
        _ => None,
    }
}

pub fn typing_config(attrs: TypingAttrs<'_>, fallback_text: &str) -> TypingConfig {
    let mut config = TypingConfig::new(attrs.text.unwrap_or(fallback_text));
    // a zero interval would spin the timer
    if let Some(speed) = parse_ms(attrs.speed).filter(|&ms| ms > 0) {
        config.char_interval_ms = speed;
    }
    if let Some(delay) = parse_ms(attrs.delay) {
        config.start_delay_ms = delay;
    }
    if let Some(repeat) = parse_bool(attrs.repeat) {
        config.repeat = repeat;
    }
    config
}

pub fn tilt_config(max_deg: Option<&str>) -> TiltConfig {
    let mut config = TiltConfig::default();
    if let Some(deg) = max_deg
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
    {
        config.max_deg = deg;
    }
    config
}

pub fn seed(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

pub fn reveal_mode(raw: Option<&str>) -> EntranceMode {
    match raw.map(str::trim) {
        Some("play-reverse") => EntranceMode::PlayReverse,
        _ => EntranceMode::Once,
    }
}
