//! Scroll-scrubbed transforms: the ambient glows, the header logo and the
//! giant background wordmark.
//!
//! A [`ScrubTrack`] turns the scroll offset into a progress fraction, lags it
//! behind the target by a catch-up time, and maps it onto a transform.

use glam::Vec2;

use super::constants::*;
use super::env::EnvSignals;
use super::style::ElementStyle;

/// What drives a track's progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubSource {
    /// Scroll offset over the whole scrollable page.
    PageProgress,
    /// Scroll offset between two absolute positions, in pixels.
    ScrollRange { start_px: f32, end_px: f32 },
}

impl ScrubSource {
    pub fn progress(&self, env: &EnvSignals) -> f32 {
        match *self {
            ScrubSource::PageProgress => env.page_progress(),
            ScrubSource::ScrollRange { start_px, end_px } => {
                let span = end_px - start_px;
                if span <= 0.0 {
                    return if env.scroll_y >= end_px { 1.0 } else { 0.0 };
                }
                ((env.scroll_y - start_px) / span).clamp(0.0, 1.0)
            }
        }
    }
}

/// How progress becomes a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubEffect {
    /// Vertical offset growing linearly to `travel_px`.
    TranslateY { travel_px: f32 },
    /// Scale growing linearly from 1 to `to`, anchored at its left-centre.
    GrowFromLeft { to: f32 },
    /// Background wordmark: drifts down by a share of the viewport height,
    /// turns, grows and fades out.
    Wordmark,
}

#[inline]
pub fn orb_offset(progress: f32, travel_px: f32) -> f32 {
    progress.clamp(0.0, 1.0) * travel_px
}

#[inline]
pub fn logo_scale(scroll_y: f32, range_px: f32, max_scale: f32) -> f32 {
    let p = if range_px > 0.0 {
        (scroll_y / range_px).clamp(0.0, 1.0)
    } else {
        1.0
    };
    1.0 + (max_scale - 1.0) * p
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordmarkPose {
    pub offset_y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

pub fn wordmark_pose(progress: f32, viewport_height: f32) -> WordmarkPose {
    let p = progress.clamp(0.0, 1.0);
    WordmarkPose {
        offset_y: viewport_height * WORDMARK_TRAVEL_VH * p,
        rotation_deg: WORDMARK_MAX_ROTATION_DEG * p,
        scale: 1.0 + (WORDMARK_MAX_SCALE - 1.0) * p,
        opacity: WORDMARK_BASE_OPACITY * (1.0 - p),
    }
}

impl ScrubEffect {
    pub fn style(&self, progress: f32, env: &EnvSignals) -> ElementStyle {
        match *self {
            ScrubEffect::TranslateY { travel_px } => ElementStyle {
                translate: Some(Vec2::new(0.0, orb_offset(progress, travel_px))),
                ..Default::default()
            },
            ScrubEffect::GrowFromLeft { to } => ElementStyle {
                scale: Some(1.0 + (to - 1.0) * progress.clamp(0.0, 1.0)),
                transform_origin: Some("left center"),
                ..Default::default()
            },
            ScrubEffect::Wordmark => {
                let pose = wordmark_pose(progress, env.viewport.height);
                ElementStyle {
                    translate: Some(Vec2::new(0.0, pose.offset_y)),
                    rotate_deg: Some(pose.rotation_deg),
                    scale: Some(pose.scale),
                    opacity: Some(pose.opacity),
                    centered: true,
                    ..Default::default()
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrubTrack {
    pub source: ScrubSource,
    pub effect: ScrubEffect,
    /// Seconds the track takes to catch up with the scroll; 0 follows it exactly.
    pub lag_sec: f32,
    current: Option<f32>,
}

impl ScrubTrack {
    pub fn new(source: ScrubSource, effect: ScrubEffect, lag_sec: f32) -> Self {
        Self {
            source,
            effect,
            lag_sec,
            current: None,
        }
    }

    pub fn primary_orb() -> Self {
        Self::new(
            ScrubSource::PageProgress,
            ScrubEffect::TranslateY {
                travel_px: ORB_PRIMARY_TRAVEL,
            },
            ORB_PRIMARY_LAG_SEC,
        )
    }

    pub fn secondary_orb() -> Self {
        Self::new(
            ScrubSource::PageProgress,
            ScrubEffect::TranslateY {
                travel_px: ORB_SECONDARY_TRAVEL,
            },
            ORB_SECONDARY_LAG_SEC,
        )
    }

    pub fn header_logo() -> Self {
        Self::new(
            ScrubSource::ScrollRange {
                start_px: 0.0,
                end_px: LOGO_SCALE_RANGE_PX,
            },
            ScrubEffect::GrowFromLeft { to: LOGO_MAX_SCALE },
            LOGO_LAG_SEC,
        )
    }

    pub fn wordmark() -> Self {
        Self::new(ScrubSource::PageProgress, ScrubEffect::Wordmark, WORDMARK_LAG_SEC)
    }

    /// Smoothed progress after the last [`advance`](Self::advance).
    pub fn progress(&self) -> f32 {
        self.current.unwrap_or(0.0)
    }

    /// Move the smoothed progress towards the scroll target. The first call
    /// snaps straight to it.
    pub fn advance(&mut self, env: &EnvSignals, dt_sec: f32) -> f32 {
        let target = self.source.progress(env);
        let next = match self.current {
            Some(cur) if self.lag_sec > 0.0 => {
                let alpha = 1.0 - (-dt_sec.max(0.0) / self.lag_sec).exp();
                cur + (target - cur) * alpha
            }
            _ => target,
        };
        self.current = Some(next);
        next
    }

    pub fn style(&self, env: &EnvSignals) -> ElementStyle {
        self.effect.style(self.progress(), env)
    }
}
