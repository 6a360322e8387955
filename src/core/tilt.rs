use glam::Vec2;

use super::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_deg: f32,
    pub perspective_px: f32,
    pub hover_scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_deg: TILT_MAX_DEG,
            perspective_px: TILT_PERSPECTIVE_PX,
            hover_scale: TILT_HOVER_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    pub const NEUTRAL: TiltTransform = TiltTransform {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    pub fn css(&self, perspective_px: f32) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({:.3}deg) rotateY({:.3}deg) scale3d({s}, {s}, {s})",
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = self.scale
        )
    }
}

/// Rotation for a pointer at `local` (relative to the card's top-left corner)
/// over a card of `size`. Pointer below centre tips the top edge towards the
/// viewer; pointer right of centre turns the card right. Offsets beyond the
/// card edge are clamped so the rotation never exceeds `max_deg`.
pub fn tilt_for_pointer(local: Vec2, size: Vec2, config: &TiltConfig) -> TiltTransform {
    if size.x <= 0.0 || size.y <= 0.0 {
        return TiltTransform::NEUTRAL;
    }
    let half = size * 0.5;
    let norm = ((local - half) / half).clamp(Vec2::splat(-1.0), Vec2::ONE);
    TiltTransform {
        rotate_x_deg: -norm.y * config.max_deg,
        rotate_y_deg: norm.x * config.max_deg,
        scale: config.hover_scale,
    }
}

/// Transform applied when the pointer leaves the card.
#[inline]
pub fn tilt_on_exit() -> TiltTransform {
    TiltTransform::NEUTRAL
}
