//! Environment signals shared by every animated component.
//!
//! The page writes these from its scroll/pointer/resize listeners; components
//! only ever receive a copy in their update step, so each one can be driven in
//! tests without a browser.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

use super::error::CoreError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, CoreError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(CoreError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Device-pixel size of a backing store covering the viewport at `dpr`.
    pub fn backing_size(&self, dpr: f64) -> (u32, u32) {
        let px = |css: f32| ((css as f64 * dpr) as u32).max(1);
        (px(self.width), px(self.height))
    }
}

/// Whether a canvas backing store of `backing` device pixels has to be
/// resized to cover `viewport` at `dpr`. Either axis counts.
pub fn needs_resync(backing: (u32, u32), viewport: Viewport, dpr: f64) -> bool {
    backing != viewport.backing_size(dpr)
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Snapshot of everything the environment tells the animation core.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvSignals {
    pub viewport: Viewport,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f32,
    /// Total scrollable document height in CSS pixels.
    pub document_height: f32,
    /// Last pointer position in viewport coordinates; `None` until the first move.
    pub pointer: Option<Vec2>,
}

impl EnvSignals {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            document_height: viewport.height,
            ..Default::default()
        }
    }

    /// Scroll progress over the whole page in `[0, 1]`.
    pub fn page_progress(&self) -> f32 {
        let scrollable = self.document_height - self.viewport.height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

pub type SharedEnv = Rc<RefCell<EnvSignals>>;

pub fn shared(env: EnvSignals) -> SharedEnv {
    Rc::new(RefCell::new(env))
}
