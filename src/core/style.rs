use glam::Vec2;

/// Style values an animation wants on one element this frame. Unset fields
/// are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    pub opacity: Option<f32>,
    pub translate: Option<Vec2>,
    pub rotate_deg: Option<f32>,
    pub scale: Option<f32>,
    pub width_pct: Option<f32>,
    pub transform_origin: Option<&'static str>,
    pub highlighted: Option<bool>,
    /// Prefix the transform with `translate(-50%, -50%)`, for elements
    /// positioned by their centre.
    pub centered: bool,
}

impl ElementStyle {
    pub fn has_transform(&self) -> bool {
        self.translate.is_some() || self.rotate_deg.is_some() || self.scale.is_some() || self.centered
    }

    /// CSS `transform` value, or `None` if this style does not touch it.
    pub fn transform_css(&self) -> Option<String> {
        if !self.has_transform() {
            return None;
        }
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.centered {
            parts.push("translate(-50%, -50%)".to_string());
        }
        if let Some(t) = self.translate {
            parts.push(format!("translate3d({:.2}px, {:.2}px, 0px)", t.x, t.y));
        }
        if let Some(r) = self.rotate_deg {
            parts.push(format!("rotate({r:.3}deg)"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s:.4})"));
        }
        Some(parts.join(" "))
    }
}
