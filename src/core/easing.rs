/// Easing curves used by the entrance animations. Input and output are
/// progress fractions; input is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Power2Out,
    Power2InOut,
    /// Overshoots past 1 before settling; the payload is the overshoot amount.
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}
