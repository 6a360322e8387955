use thiserror::Error;

/// Failures at the seams between the animation core and the page.
///
/// None of these abort anything: callers log them and the affected animation
/// simply does not play.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("no element for key `{key}`")]
    MissingTarget { key: String },
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

impl CoreError {
    pub fn missing(key: impl Into<String>) -> Self {
        CoreError::MissingTarget { key: key.into() }
    }
}
