//! Platform-free animation core. Nothing in here touches the DOM; the browser
//! side feeds it [`env::EnvSignals`] and implements its drawing and styling
//! seams.

pub mod constants;
pub mod easing;
pub mod env;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod starfield;
pub mod style;
pub mod ticker;
pub mod tilt;
pub mod timer;
pub mod typing;

pub use env::{EnvSignals, SharedEnv, Viewport};
pub use error::CoreError;
pub use ticker::{FrameTick, ManualTicker, Ticker};
pub use timer::{ManualTimers, TimerHost};
