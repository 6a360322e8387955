//! Window listeners feeding [`EnvSignals`](crate::core::EnvSignals) and the
//! per-card tilt handlers. Every function returns the
//! [`Listener`](crate::dom::Listener) guards it attached; dropping them
//! detaches the handlers.

mod pointer;
mod viewport;

pub use pointer::{wire_pointer, wire_tilt_cards};
pub use viewport::{read_env, wire_viewport};
