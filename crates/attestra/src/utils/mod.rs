//! Utility modules shared across components.

pub mod deferred;
pub mod signal_ext;

pub use deferred::{spawn_after, TaskHandle};
pub use signal_ext::SignalExt;
