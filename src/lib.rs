/// alertcast - severity-tagged notifications fanned out to observers
///
/// A `Publisher` holds borrowed `NotificationReceiver`s and delivers
/// warnings, errors and fatal errors to each of them in registration order.
/// `ConsoleReceiver` and `FileReceiver` are the two sample receivers.
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod publisher;
pub mod receivers;

// Re-export core types for convenience
pub use crate::core::*;
pub use publisher::Publisher;
pub use receivers::{ConsoleReceiver, FileReceiver};
