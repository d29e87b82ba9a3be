//! Arden event bus infrastructure.
//!
//! Building blocks for the in-process scene event system:
//!
//! - [`EventBus`] — publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SceneEvent`] — the canonical scene event envelope.
//! - [`EventLogger`] — background subscriber that writes every event to
//!   the structured log.

pub mod bus;
pub mod logger;

pub use bus::{EventBus, SceneEvent};
pub use logger::EventLogger;
