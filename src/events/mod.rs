//! Event system for authentication actions.
//!
//! Events are fired from all authentication actions. If no listeners are
//! registered, they are silently ignored (zero overhead).
//!
//! The [`CodeIssued`](AuthEvent::CodeIssued) event doubles as the code
//! delivery side-channel: register a listener that forwards the code to
//! the user (the built-in [`LogDelivery`](listeners::LogDelivery) stub
//! just logs it).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use passgate::register_event_listeners;
//! use passgate::events::listeners::{LogDelivery, LoggingListener};
//!
//! fn main() {
//!     // register listeners at startup
//!     register_event_listeners(|registry| {
//!         registry
//!             .listen(LoggingListener::new())
//!             .listen(LogDelivery::new());
//!     });
//! }
//! ```
//!
//! # Custom Listeners
//!
//! Implement the [`Listener`] trait to create custom event handlers:
//!
//! ```rust,ignore
//! use passgate::events::{AuthEvent, Listener};
//! use async_trait::async_trait;
//!
//! struct EmailDelivery {
//!     smtp_url: String,
//! }
//!
//! #[async_trait]
//! impl Listener for EmailDelivery {
//!     async fn handle(&self, event: &AuthEvent) {
//!         if let AuthEvent::CodeIssued { email, code, .. } = event {
//!             // send code.expose_secret() to email
//!         }
//!     }
//! }
//! ```

mod event;
mod listener;
mod registry;

pub mod listeners;

pub use event::AuthEvent;
pub use listener::Listener;
pub use registry::{dispatch, register_event_listeners};
