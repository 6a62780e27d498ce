pub mod actions;
pub mod context;
pub mod crypto;
pub mod events;
pub mod repository;
pub mod session;
pub mod validators;

pub use context::AuthContext;
pub use crypto::Passcode;
pub use events::register_event_listeners;
pub use events::AuthEvent;
pub use repository::InMemoryOtpRepository;
pub use repository::OtpRepository;
pub use repository::PendingCode;
pub use session::ActiveSession;
pub use session::FileSessionStore;
pub use session::Identity;
pub use session::InMemorySessionStore;
pub use session::Role;
pub use session::SessionStore;

use std::fmt;

/// Errors surfaced by the authentication core.
///
/// A failed code check is *not* an error: verification returns `false`
/// and the caller re-prompts. See [`OtpRepository::verify_code`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    EmptyEmail,
    StorageError(String),
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyEmail => write!(f, "Email key cannot be empty"),
            AuthError::StorageError(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}
