use chrono::{DateTime, Utc};

use crate::crypto::Passcode;
use crate::session::Role;

/// Authentication events emitted by passgate actions.
///
/// Events are always fired from actions. If no listeners are registered,
/// they are silently ignored (no-op). Register listeners via
/// [`register_event_listeners`](crate::events::register_event_listeners)
/// to handle events.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// A one-time code was issued. Carries the code so a delivery
    /// listener can forward it to the user; `Passcode` keeps it out of
    /// `Debug` output.
    CodeIssued {
        email: String,
        code: Passcode,
        at: DateTime<Utc>,
    },
    LoginSucceeded {
        email: String,
        role: Role,
        at: DateTime<Utc>,
    },
    /// A login attempt did not match. There is deliberately no reason
    /// field: a wrong code and a code that was never issued are
    /// indistinguishable.
    LoginFailed {
        email: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        email: String,
        at: DateTime<Utc>,
    },
    /// A persisted session was restored at startup without code
    /// re-verification.
    SessionRestored {
        email: String,
        role: Role,
        at: DateTime<Utc>,
    },
}

impl AuthEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CodeIssued { .. } => "auth.code.issued",
            Self::LoginSucceeded { .. } => "auth.login.success",
            Self::LoginFailed { .. } => "auth.login.failed",
            Self::LoggedOut { .. } => "auth.logout.success",
            Self::SessionRestored { .. } => "auth.session.restored",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::CodeIssued { at, .. }
            | Self::LoginSucceeded { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LoggedOut { at, .. }
            | Self::SessionRestored { at, .. } => *at,
        }
    }

    /// Returns the email the event concerns.
    pub fn email(&self) -> &str {
        match self {
            Self::CodeIssued { email, .. }
            | Self::LoginSucceeded { email, .. }
            | Self::LoginFailed { email, .. }
            | Self::LoggedOut { email, .. }
            | Self::SessionRestored { email, .. } => email,
        }
    }
}
