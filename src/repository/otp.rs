use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::crypto::Passcode;
use crate::AuthError;

/// A pending one-time code awaiting verification.
#[derive(Clone)]
pub struct PendingCode {
    pub code: Passcode,
    pub issued_at: DateTime<Utc>,
}

impl std::fmt::Debug for PendingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCode")
            .field("code", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Repository for pending one-time codes, keyed by email.
///
/// At most one code is pending per email at any time: issuing again
/// overwrites, and a successful verification consumes the entry.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Generates a fresh 6-digit code and records it for `email`,
    /// replacing any previously pending code for that email.
    ///
    /// Returns the generated code so the surrounding system can deliver
    /// it to the user.
    ///
    /// # Errors
    ///
    /// - `AuthError::EmptyEmail` - `email` is the empty string
    /// - `AuthError::StorageError` - the backing store failed
    async fn issue_code(&self, email: &str) -> Result<Passcode, AuthError>;

    /// Checks `candidate` against the pending code for `email`.
    ///
    /// Returns `true` iff a code is pending for `email` and equals
    /// `candidate` exactly (string equality; codes are digits only, so
    /// no normalization applies). On `true` the entry is deleted - each
    /// code verifies at most once. On `false` the store is unchanged,
    /// so the caller may retry against the still-pending code.
    ///
    /// A wrong code and a code that was never issued both yield
    /// `false`; callers cannot distinguish the two.
    async fn verify_code(&self, email: &str, candidate: &str) -> Result<bool, AuthError>;

    /// Whether `email` currently has a code awaiting verification.
    async fn has_pending(&self, email: &str) -> Result<bool, AuthError>;
}
