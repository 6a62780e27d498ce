//! Session persistence trait.

use async_trait::async_trait;

use super::Identity;
use crate::AuthError;

/// Key-value persistence surface for the active session.
///
/// Implementations provide different storage backends:
/// - [`InMemorySessionStore`](super::InMemorySessionStore): non-persistent,
///   for tests and single-process embedders
/// - [`FileSessionStore`](super::FileSessionStore): one JSON file, survives
///   process restarts
///
/// The store holds at most one identity - the persisted copy of the active
/// session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists `identity`, replacing any previously saved one.
    async fn save(&self, identity: &Identity) -> Result<(), AuthError>;

    /// Loads the persisted identity.
    ///
    /// Absent *and malformed* data both yield `Ok(None)`: a corrupted
    /// record must never surface as an error, it simply means no session
    /// is restored.
    async fn load(&self) -> Result<Option<Identity>, AuthError>;

    /// Removes the persisted identity. Idempotent.
    async fn clear(&self) -> Result<(), AuthError>;
}
