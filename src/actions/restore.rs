use chrono::Utc;

use crate::events::{dispatch, AuthEvent};
use crate::session::{ActiveSession, Identity};
use crate::{AuthError, SessionStore};

/// Restores a persisted session at process start.
pub struct RestoreSessionAction<S: SessionStore> {
    session_store: S,
    session: ActiveSession,
}

impl<S: SessionStore> RestoreSessionAction<S> {
    /// Creates a new `RestoreSessionAction`.
    pub fn new(session_store: S, session: ActiveSession) -> Self {
        RestoreSessionAction {
            session_store,
            session,
        }
    }

    /// Loads the persisted identity, if any, and activates it without
    /// re-verifying a code.
    ///
    /// Malformed persisted data behaves exactly like absent data: no
    /// active session, no error. The store is responsible for that
    /// swallowing (see [`SessionStore::load`]).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(identity))` - session restored
    /// - `Ok(None)` - nothing persisted (or unreadable); stays anonymous
    /// - `Err(_)` - storage errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "restore_session", skip_all, err)
    )]
    pub async fn execute(&self) -> Result<Option<Identity>, AuthError> {
        let Some(identity) = self.session_store.load().await? else {
            return Ok(None);
        };

        self.session.set(identity.clone())?;

        dispatch(AuthEvent::SessionRestored {
            email: identity.email.clone(),
            role: identity.role,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "passgate_auth",
            "msg=\"session restored\", email={}",
            identity.email
        );

        Ok(Some(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::InMemorySessionStore;

    #[tokio::test]
    async fn test_restore_activates_persisted_identity() {
        let store = InMemorySessionStore::new();
        let identity = Identity::from_email("admin@acme.com");
        store.save(&identity).await.unwrap();

        // fresh process: new ActiveSession
        let session = ActiveSession::new();
        let restore = RestoreSessionAction::new(store, session.clone());
        let restored = restore.execute().await.unwrap();

        assert_eq!(restored, Some(identity.clone()));
        assert_eq!(session.current(), Some(identity));
        assert_eq!(session.current().unwrap().role, Role::Elevated);
    }

    #[tokio::test]
    async fn test_restore_with_nothing_persisted() {
        let store = InMemorySessionStore::new();
        let session = ActiveSession::new();

        let restore = RestoreSessionAction::new(store, session.clone());
        let restored = restore.execute().await.unwrap();

        assert!(restored.is_none());
        assert!(session.current().is_none());
    }
}
