use chrono::Utc;

use crate::events::{dispatch, AuthEvent};
use crate::session::ActiveSession;
use crate::{AuthError, SessionStore};

/// Clears the active session and its persisted copy.
pub struct LogoutAction<S: SessionStore> {
    session_store: S,
    session: ActiveSession,
}

impl<S: SessionStore> LogoutAction<S> {
    /// Creates a new `LogoutAction`.
    pub fn new(session_store: S, session: ActiveSession) -> Self {
        LogoutAction {
            session_store,
            session,
        }
    }

    /// Logs out the current identity, if any.
    ///
    /// Idempotent: logging out with no active session is a no-op, not an
    /// error.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - session and persisted copy cleared (or nothing to do)
    /// - `Err(_)` - storage errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "logout", skip_all, err)
    )]
    pub async fn execute(&self) -> Result<(), AuthError> {
        self.session_store.clear().await?;
        let previous = self.session.clear()?;

        if let Some(identity) = previous {
            dispatch(AuthEvent::LoggedOut {
                email: identity.email,
                at: Utc::now(),
            })
            .await;

            log::info!(
                target: "passgate_auth",
                "msg=\"logout success\""
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;
    use crate::InMemorySessionStore;

    #[tokio::test]
    async fn test_logout_clears_session_and_store() {
        let store = InMemorySessionStore::new();
        let session = ActiveSession::new();

        let identity = Identity::from_email("user@example.com");
        store.save(&identity).await.unwrap();
        session.set(identity).unwrap();

        let logout = LogoutAction::new(store.clone(), session.clone());
        logout.execute().await.unwrap();

        assert!(session.current().is_none());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_idempotent() {
        let store = InMemorySessionStore::new();
        let session = ActiveSession::new();

        let logout = LogoutAction::new(store, session.clone());

        // no active session: both calls are clean no-ops
        logout.execute().await.unwrap();
        logout.execute().await.unwrap();

        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn test_logout_twice_equivalent_to_once() {
        let store = InMemorySessionStore::new();
        let session = ActiveSession::new();

        let identity = Identity::from_email("user@example.com");
        store.save(&identity).await.unwrap();
        session.set(identity).unwrap();

        let logout = LogoutAction::new(store.clone(), session.clone());
        logout.execute().await.unwrap();
        logout.execute().await.unwrap();

        assert!(session.current().is_none());
        assert!(store.load().await.unwrap().is_none());
    }
}
