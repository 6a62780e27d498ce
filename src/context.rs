//! The UI-facing authentication context.

use crate::actions::{LoginAction, LogoutAction, RequestCodeAction, RestoreSessionAction};
use crate::crypto::Passcode;
use crate::session::{ActiveSession, Identity};
use crate::{AuthError, OtpRepository, SessionStore};

/// The operation contract exposed to the embedding layer.
///
/// Bundles a credential store, a session store and the active session
/// behind the four public operations. The context is an explicit
/// capability: operations only exist as methods on a constructed
/// `AuthContext`, so there is no way to call them outside an initialized
/// scope - the wiring bug that an ambient-lookup design would have to
/// detect at runtime is a compile error here.
///
/// # Example
///
/// ```rust,ignore
/// use passgate::{AuthContext, FileSessionStore, InMemoryOtpRepository};
///
/// let auth = AuthContext::new(
///     InMemoryOtpRepository::new(),
///     FileSessionStore::new("/var/lib/myapp/session")?,
/// );
/// auth.restore_on_init().await?;
///
/// let code = auth.request_code("user@example.com").await?;
/// // ... deliver the code, collect the user's input ...
/// if auth.attempt_login("user@example.com", submitted).await? {
///     let who = auth.current_identity();
/// }
/// ```
pub struct AuthContext<O, S>
where
    O: OtpRepository + Clone,
    S: SessionStore + Clone,
{
    otp_repository: O,
    session_store: S,
    session: ActiveSession,
}

impl<O, S> AuthContext<O, S>
where
    O: OtpRepository + Clone,
    S: SessionStore + Clone,
{
    /// Creates a context with an anonymous session.
    ///
    /// Call [`restore_on_init`](Self::restore_on_init) afterwards to pick
    /// up a session persisted by a previous process.
    pub fn new(otp_repository: O, session_store: S) -> Self {
        AuthContext {
            otp_repository,
            session_store,
            session: ActiveSession::new(),
        }
    }

    /// Restores a persisted session, if one exists and parses.
    ///
    /// Malformed persisted data is treated as absent.
    pub async fn restore_on_init(&self) -> Result<Option<Identity>, AuthError> {
        RestoreSessionAction::new(self.session_store.clone(), self.session.clone())
            .execute()
            .await
    }

    /// Issues a one-time code for `email`, overwriting any pending one.
    ///
    /// The caller is responsible for validating the email shape first
    /// (see [`validate_email`](crate::validators::validate_email)) and
    /// for delivering the returned code to the user.
    pub async fn request_code(&self, email: &str) -> Result<Passcode, AuthError> {
        RequestCodeAction::new(self.otp_repository.clone())
            .execute(email)
            .await
    }

    /// Attempts to log in with a submitted code.
    ///
    /// Returns `true` and establishes the session on a match; returns
    /// `false` on a mismatch, leaving any existing session and any
    /// still-pending code untouched so the caller can re-prompt.
    pub async fn attempt_login(&self, email: &str, candidate: &str) -> Result<bool, AuthError> {
        let identity = LoginAction::new(
            self.otp_repository.clone(),
            self.session_store.clone(),
            self.session.clone(),
        )
        .execute(email, candidate)
        .await?;

        Ok(identity.is_some())
    }

    /// Logs out. Idempotent.
    pub async fn logout(&self) -> Result<(), AuthError> {
        LogoutAction::new(self.session_store.clone(), self.session.clone())
            .execute()
            .await
    }

    /// Returns the currently authenticated identity, or `None`.
    pub fn current_identity(&self) -> Option<Identity> {
        self.session.current()
    }

    /// Returns true if an identity is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
