use chrono::Utc;

use crate::events::{dispatch, AuthEvent};
use crate::session::{ActiveSession, Identity};
use crate::{AuthError, OtpRepository, SessionStore};

/// Verifies a submitted code and establishes the session.
pub struct LoginAction<O: OtpRepository, S: SessionStore> {
    otp_repository: O,
    session_store: S,
    session: ActiveSession,
}

impl<O: OtpRepository, S: SessionStore> LoginAction<O, S> {
    /// Creates a new `LoginAction`.
    pub fn new(otp_repository: O, session_store: S, session: ActiveSession) -> Self {
        LoginAction {
            otp_repository,
            session_store,
            session,
        }
    }

    /// Attempts to log `email` in with `candidate`.
    ///
    /// On a match the pending code is consumed, the role is derived from
    /// the email, and the resulting identity becomes the active session
    /// and is persisted so it survives a restart.
    ///
    /// On a mismatch nothing changes: any existing session stays active,
    /// and a still-pending code (mismatch rather than absence) remains
    /// valid for another attempt.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(identity))` - code matched, session established
    /// - `Ok(None)` - code did not match; re-prompt the user
    /// - `Err(_)` - storage errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(
        &self,
        email: &str,
        candidate: &str,
    ) -> Result<Option<Identity>, AuthError> {
        let verified = self.otp_repository.verify_code(email, candidate).await?;

        if !verified {
            dispatch(AuthEvent::LoginFailed {
                email: email.to_owned(),
                at: Utc::now(),
            })
            .await;

            log::info!(
                target: "passgate_auth",
                "msg=\"login failed\", email={email}"
            );

            return Ok(None);
        }

        let identity = Identity::from_email(email);

        // persist before activating, so a storage failure leaves the
        // session untouched
        self.session_store.save(&identity).await?;
        self.session.set(identity.clone())?;

        dispatch(AuthEvent::LoginSucceeded {
            email: identity.email.clone(),
            role: identity.role,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "passgate_auth",
            "msg=\"login success\", email={email}"
        );

        Ok(Some(identity))
    }
}
