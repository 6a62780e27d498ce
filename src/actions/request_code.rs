use chrono::Utc;

use crate::crypto::Passcode;
use crate::events::{dispatch, AuthEvent};
use crate::{AuthError, OtpRepository};

/// Issues a one-time code for an email.
///
/// The action performs no email validation: callers validate the shape
/// first (see [`validate_email`](crate::validators::validate_email)) and
/// only pass well-formed addresses down here.
pub struct RequestCodeAction<O: OtpRepository> {
    otp_repository: O,
}

impl<O: OtpRepository> RequestCodeAction<O> {
    /// Creates a new `RequestCodeAction`.
    pub fn new(otp_repository: O) -> Self {
        RequestCodeAction { otp_repository }
    }

    /// Issues a fresh code for `email`, overwriting any pending one.
    ///
    /// The code is returned to the caller and also carried on the
    /// [`AuthEvent::CodeIssued`] event, which is the delivery
    /// side-channel: whatever gets the code to the user (log line,
    /// toast, email sender) hangs off that event.
    ///
    /// # Returns
    ///
    /// - `Ok(code)` - code recorded and ready for delivery
    /// - `Err(AuthError::EmptyEmail)` - empty email key
    /// - `Err(_)` - storage errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "request_code", skip_all, err)
    )]
    pub async fn execute(&self, email: &str) -> Result<Passcode, AuthError> {
        let code = self.otp_repository.issue_code(email).await?;

        dispatch(AuthEvent::CodeIssued {
            email: email.to_owned(),
            code: code.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "passgate_auth",
            "msg=\"one-time code issued\", email={email}"
        );

        Ok(code)
    }
}
