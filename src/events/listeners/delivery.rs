use async_trait::async_trait;

use crate::events::{AuthEvent, Listener};

/// Surfaces issued codes on the diagnostic log.
///
/// This is the delivery stub: it stands in for the channel that gets the
/// code to the user (a toast in a browser shell, an email/SMS sender in a
/// real deployment). Replace it with your own [`Listener`] on
/// [`AuthEvent::CodeIssued`] to actually deliver codes.
///
/// Because this writes plaintext codes to the log, register it only where
/// the log is an acceptable channel (development, demos).
///
/// # Example
///
/// ```rust,ignore
/// use passgate::register_event_listeners;
/// use passgate::events::listeners::LogDelivery;
///
/// register_event_listeners(|registry| {
///     registry.listen(LogDelivery::new());
/// });
/// ```
pub struct LogDelivery;

impl LogDelivery {
    /// Creates a new log-based delivery stub.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for LogDelivery {
    async fn handle(&self, event: &AuthEvent) {
        if let AuthEvent::CodeIssued { email, code, .. } = event {
            log::info!(
                target: "passgate::delivery",
                "one-time code for {email}: {}",
                code.expose_secret()
            );
        }
    }
}
