use async_trait::async_trait;

use super::AuthEvent;

/// Trait for handling authentication events asynchronously.
///
/// Implement this trait to create custom event listeners. Listeners can
/// perform any async operation: logging, delivering codes, updating
/// metrics, etc.
///
/// # Example
///
/// ```rust,ignore
/// use passgate::events::{AuthEvent, Listener};
/// use async_trait::async_trait;
///
/// struct ToastNotifier {
///     sink: ToastSink,
/// }
///
/// #[async_trait]
/// impl Listener for ToastNotifier {
///     async fn handle(&self, event: &AuthEvent) {
///         if let AuthEvent::CodeIssued { email, code, .. } = event {
///             // show the code to the user
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handle an authentication event.
    ///
    /// This method is called for every event dispatched. Filter by matching
    /// on the event variant to handle specific events.
    async fn handle(&self, event: &AuthEvent);
}
