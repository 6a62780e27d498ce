mod file_store;
mod memory_store;
mod store;

pub use file_store::FileSessionStore;
pub use memory_store::InMemorySessionStore;
pub use store::SessionStore;

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Authorization tier, derived from the email at login.
///
/// Serialized with the wire names the persistence surface expects:
/// `"super_admin"` for [`Role::Elevated`], `"company"` for
/// [`Role::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "super_admin")]
    Elevated,
    #[serde(rename = "company")]
    Standard,
}

impl Role {
    /// Derives the role from an email address.
    ///
    /// Any email containing the literal substring `admin` - in the local
    /// part or the domain - is [`Role::Elevated`]; everything else is
    /// [`Role::Standard`]. The rule is pure and deterministic.
    pub fn derive_from_email(email: &str) -> Self {
        if email.contains("admin") {
            Role::Elevated
        } else {
            Role::Standard
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Elevated)
    }
}

/// The authenticated principal: an email plus its derived role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// Builds an identity for `email`, deriving the role.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let role = Role::derive_from_email(&email);
        Self { email, role }
    }
}

/// Handle to the process-wide active session.
///
/// Holds the current [`Identity`], or nothing when anonymous. Cloning the
/// handle clones the reference, not the slot, so every clone observes the
/// same session. There is at most one active session per handle graph.
#[derive(Clone)]
pub struct ActiveSession {
    current: Arc<RwLock<Option<Identity>>>,
}

impl ActiveSession {
    /// Creates an anonymous session handle.
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the current identity, or `None` when anonymous.
    pub fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    /// Returns true if an identity is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Replaces the session with `identity`.
    pub fn set(&self, identity: Identity) -> Result<(), AuthError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;
        *guard = Some(identity);
        Ok(())
    }

    /// Clears the session, returning the identity that was active.
    ///
    /// Clearing an anonymous session is a no-op and returns `None`.
    pub fn clear(&self) -> Result<Option<Identity>, AuthError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;
        Ok(guard.take())
    }
}

impl Default for ActiveSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_derivation_elevated() {
        assert_eq!(Role::derive_from_email("admin@x.com"), Role::Elevated);
        assert_eq!(Role::derive_from_email("sysadmin@x.com"), Role::Elevated);
        // "admin" in the domain also elevates
        assert_eq!(Role::derive_from_email("user@admin.net"), Role::Elevated);
    }

    #[test]
    fn test_role_derivation_standard() {
        assert_eq!(Role::derive_from_email("company@x.com"), Role::Standard);
        assert_eq!(Role::derive_from_email("user@example.com"), Role::Standard);
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::Elevated).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Standard).unwrap(),
            "\"company\""
        );
    }

    #[test]
    fn test_identity_serialization_round_trip() {
        let identity = Identity::from_email("admin@acme.com");
        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains("\"email\":\"admin@acme.com\""));
        assert!(json.contains("\"role\":\"super_admin\""));

        let restored: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, identity);
    }

    #[test]
    fn test_active_session_set_and_clear() {
        let session = ActiveSession::new();
        assert!(!session.is_authenticated());

        let identity = Identity::from_email("user@example.com");
        session.set(identity.clone()).unwrap();
        assert_eq!(session.current(), Some(identity.clone()));

        let cleared = session.clear().unwrap();
        assert_eq!(cleared, Some(identity));
        assert!(session.current().is_none());

        // clearing twice is a no-op
        assert_eq!(session.clear().unwrap(), None);
    }

    #[test]
    fn test_active_session_shared_across_clones() {
        let session = ActiveSession::new();
        let view = session.clone();

        session.set(Identity::from_email("user@example.com")).unwrap();
        assert!(view.is_authenticated());

        view.clear().unwrap();
        assert!(!session.is_authenticated());
    }
}
