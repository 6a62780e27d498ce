//! In-memory session persistence.
//!
//! Does not survive a process restart; use it in tests or wherever
//! restart survival is not wanted.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::store::SessionStore;
use super::Identity;
use crate::AuthError;

/// In-memory session store holding a single identity slot.
#[derive(Clone)]
pub struct InMemorySessionStore {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl InMemorySessionStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, identity: &Identity) -> Result<(), AuthError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;
        *slot = Some(identity.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Identity>, AuthError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;
        Ok(slot.clone())
    }

    async fn clear(&self) -> Result<(), AuthError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;
        *slot = None;
        Ok(())
    }
}
