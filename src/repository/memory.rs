//! In-memory credential store.
//!
//! Codes live for the lifetime of the process and are never written to
//! disk. This is the reference implementation; it doubles as the test
//! store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::crypto::{generate_passcode, Passcode};
use crate::AuthError;

use super::otp::{OtpRepository, PendingCode};

/// In-memory credential store.
///
/// Pending codes are kept in a `HashMap` keyed by email, protected by a
/// `RwLock`. Cloning the repository clones the handle, not the map, so
/// every clone observes the same pending codes.
#[derive(Clone)]
pub struct InMemoryOtpRepository {
    codes: Arc<RwLock<HashMap<String, PendingCode>>>,
}

impl InMemoryOtpRepository {
    /// Creates a new, empty credential store.
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of emails currently awaiting verification.
    pub fn len(&self) -> usize {
        self.codes.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if no codes are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn issue_code(&self, email: &str) -> Result<Passcode, AuthError> {
        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }

        let code = generate_passcode();
        let pending = PendingCode {
            code: code.clone(),
            issued_at: Utc::now(),
        };

        self.codes
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?
            .insert(email.to_owned(), pending);

        Ok(code)
    }

    async fn verify_code(&self, email: &str, candidate: &str) -> Result<bool, AuthError> {
        let mut codes = self
            .codes
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;

        let matched = codes
            .get(email)
            .is_some_and(|pending| pending.code.expose_secret() == candidate);

        // single-use: a matching code is consumed, a mismatch leaves the
        // entry pending for another attempt
        if matched {
            codes.remove(email);
        }

        Ok(matched)
    }

    async fn has_pending(&self, email: &str) -> Result<bool, AuthError> {
        let codes = self
            .codes
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_owned()))?;

        Ok(codes.contains_key(email))
    }
}
