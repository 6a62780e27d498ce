//! File-backed session persistence.
//!
//! Stores the active identity as a single JSON file, the library's
//! stand-in for a browser's local storage.

use std::path::PathBuf;

use async_trait::async_trait;

use super::store::SessionStore;
use super::Identity;
use crate::AuthError;

/// Default storage key; the identity file is named `<key>.json`.
pub const DEFAULT_SESSION_KEY: &str = "user";

/// File-backed session store.
///
/// The identity is written to `<directory>/<key>.json` as a record with
/// string fields `email` and `role`. An unparseable file is treated as an
/// absent session, never an error.
///
/// # Example
///
/// ```rust,ignore
/// use passgate::FileSessionStore;
///
/// let store = FileSessionStore::new("/var/lib/myapp/session")?;
/// ```
#[derive(Clone)]
pub struct FileSessionStore {
    directory: PathBuf,
    key: String,
}

impl FileSessionStore {
    /// Creates a new file session store rooted at `directory`, using the
    /// default `"user"` key.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AuthError::StorageError(format!("Failed to create session directory: {e}"))
        })?;
        Ok(Self {
            directory: dir,
            key: DEFAULT_SESSION_KEY.to_owned(),
        })
    }

    /// Overrides the storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Returns the path of the identity file.
    fn identity_path(&self) -> PathBuf {
        self.directory.join(format!("{}.json", self.key))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, identity: &Identity) -> Result<(), AuthError> {
        let content = serde_json::to_string_pretty(identity)
            .map_err(|e| AuthError::StorageError(format!("Failed to serialize identity: {e}")))?;

        std::fs::write(self.identity_path(), content)
            .map_err(|e| AuthError::StorageError(format!("Failed to write identity file: {e}")))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<Identity>, AuthError> {
        let path = self.identity_path();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| AuthError::StorageError(format!("Failed to read identity file: {e}")))?;

        // malformed data means no session, not a failure
        match serde_json::from_str::<Identity>(&content) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                log::warn!(
                    target: "passgate_auth",
                    "msg=\"discarding malformed persisted session\", error=\"{e}\""
                );
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), AuthError> {
        let path = self.identity_path();
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                AuthError::StorageError(format!("Failed to delete identity file: {e}"))
            })?;
        }

        Ok(())
    }
}
