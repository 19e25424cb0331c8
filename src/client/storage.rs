//! # Persisted session storage
//!
//! The bearer token and the signed-in user outlive a single process. They are
//! kept behind the [`SessionStorage`] trait so the HTTP client and the auth
//! context never care where the bytes live.
//!
//! - [`FileStorage`] writes `session.json` under the state directory and is
//!   what the CLI uses.
//! - [`MemoryStorage`] keeps everything in process and backs the tests.
//!
//! ## Layout
//!
//! ```text
//! <state_dir>/
//! └── session.json       # {"token": "...", "user": {...}}
//! ```

use super::errors::AppError;
use crate::features::auth::types::User;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};
use tracing::{debug, warn};

/// Token and user as persisted between runs.
#[derive(Clone)]
pub struct StoredSession {
    pub token: SecretString,
    pub user: Option<User>,
}

impl StoredSession {
    #[must_use]
    pub fn new(token: SecretString, user: Option<User>) -> Self {
        Self { token, user }
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &"***")
            .field("user", &self.user)
            .finish()
    }
}

/// Client-local persistent storage for the session.
pub trait SessionStorage: Send + Sync + fmt::Debug {
    /// Reads the persisted session, `None` when nobody is signed in.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when the backing store cannot be read.
    fn load(&self) -> Result<Option<StoredSession>, AppError>;

    /// Persists token and user, replacing any previous session.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when the backing store cannot be written.
    fn save(&self, session: &StoredSession) -> Result<(), AppError>;

    /// Removes token and user. Clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when the backing store cannot be modified.
    fn clear(&self) -> Result<(), AppError>;

    /// Convenience accessor for the persisted token.
    ///
    /// # Errors
    /// Propagates errors from [`SessionStorage::load`].
    fn token(&self) -> Result<Option<SecretString>, AppError> {
        Ok(self.load()?.map(|session| session.token))
    }
}

#[derive(Serialize, Deserialize)]
struct SessionFile {
    token: String,
    #[serde(default)]
    user: Option<User>,
}

/// Filesystem-backed storage writing a single JSON file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> AppError {
    AppError::Storage(format!("Failed to {action} {}: {err}", path.display()))
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<StoredSession>, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(storage_error("read", &self.path, err)),
        };

        match serde_json::from_str::<SessionFile>(&contents) {
            Ok(file) if !file.token.trim().is_empty() => Ok(Some(StoredSession {
                token: SecretString::from(file.token),
                user: file.user,
            })),
            Ok(_) => Ok(None),
            Err(err) => {
                // A corrupt file is treated as a signed-out session.
                warn!("ignoring unreadable session file {}: {err}", self.path.display());
                Ok(None)
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| storage_error("create", parent, err))?;
        }

        let file = SessionFile {
            token: session.token.expose_secret().to_string(),
            user: session.user.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)
            .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|err| storage_error("write", &tmp, err))?;
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path).map_err(|err| storage_error("replace", &self.path, err))?;

        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("session file {} removed", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", &self.path, err)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|err| storage_error("set permissions on", path, err))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

/// In-memory storage used by tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<Option<StoredSession>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<StoredSession>, AppError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), AppError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::Role;

    fn alice() -> User {
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::User,
            active: true,
            created_at: None,
        }
    }

    #[test]
    fn file_storage_round_trips_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("session.json"));

        assert!(storage.load().unwrap().is_none());

        storage
            .save(&StoredSession::new(
                SecretString::from("tok-123"),
                Some(alice()),
            ))
            .unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.token.expose_secret(), "tok-123");
        assert_eq!(loaded.user, Some(alice()));
        assert_eq!(
            storage.token().unwrap().map(|t| t.expose_secret().to_string()),
            Some("tok-123".to_string())
        );
    }

    #[test]
    fn file_storage_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        storage.clear().unwrap();
        storage
            .save(&StoredSession::new(SecretString::from("tok"), None))
            .unwrap();
        storage.clear().unwrap();
        storage.clear().unwrap();

        assert!(storage.load().unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_storage_treats_corrupt_file_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(path);
        assert!(storage.load().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn file_storage_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage
            .save(&StoredSession::new(SecretString::from("tok"), None))
            .unwrap();

        let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn memory_storage_save_and_clear() {
        let storage = MemoryStorage::new();
        storage
            .save(&StoredSession::new(SecretString::from("tok"), Some(alice())))
            .unwrap();
        assert!(storage.token().unwrap().is_some());

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn stored_session_debug_redacts_token() {
        let session = StoredSession::new(SecretString::from("super-secret"), None);
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }
}
