//! Process-wide session state shared by the HTTP client and every view.
//!
//! A [`SessionHandle`] is cheap to clone; all clones observe the same state.
//! It is mutated in two places only: the auth context (hydrate, login,
//! register, logout) and the HTTP client's 401 handler, which is the sole
//! cross-view mutation path.

use super::{
    errors::AppError,
    storage::{SessionStorage, StoredSession},
};
use crate::features::auth::types::{Role, User};
use secrecy::SecretString;
use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::{debug, info};

/// Navigation targets the session can force.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated landing view.
    Landing,
    Dashboard,
}

#[derive(Clone)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<SecretString>,
    pub is_authenticated: bool,
    /// True until the initial check against persisted storage completes.
    pub loading: bool,
    /// Navigation forced by session invalidation, consumed by the front-end.
    pub redirect: Option<Route>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            loading: true,
            redirect: None,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("is_authenticated", &self.is_authenticated)
            .field("loading", &self.loading)
            .field("redirect", &self.redirect)
            .finish()
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    storage: Arc<dyn SessionStorage>,
    state: Arc<RwLock<SessionState>>,
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("storage", &self.storage)
            .field("state", &self.snapshot())
            .finish()
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
    }

    /// Token read from persisted storage, the source of the bearer header.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when storage cannot be read.
    pub fn token(&self) -> Result<Option<SecretString>, AppError> {
        self.storage.token()
    }

    /// Session as persisted, independent of the in-memory state.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when storage cannot be read.
    pub fn persisted(&self) -> Result<Option<StoredSession>, AppError> {
        self.storage.load()
    }

    /// Loads the persisted session into memory and ends the loading phase.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when storage cannot be read; the state is
    /// still marked as loaded and unauthenticated.
    pub fn hydrate(&self) -> Result<(), AppError> {
        let stored = self.storage.load();
        self.update(|state| {
            state.loading = false;
            match &stored {
                Ok(Some(session)) => {
                    state.user.clone_from(&session.user);
                    state.token = Some(session.token.clone());
                    state.is_authenticated = true;
                }
                _ => {
                    state.user = None;
                    state.token = None;
                    state.is_authenticated = false;
                }
            }
        });
        debug!("session hydrated");
        stored.map(|_| ())
    }

    /// Persists and activates a freshly issued session.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when the session cannot be persisted.
    pub fn establish(&self, token: SecretString, user: Option<User>) -> Result<(), AppError> {
        self.storage
            .save(&StoredSession::new(token.clone(), user.clone()))?;
        self.update(|state| {
            state.user = user;
            state.token = Some(token);
            state.is_authenticated = true;
            state.loading = false;
            state.redirect = None;
        });
        Ok(())
    }

    /// Clears storage and memory, regardless of prior state.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when storage cannot be cleared; memory is
    /// cleared either way.
    pub fn clear(&self) -> Result<(), AppError> {
        let result = self.storage.clear();
        self.update(|state| {
            state.user = None;
            state.token = None;
            state.is_authenticated = false;
            state.loading = false;
        });
        result
    }

    /// Session teardown after the backend rejected the token: clears
    /// everything and forces navigation to the landing route.
    pub fn invalidate(&self) {
        if let Err(err) = self.clear() {
            tracing::error!("failed to clear session after 401: {err}");
        }
        self.update(|state| state.redirect = Some(Route::Landing));
        info!("session invalidated, redirecting to landing");
    }

    /// Takes the pending navigation target, if any.
    #[must_use]
    pub fn take_redirect(&self) -> Option<Route> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.redirect.take()
    }
}
