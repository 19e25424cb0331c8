//! Auth session context shared by all views. The context hydrates once from
//! persisted storage and exposes the derived auth state to guards and
//! commands. It wraps the shared [`SessionHandle`]; the HTTP client's 401
//! handler mutates the same state.

use crate::{
    client::{ApiClient, AppError, SessionHandle, SessionState},
    features::auth::{
        client,
        types::{AuthResponse, Credentials, Registration, User},
    },
};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct AuthContext {
    api: ApiClient,
}

impl AuthContext {
    /// Builds a context around the client's session without hydrating it.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Builds the context and runs the initial check against storage.
    /// A storage failure is logged and leaves the session signed out.
    #[must_use]
    pub fn provide(api: ApiClient) -> Self {
        let auth = Self::new(api);
        if let Err(err) = auth.hydrate() {
            warn!("failed to hydrate session: {err}");
        }
        auth
    }

    /// Reads token and user from persisted storage and ends the loading phase.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when storage cannot be read.
    pub fn hydrate(&self) -> Result<(), AppError> {
        self.session().hydrate()
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        self.api.session()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session().snapshot()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state().user
    }

    /// Signs in; on success the state carries the returned user.
    ///
    /// # Errors
    /// Propagates the service error; the state is left as it was.
    /// Returns `AppError::Parse` if the backend accepted the credentials but
    /// issued no token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AppError> {
        let response = client::login(&self.api, credentials).await?;
        if response.token.is_none() {
            return Err(AppError::Parse(
                "Sign-in response did not include a token".to_string(),
            ));
        }
        info!("signed in");
        Ok(response)
    }

    /// Registers; when the backend issues a token the user is signed in.
    ///
    /// # Errors
    /// Propagates the service error; the state is left as it was.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, AppError> {
        let response = client::register(&self.api, registration).await?;
        if response.token.is_some() {
            info!("registered and signed in");
        } else {
            info!("registered");
        }
        Ok(response)
    }

    /// Signs out regardless of prior state.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if storage cannot be cleared; the in-memory
    /// state is cleared either way.
    pub fn logout(&self) -> Result<(), AppError> {
        client::logout(&self.api)?;
        info!("signed out");
        Ok(())
    }
}
