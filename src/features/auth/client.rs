//! Client wrappers for the auth endpoints. Sign-in and registration persist
//! the returned token and user; logout clears them without a network call.
//! Errors propagate unchanged from the HTTP client.

use crate::{
    client::{ApiClient, AppError, Endpoint},
    features::auth::types::{
        Ack, AuthResponse, Credentials, OtpRequest, Registration, ResetPasswordRequest, User,
    },
};
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Persists the session carried by an auth response, if it has a token.
fn persist(api: &ApiClient, response: &AuthResponse) -> Result<(), AppError> {
    if let Some(token) = response.token.as_deref().filter(|t| !t.trim().is_empty()) {
        api.session()
            .establish(SecretString::from(token.to_string()), response.user.clone())?;
        debug!("session persisted");
    }
    Ok(())
}

/// Registers a new account.
///
/// # Errors
/// Propagates request and storage errors.
#[instrument(skip_all, fields(email = %registration.email))]
pub async fn register(api: &ApiClient, registration: &Registration) -> Result<AuthResponse, AppError> {
    let response: AuthResponse = api.send_json(Endpoint::Register, registration).await?;
    persist(api, &response)?;
    Ok(response)
}

/// Signs in and persists the token and user on success.
///
/// # Errors
/// Propagates request and storage errors; a 401 here leaves storage alone
/// unless a previous token was attached.
#[instrument(skip_all, fields(email = %credentials.email))]
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<AuthResponse, AppError> {
    let response: AuthResponse = api.send_json(Endpoint::SignIn, credentials).await?;
    persist(api, &response)?;
    Ok(response)
}

/// Clears the persisted session unconditionally.
///
/// # Errors
/// Returns `AppError::Storage` if the session file cannot be removed.
pub fn logout(api: &ApiClient) -> Result<(), AppError> {
    api.session().clear()
}

/// Asks the backend to email a one-time password for a reset.
///
/// # Errors
/// Propagates request errors.
#[instrument(skip(api))]
pub async fn request_otp(api: &ApiClient, email: &str) -> Result<Ack, AppError> {
    let request = OtpRequest {
        email: email.trim().to_string(),
    };
    api.send_json(Endpoint::RequestOtp, &request).await
}

/// Resets the password with the OTP received by email.
///
/// # Errors
/// Propagates request errors.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn reset_password(api: &ApiClient, request: &ResetPasswordRequest) -> Result<Ack, AppError> {
    api.send_json(Endpoint::ResetPassword, request).await
}

/// User from persisted storage.
///
/// # Errors
/// Returns `AppError::Storage` when storage cannot be read.
pub fn current_user(api: &ApiClient) -> Result<Option<User>, AppError> {
    Ok(api.session().persisted()?.and_then(|session| session.user))
}

/// Whether a token is persisted.
///
/// # Errors
/// Returns `AppError::Storage` when storage cannot be read.
pub fn token_present(api: &ApiClient) -> Result<bool, AppError> {
    Ok(api.session().token()?.is_some())
}
