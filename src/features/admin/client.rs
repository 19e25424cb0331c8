//! Client helpers for admin endpoints. The backend rejects these calls for
//! non-admin tokens; the client does not pre-check the role.

use crate::{
    client::{ApiClient, AppError, Endpoint},
    features::{
        admin::types::{ToggleResponse, UserList, UserMailbox},
        auth::types::Ack,
    },
};
use tracing::instrument;

fn require_id(id: &str) -> Result<String, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation("User id is required.".to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// # Errors
/// Propagates request errors.
#[instrument(skip(api))]
pub async fn list_users(api: &ApiClient) -> Result<UserList, AppError> {
    api.send(Endpoint::AdminUsers).await
}

/// Flips a user's active flag on the backend.
///
/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn toggle_active(api: &ApiClient, id: &str) -> Result<ToggleResponse, AppError> {
    api.send(Endpoint::AdminToggleUser(require_id(id)?)).await
}

/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn user_mail(api: &ApiClient, id: &str) -> Result<UserMailbox, AppError> {
    api.send(Endpoint::AdminUserMail(require_id(id)?)).await
}

/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn delete_user(api: &ApiClient, id: &str) -> Result<Ack, AppError> {
    api.send(Endpoint::AdminDeleteUser(require_id(id)?)).await
}
