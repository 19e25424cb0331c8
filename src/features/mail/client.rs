//! Client helpers for mail endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces ownership of each mail.

use crate::{
    client::{ApiClient, AppError, Endpoint},
    features::{
        auth::types::Ack,
        mail::types::{ComposeRequest, Folder, Mail, MailList},
    },
};
use serde_json::Value;
use tracing::instrument;

/// Rejects blank ids before they become malformed paths.
fn require_id(id: &str) -> Result<String, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation("Mail id is required.".to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Fetches one folder.
///
/// # Errors
/// Propagates request errors.
#[instrument(skip(api))]
pub async fn folder(api: &ApiClient, folder: Folder) -> Result<MailList, AppError> {
    let endpoint = match folder {
        Folder::Inbox => Endpoint::Inbox,
        Folder::Sent => Endpoint::Sent,
        Folder::Drafts => Endpoint::Drafts,
    };
    api.send(endpoint).await
}

/// # Errors
/// Propagates request errors.
pub async fn inbox(api: &ApiClient) -> Result<MailList, AppError> {
    folder(api, Folder::Inbox).await
}

/// # Errors
/// Propagates request errors.
pub async fn sent(api: &ApiClient) -> Result<MailList, AppError> {
    folder(api, Folder::Sent).await
}

/// # Errors
/// Propagates request errors.
pub async fn drafts(api: &ApiClient) -> Result<MailList, AppError> {
    folder(api, Folder::Drafts).await
}

/// Fetches a single mail with its full body.
///
/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn get(api: &ApiClient, id: &str) -> Result<Mail, AppError> {
    api.send(Endpoint::MailGet(require_id(id)?)).await
}

/// Sends a mail or saves a draft, depending on `request.is_draft`.
///
/// # Errors
/// Propagates request errors.
#[instrument(skip_all, fields(is_draft = request.is_draft))]
pub async fn compose(api: &ApiClient, request: &ComposeRequest) -> Result<Value, AppError> {
    api.send_json(Endpoint::Compose, request).await
}

/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn delete(api: &ApiClient, id: &str) -> Result<Ack, AppError> {
    api.send(Endpoint::MailDelete(require_id(id)?)).await
}

/// # Errors
/// Returns `AppError::Validation` for a blank id and propagates request errors.
#[instrument(skip(api))]
pub async fn mark_as_read(api: &ApiClient, id: &str) -> Result<Ack, AppError> {
    api.send(Endpoint::MailRead(require_id(id)?)).await
}

/// Full-text search over the user's mail. Callers skip blank queries.
///
/// # Errors
/// Propagates request errors.
#[instrument(skip(api))]
pub async fn search(api: &ApiClient, query: &str) -> Result<MailList, AppError> {
    api.send(Endpoint::MailSearch(query.trim().to_string())).await
}
