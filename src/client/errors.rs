//! Error taxonomy for the API access layer and the message normalization
//! applied to backend error bodies.

use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

pub const GENERIC_SERVER_MESSAGE: &str = "Server error. Please try again later.";
pub const GENERIC_NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection.";

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Unauthorized: {}", message.as_deref().unwrap_or("authentication required"))]
    Unauthorized { message: Option<String> },
    #[error("Request failed ({status}): {}", message.as_deref().unwrap_or("no details"))]
    Http {
        status: u16,
        message: Option<String>,
        body: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Builds the error for a non-2xx response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = normalize_message(body);
        if status == 401 {
            return Self::Unauthorized { message };
        }
        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body.to_string())
        };
        Self::Http {
            status,
            message,
            body,
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 400 && *status < 500)
    }

    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 500)
    }

    /// Text to show the user. Prefers the backend's normalized message and
    /// falls back to a generic message for the error class, then `default`.
    #[must_use]
    pub fn user_message(&self, default: &str) -> String {
        if let Some(message) = message_of(self) {
            return message.to_string();
        }
        match self {
            Self::Http { .. } if self.is_server_error() => GENERIC_SERVER_MESSAGE.to_string(),
            Self::Network(_) | Self::Timeout(_) => GENERIC_NETWORK_MESSAGE.to_string(),
            Self::Validation(message) => message.clone(),
            _ => default.to_string(),
        }
    }
}

fn message_of(error: &AppError) -> Option<&str> {
    match error {
        AppError::Unauthorized { message } | AppError::Http { message, .. } => message.as_deref(),
        _ => None,
    }
}

/// Extracts a human-readable message from an error body: the `message` field
/// of a JSON object, else its `error` field, else a JSON string, else the raw
/// text. The result is trimmed and truncated.
#[must_use]
pub fn normalize_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let extracted = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.trim().is_empty())
                    .map(str::to_string)
            }),
        Ok(Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    };

    extracted
        .map(|message| message.trim().chars().take(MAX_ERROR_CHARS).collect::<String>())
        .filter(|message| !message.is_empty())
}
