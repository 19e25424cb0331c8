//! HTTP client wrapper for the JSON REST backend. Every outbound request goes
//! through [`ApiClient::request`], which attaches the bearer token from
//! persisted storage, applies the timeout, normalizes error bodies, and tears
//! the session down on `401 Unauthorized`. The client never logs tokens or
//! request bodies.

use super::{
    config::AppConfig, endpoints::Endpoint, errors::AppError, session::SessionHandle,
};
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info_span, warn, Instrument};
use url::Url;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionHandle,
}

impl ApiClient {
    /// Builds the client from configuration and a shared session handle.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &AppConfig, session: SessionHandle) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|err| {
            AppError::Config(format!(
                "Invalid API base URL {}: {err}",
                config.api_base_url
            ))
        })?;
        let http = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a bodyless request (GET, PATCH, DELETE) and decodes the payload.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, AppError> {
        self.request::<(), T>(endpoint, None).await
    }

    /// Sends a JSON body and decodes the payload.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(endpoint, Some(body)).await
    }

    /// Issues the request for `endpoint` with an optional JSON body.
    ///
    /// # Errors
    /// - `AppError::Unauthorized` on 401; the session is invalidated if a
    ///   token was attached.
    /// - `AppError::Http` on any other non-2xx status.
    /// - `AppError::Network` / `AppError::Timeout` on transport failures.
    /// - `AppError::Parse` if a 2xx body does not match `T`.
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let method = endpoint.method();
        let url = endpoint.url(&self.base_url);
        let token = self.session.token()?;

        let mut builder = self.http.request(method.clone(), url);
        if let Some(token) = &token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let span = info_span!(
            "api.request",
            http.method = %method,
            path = %endpoint.path(),
            authenticated = token.is_some()
        );

        let response = builder
            .send()
            .instrument(span.clone())
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        let text = response.text().instrument(span).await.map_err(map_request_error)?;
        debug!(%method, path = %endpoint.path(), status = status.as_u16(), "response received");

        if status.is_success() {
            return decode_body(&text);
        }

        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            warn!(path = %endpoint.path(), "token rejected, clearing session");
            self.session.invalidate();
        }

        Err(AppError::from_response(status.as_u16(), &text))
    }
}

/// Decodes a 2xx body. An empty body decodes as JSON `null`, or as an empty
/// object for types that do not accept `null`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    let parse_error = |err: serde_json::Error| AppError::Parse(format!("Failed to decode response: {err}"));

    if text.trim().is_empty() {
        return serde_json::from_value(Value::Null)
            .or_else(|_| serde_json::from_value(Value::Object(Map::new())))
            .map_err(parse_error);
    }
    serde_json::from_str(text).map_err(parse_error)
}

/// Maps transport errors into `AppError` with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ack {
        #[serde(default)]
        message: Option<String>,
    }

    #[test]
    fn decode_body_handles_empty_payloads() {
        decode_body::<()>("").unwrap();
        let value: Value = decode_body("  ").unwrap();
        assert_eq!(value, Value::Null);
        let ack: Option<Ack> = decode_body("").unwrap();
        assert_eq!(ack, None);
        let ack: Ack = decode_body("").unwrap();
        assert_eq!(ack.message, None);
    }

    #[test]
    fn decode_body_reports_parse_errors() {
        let result: Result<Ack, _> = decode_body("<html>");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn decode_body_parses_objects() {
        let ack: Ack = decode_body(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("ok"));
    }
}
