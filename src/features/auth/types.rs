//! Request and response types for auth calls. Passwords and tokens are kept in
//! `SecretString` and only exposed when the wire payload is built; these types
//! must never be logged with their secrets.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

const fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isActive", default = "default_active")]
    pub active: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct OtpRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword", serialize_with = "expose")]
    pub new_password: SecretString,
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("email", &self.email)
            .field("otp", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

/// Payload returned by sign-in and registration.
#[derive(Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user", &self.user)
            .field("message", &self.message)
            .finish()
    }
}

/// Generic acknowledgement body (`{"message": "..."}`), tolerant of empty
/// responses.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_uses_backend_field_names() {
        let user: User = serde_json::from_value(json!({
            "_id": "64f0",
            "name": "Alice",
            "email": "alice@example.com",
            "role": "admin",
            "isActive": false,
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.id, "64f0");
        assert_eq!(user.role, Role::Admin);
        assert!(!user.active);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn user_defaults_missing_fields() {
        let user: User =
            serde_json::from_value(json!({"id": "1", "email": "bob@example.com"})).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.active);
        assert_eq!(user.name, "");
    }

    #[test]
    fn credentials_serialize_password_but_hide_it_in_debug() {
        let credentials = Credentials::new(" alice@example.com ", SecretString::from("hunter22"));
        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            value,
            json!({"email": "alice@example.com", "password": "hunter22"})
        );
        assert!(!format!("{credentials:?}").contains("hunter22"));
    }

    #[test]
    fn reset_request_uses_camel_case() {
        let request = ResetPasswordRequest {
            email: "a@example.com".to_string(),
            otp: "123456".to_string(),
            new_password: SecretString::from("newpass"),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"email": "a@example.com", "otp": "123456", "newPassword": "newpass"})
        );
    }
}
