//! Client configuration: backend base URL, state directory, and request
//! timeout. Values come from the command line or the environment
//! (`WEBMAIL_API_URL`, `WEBMAIL_STATE_DIR`); blank overrides fall back to the
//! defaults. Configuration values are public; do not store secrets here.

use super::errors::AppError;
use std::{path::PathBuf, time::Duration};
use url::Url;

/// Backend base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Directory name under the platform config dir.
const STATE_DIR_NAME: &str = "webmail";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub state_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            state_dir: default_state_dir(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Optional overrides, typically parsed from CLI arguments or env variables.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub state_dir: Option<String>,
    pub timeout: Option<Duration>,
}

impl AppConfig {
    /// Builds a config from the defaults and applies any non-blank overrides.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the resulting base URL is not an
    /// absolute http(s) URL.
    pub fn load(overrides: Overrides) -> Result<Self, AppError> {
        let mut config = Self::default();
        apply_overrides(&mut config, overrides);
        validate_base_url(&config.api_base_url)?;
        Ok(config)
    }

    /// Path of the persisted session file.
    #[must_use]
    pub fn session_file(&self) -> PathBuf {
        self.state_dir.join("session.json")
    }
}

fn apply_overrides(config: &mut AppConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url.as_deref().and_then(normalize_value) {
        config.api_base_url = value.trim_end_matches('/').to_string();
    }
    if let Some(value) = overrides.state_dir.as_deref().and_then(normalize_value) {
        config.state_dir = PathBuf::from(value);
    }
    if let Some(timeout) = overrides.timeout.filter(|t| !t.is_zero()) {
        config.timeout = timeout;
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_base_url(value: &str) -> Result<(), AppError> {
    let url = Url::parse(value)
        .map_err(|err| AppError::Config(format!("Invalid API base URL {value}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::Config(format!(
            "Invalid API base URL {value}: unsupported scheme {scheme}"
        ))),
    }
}

fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STATE_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://mail.example.com/api "),
            Some("https://mail.example.com/api".to_string())
        );
    }

    #[test]
    fn load_uses_default_base_url() {
        let config = AppConfig::load(Overrides::default()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.state_dir.ends_with("webmail"));
    }

    #[test]
    fn apply_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            state_dir: PathBuf::from("/tmp/default"),
            timeout: DEFAULT_TIMEOUT,
        };
        apply_overrides(
            &mut config,
            Overrides {
                api_base_url: Some("  ".to_string()),
                state_dir: Some(String::new()),
                timeout: Some(Duration::ZERO),
            },
        );

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/default"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn apply_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        apply_overrides(
            &mut config,
            Overrides {
                api_base_url: Some("https://mail.example.com/api/".to_string()),
                state_dir: Some("/var/lib/webmail".to_string()),
                timeout: Some(Duration::from_secs(3)),
            },
        );

        assert_eq!(config.api_base_url, "https://mail.example.com/api");
        assert_eq!(config.state_dir, PathBuf::from("/var/lib/webmail"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.session_file(),
            PathBuf::from("/var/lib/webmail/session.json")
        );
    }

    #[test]
    fn load_rejects_unsupported_scheme() {
        let result = AppConfig::load(Overrides {
            api_base_url: Some("ftp://mail.example.com".to_string()),
            ..Overrides::default()
        });
        assert!(matches!(result, Err(AppError::Config(message)) if message.contains("unsupported scheme")));
    }
}
