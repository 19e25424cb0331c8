use crate::{
    cli::commands::{ARG_API_URL, ARG_STATE_DIR},
    client::{config::Overrides, ApiClient, AppConfig, FileStorage, SessionHandle},
    features::auth::AuthContext,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

/// Arguments shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_url: Option<String>,
    pub state_dir: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            api_url: matches.get_one::<String>(ARG_API_URL).cloned(),
            state_dir: matches.get_one::<String>(ARG_STATE_DIR).cloned(),
        }
    }

    /// Resolved client configuration.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn config(&self) -> Result<AppConfig> {
        AppConfig::load(Overrides {
            api_base_url: self.api_url.clone(),
            state_dir: self.state_dir.clone(),
            timeout: None,
        })
        .context("invalid configuration")
    }

    /// Builds the API client over the file-backed session and runs the
    /// initial session check.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn context(&self) -> Result<AuthContext> {
        let config = self.config()?;
        debug!(
            api = %config.api_base_url,
            state_dir = %config.state_dir.display(),
            "client configured"
        );

        let storage = FileStorage::new(config.session_file());
        let session = SessionHandle::new(Arc::new(storage));
        let api = ApiClient::new(&config, session).context("failed to build HTTP client")?;

        Ok(AuthContext::provide(api))
    }
}
