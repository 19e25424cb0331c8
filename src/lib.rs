//! # Webmail client
//!
//! `webmail` is the client side of a small webmail service: login and
//! registration, inbox/sent/drafts folders, a compose flow, and an
//! administrator panel for user management. The backend is a REST API; this
//! crate owns no mail storage of its own.
//!
//! ## Layers
//!
//! - [`client`] is the API access layer. A single [`client::ApiClient`]
//!   attaches the bearer token from persisted storage to every request,
//!   normalizes error bodies, and tears the session down when the backend
//!   answers `401 Unauthorized`.
//! - [`features`] holds one module per domain (auth, mail, admin). Each has a
//!   thin service client (one function per backend operation) and the view
//!   state that consumes it (folder lists, dashboard, admin panel).
//! - [`cli`] is the terminal front-end. Each screen of the web UI maps to a
//!   subcommand that renders the same state.
//!
//! ## Session lifecycle
//!
//! 1. **Hydrate:** on startup the token and user are read from
//!    `session.json` in the state directory.
//! 2. **Login / register:** a successful call persists the returned token and
//!    user.
//! 3. **Logout:** clears storage unconditionally.
//! 4. **401:** any request answered with `401` while a token is present clears
//!    storage and sets the navigation target to the landing route.
//!
//! Tokens and passwords are held in `secrecy` wrappers and are never logged.

pub mod cli;
pub mod client;
pub mod features;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
