//! API access layer shared by every feature: configuration, the endpoint
//! registry, persisted session storage, the session handle, and the HTTP
//! client wrapper.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in the views. Callers must still avoid logging
//! tokens or passwords.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use config::AppConfig;
pub use endpoints::Endpoint;
pub use errors::AppError;
pub use session::{Route, SessionHandle, SessionState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StoredSession};
