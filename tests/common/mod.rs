#![allow(dead_code)]

use secrecy::SecretString;
use std::{net::TcpListener, sync::Arc};
use webmail::{
    client::{config::Overrides, ApiClient, AppConfig, MemoryStorage, SessionHandle, StoredSession},
    features::auth::types::{Role, User},
};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role,
        active: true,
        created_at: None,
    }
}

pub fn signed_in_storage(role: Role) -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::with_session(StoredSession::new(
        SecretString::from(TOKEN.to_string()),
        Some(user("me", role)),
    )))
}

/// Client pointed at `<mock>/api`, sharing `storage` with the caller.
pub fn client(server: &MockServer, storage: Arc<MemoryStorage>) -> ApiClient {
    let config = AppConfig::load(Overrides {
        api_base_url: Some(format!("{}/api", server.uri())),
        state_dir: None,
        timeout: None,
    })
    .expect("valid config");
    let session = SessionHandle::new(storage);
    ApiClient::new(&config, session).expect("http client")
}
