mod common;

use anyhow::Result;
use common::can_bind_localhost;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::sync::Arc;
use webmail::{
    client::{config::Overrides, ApiClient, AppConfig, FileStorage, SessionHandle},
    features::auth::{
        client, forms::ResetPasswordForm, require_admin, require_auth, types::Credentials, Access,
        AuthContext,
    },
};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn context(server: &MockServer, state_dir: &std::path::Path) -> AuthContext {
    let config = AppConfig::load(Overrides {
        api_base_url: Some(format!("{}/api", server.uri())),
        state_dir: Some(state_dir.display().to_string()),
        timeout: None,
    })
    .expect("valid config");
    let storage = FileStorage::new(config.session_file());
    let api = ApiClient::new(&config, SessionHandle::new(Arc::new(storage))).expect("client");
    AuthContext::provide(api)
}

fn credentials(password: &str) -> Credentials {
    Credentials::new("alice@example.com", SecretString::from(password.to_string()))
}

#[tokio::test]
async fn login_persists_session_across_contexts() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = tempfile::tempdir()?;

    Mock::given(method("POST"))
        .and(path("/api/users/signin"))
        .and(body_json(json!({"email": "alice@example.com", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {"_id": "u1", "name": "Alice", "email": "alice@example.com", "role": "admin"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = context(&server, dir.path());
    assert_eq!(require_auth(&auth.state()), Access::Redirect(webmail::client::Route::Landing));

    auth.login(&credentials("secret1")).await?;
    assert!(auth.is_authenticated());
    assert_eq!(auth.user().map(|user| user.name), Some("Alice".to_string()));

    // A fresh process sees the same session.
    let restarted = context(&server, dir.path());
    let state = restarted.state();
    assert!(!state.loading);
    assert!(state.is_authenticated);
    assert_eq!(require_admin(&state), Access::Allow);
    let token = restarted.session().token()?.map(|t| t.expose_secret().to_string());
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert!(client::token_present(restarted.api())?);
    assert_eq!(
        client::current_user(restarted.api())?.map(|user| user.id),
        Some("u1".to_string())
    );

    restarted.logout()?;
    assert!(!restarted.is_authenticated());
    assert!(context(&server, dir.path()).user().is_none());
    assert!(!client::token_present(restarted.api())?);
    Ok(())
}

#[tokio::test]
async fn rejected_login_leaves_state_unchanged() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = tempfile::tempdir()?;

    Mock::given(method("POST"))
        .and(path("/api/users/signin"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let auth = context(&server, dir.path());
    let err = auth.login(&credentials("wrong")).await.unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert!(!auth.is_authenticated());
    assert!(auth.session().persisted()?.is_none());
    Ok(())
}

#[tokio::test]
async fn login_without_token_is_an_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = tempfile::tempdir()?;

    Mock::given(method("POST"))
        .and(path("/api/users/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let auth = context(&server, dir.path());
    assert!(auth.login(&credentials("secret1")).await.is_err());
    assert!(!auth.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn register_without_token_stays_signed_out() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = tempfile::tempdir()?;

    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret1"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "User registered"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let auth = context(&server, dir.path());
    let registration = webmail::features::auth::forms::RegisterForm {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: SecretString::from("secret1".to_string()),
        confirm_password: SecretString::from("secret1".to_string()),
    }
    .validate()?;

    let response = auth.register(&registration).await?;
    assert_eq!(response.message.as_deref(), Some("User registered"));
    assert!(!auth.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn password_reset_flow() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = tempfile::tempdir()?;

    Mock::given(method("POST"))
        .and(path("/api/users/otp"))
        .and(body_json(json!({"email": "alice@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "OTP sent"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/users/reset-password"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "otp": "123456",
            "newPassword": "secret2"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let auth = context(&server, dir.path());
    let ack = client::request_otp(auth.api(), "alice@example.com").await?;
    assert_eq!(ack.message.as_deref(), Some("OTP sent"));

    let request = ResetPasswordForm {
        email: "alice@example.com".to_string(),
        otp: "123456".to_string(),
        new_password: SecretString::from("secret2".to_string()),
        confirm_password: SecretString::from("secret2".to_string()),
    }
    .validate()?;
    let ack = client::reset_password(auth.api(), &request).await?;
    assert_eq!(ack.message, None);
    Ok(())
}
