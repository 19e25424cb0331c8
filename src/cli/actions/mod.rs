pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod mail;

mod render;
mod run;

use crate::{
    client::{AppError, Route},
    features::{
        auth::{require_admin, require_auth, Access, AuthContext},
        notice::Notice,
    },
};
use anyhow::{anyhow, Result};

const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";
const NOT_SIGNED_IN: &str = "Not signed in. Run `webmail login` first.";

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Mail(mail::Args),
    Dashboard(dashboard::Args),
    Admin(admin::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Applies the route guard for a command.
fn authorize(auth: &AuthContext, admin: bool) -> Result<()> {
    let state = auth.state();
    let access = if admin {
        require_admin(&state)
    } else {
        require_auth(&state)
    };
    match access {
        Access::Allow => Ok(()),
        Access::Loading | Access::Redirect(Route::Landing) => Err(anyhow!(NOT_SIGNED_IN)),
        Access::Redirect(Route::Dashboard) => Err(anyhow!("Admin role required.")),
    }
}

/// Fails when a request answered 401 and the session was torn down.
fn ensure_session(auth: &AuthContext) -> Result<()> {
    if auth.session().take_redirect() == Some(Route::Landing) {
        Err(anyhow!(SESSION_EXPIRED))
    } else {
        Ok(())
    }
}

/// The error to fail with after a request error; a torn-down session wins
/// over the request's own message.
fn failure(auth: &AuthContext, message: String) -> anyhow::Error {
    match ensure_session(auth) {
        Err(err) => err,
        Ok(()) => anyhow!(message),
    }
}

fn request_failed(auth: &AuthContext, err: &AppError, default: &str) -> anyhow::Error {
    failure(auth, err.user_message(default))
}

/// The error for a rejected sign-in. A 401 from the sign-in endpoint also
/// drops any stale stored session, but the backend's own message is what the
/// user needs to see.
fn sign_in_failed(auth: &AuthContext, err: &AppError, default: &str) -> anyhow::Error {
    let _ = auth.session().take_redirect();
    anyhow!(err.user_message(default))
}

/// Prints a notice on stdout, or turns an error notice into the command's
/// error.
fn emit(auth: &AuthContext, notice: Notice) -> Result<()> {
    if notice.is_error() {
        return Err(failure(auth, notice.message));
    }
    println!("{notice}");
    Ok(())
}
