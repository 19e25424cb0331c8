use crate::cli::actions::{admin, auth, dashboard, mail, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Auth(args) => auth::execute(args).await,
        Action::Mail(args) => mail::execute(args).await,
        Action::Dashboard(args) => dashboard::execute(args).await,
        Action::Admin(args) => admin::execute(args).await,
    }
}
