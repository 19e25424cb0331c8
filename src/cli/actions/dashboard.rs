use crate::{
    cli::{
        actions::{authorize, emit, ensure_session, render},
        globals::GlobalArgs,
    },
    features::{mail::Dashboard, notice::Notice},
};
use anyhow::Result;

/// Change applied before the overview is shown; the dashboard is re-fetched
/// afterwards.
#[derive(Debug, PartialEq, Eq)]
pub enum Change {
    MarkRead(String),
    Delete(String),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub change: Option<Change>,
}

/// Handle the dashboard command
/// # Errors
/// Returns an error if the user is signed out or the requested change fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = args.globals.context()?;
    authorize(&auth, false)?;

    let mut dashboard = Dashboard::load(auth.api()).await;
    ensure_session(&auth)?;

    match args.change {
        Some(Change::MarkRead(id)) => emit(&auth, dashboard.mark_as_read(auth.api(), &id).await)?,
        Some(Change::Delete(id)) => emit(&auth, dashboard.delete(auth.api(), &id).await)?,
        None => {}
    }

    if let Some(user) = auth.user() {
        println!("Welcome back, {}", user.name);
    }
    for folder in dashboard.failed() {
        eprintln!("{}", Notice::error(format!("Failed to load {folder}")));
    }

    render::dashboard_stats(&dashboard.stats());

    println!();
    println!("Recent Emails");
    if dashboard.recent().is_empty() {
        println!("No emails yet");
    }
    for mail in dashboard.recent() {
        println!("{}", render::recent_line(mail));
    }

    Ok(())
}
