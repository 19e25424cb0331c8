use crate::{
    cli::{
        actions::{authorize, emit, render},
        globals::GlobalArgs,
    },
    features::admin::AdminPanel,
};
use anyhow::Result;

#[derive(Debug)]
pub enum Command {
    Users,
    Toggle { id: String },
    Mail { id: String },
    Delete { id: String },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Handle the admin commands
/// # Errors
/// Returns an error if the user is not an admin or the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = args.globals.context()?;
    authorize(&auth, true)?;
    let api = auth.api();

    let mut panel = AdminPanel::new();
    if let Some(notice) = panel.load(api).await {
        return emit(&auth, notice);
    }

    match args.command {
        Command::Users => {
            render::admin_stats(&panel.stats());
            for row in panel.rows() {
                println!("{}", render::user_line(row));
            }
        }

        Command::Toggle { id } => {
            let notice = panel.toggle_active(api, &id).await;
            emit(&auth, notice)?;
            if let Some(row) = panel.row(&id) {
                println!("{}", render::user_line(row));
            }
        }

        Command::Mail { id } => {
            let notice = panel.view_user_mail(api, &id).await;
            emit(&auth, notice)?;
            if let Some(selected) = panel.selected() {
                for mail in &selected.mails {
                    println!("{}", render::exchange_line(mail));
                }
            }
        }

        Command::Delete { id } => {
            let notice = panel.delete_user(api, &id).await;
            emit(&auth, notice)?;
        }
    }

    Ok(())
}
