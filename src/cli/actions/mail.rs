use crate::{
    cli::{
        actions::{authorize, emit, render},
        globals::GlobalArgs,
    },
    features::mail::{ComposeForm, Folder, FolderView},
};
use anyhow::Result;
use tracing::warn;

#[derive(Debug)]
pub enum Command {
    List { folder: Folder },
    Show { id: String },
    Read { id: String },
    Delete { id: String },
    Search { query: String },
    Send(ComposeForm),
    Draft(ComposeForm),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Handle the mail commands
/// # Errors
/// Returns an error if the user is signed out or the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let auth = args.globals.context()?;
    authorize(&auth, false)?;
    let api = auth.api();

    match args.command {
        Command::List { folder } => {
            let mut view = FolderView::new(folder);
            if let Some(notice) = view.load(api).await {
                return emit(&auth, notice);
            }
            render::mail_list(view.mails(), folder);
            if folder == Folder::Inbox {
                println!("{} unread", view.unread_count());
            }
        }

        Command::Show { id } => {
            let mut view = FolderView::new(Folder::Inbox);
            match view.open(api, &id).await {
                Ok((mail, notice)) => {
                    render::mail_detail(&mail);
                    if let Some(notice) = notice.filter(|notice| notice.is_error()) {
                        warn!("{}", notice.message);
                    }
                }
                Err(notice) => return emit(&auth, notice),
            }
        }

        Command::Read { id } => {
            let notice = FolderView::new(Folder::Inbox).mark_as_read(api, &id).await;
            emit(&auth, notice)?;
        }

        Command::Delete { id } => {
            let notice = FolderView::new(Folder::Inbox).delete(api, &id).await;
            emit(&auth, notice)?;
        }

        Command::Search { query } => {
            let mut view = FolderView::new(Folder::Inbox);
            match view.search(api, &query).await {
                Some(notice) => {
                    emit(&auth, notice)?;
                    render::mail_list(view.mails(), Folder::Inbox);
                }
                None => println!("Enter a search term"),
            }
        }

        Command::Send(mut form) => {
            let notice = form.send(api).await;
            emit(&auth, notice)?;
        }

        Command::Draft(mut form) => {
            let notice = form.save_draft(api).await;
            emit(&auth, notice)?;
        }
    }

    Ok(())
}
