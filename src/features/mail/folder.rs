//! Folder list view state: fetch on open, mutate local state after a
//! successful action, reload to reconcile.

use crate::{
    client::ApiClient,
    features::{
        mail::{
            client,
            types::{Folder, Mail},
        },
        notice::Notice,
    },
};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct FolderView {
    folder: Folder,
    mails: Vec<Mail>,
    query: Option<String>,
}

impl FolderView {
    #[must_use]
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            mails: Vec::new(),
            query: None,
        }
    }

    #[must_use]
    pub fn folder(&self) -> Folder {
        self.folder
    }

    #[must_use]
    pub fn mails(&self) -> &[Mail] {
        &self.mails
    }

    /// Query of the search currently displayed, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.mails.iter().filter(|mail| !mail.is_read).count()
    }

    /// Loads the folder. On failure the list is emptied and an error notice
    /// returned.
    pub async fn load(&mut self, api: &ApiClient) -> Option<Notice> {
        self.query = None;
        match client::folder(api, self.folder).await {
            Ok(list) => {
                debug!(folder = %self.folder, count = list.mails.len(), "folder loaded");
                self.mails = list.mails;
                None
            }
            Err(err) => {
                self.mails.clear();
                Some(Notice::from_error(
                    &err,
                    &format!("Failed to load {}", self.folder),
                ))
            }
        }
    }

    /// Marks a mail read and reflects it locally once the backend confirms.
    /// A read mail is never flipped back to unread.
    pub async fn mark_as_read(&mut self, api: &ApiClient, id: &str) -> Notice {
        match client::mark_as_read(api, id).await {
            Ok(_) => {
                if let Some(mail) = self.mails.iter_mut().find(|mail| mail.id == id) {
                    mail.is_read = true;
                }
                Notice::success("Mail marked as read")
            }
            Err(err) => Notice::from_error(&err, "Failed to mark as read"),
        }
    }

    /// Deletes a mail and removes it from the list without a reload.
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Notice {
        match client::delete(api, id).await {
            Ok(_) => {
                self.mails.retain(|mail| mail.id != id);
                Notice::success("Mail deleted successfully")
            }
            Err(err) => Notice::from_error(&err, "Failed to delete mail"),
        }
    }

    /// Replaces the list with search results. A blank query sends nothing and
    /// leaves the list untouched.
    pub async fn search(&mut self, api: &ApiClient, query: &str) -> Option<Notice> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match client::search(api, query).await {
            Ok(list) => {
                self.mails = list.mails;
                self.query = Some(query.to_string());
                if self.mails.is_empty() {
                    Some(Notice::info(format!("No results found for \"{query}\"")))
                } else {
                    Some(Notice::success(format!(
                        "Found {} result(s) for \"{query}\"",
                        self.mails.len()
                    )))
                }
            }
            Err(err) => {
                self.mails.clear();
                Some(Notice::from_error(&err, "Failed to search emails"))
            }
        }
    }

    /// Opens a mail: fetches its full content and marks it read if needed.
    ///
    /// # Errors
    /// Returns an error notice when the mail cannot be fetched.
    pub async fn open(&mut self, api: &ApiClient, id: &str) -> Result<(Mail, Option<Notice>), Notice> {
        let mut mail = client::get(api, id)
            .await
            .map_err(|err| Notice::from_error(&err, "Failed to fetch mail"))?;

        let notice = if mail.is_read || mail.is_draft {
            None
        } else {
            let notice = self.mark_as_read(api, &mail.id).await;
            if !notice.is_error() {
                mail.is_read = true;
            }
            Some(notice)
        };
        Ok((mail, notice))
    }
}
