//! Admin panel state. Toggling a user's active flag is optimistic: the row
//! flips before the backend answers and stays [`RowState::Optimistic`] until a
//! follow-up list read replaces it with backend state. A failed toggle reverts
//! the row locally, and the same list read settles it.

use crate::{
    client::{ApiClient, AppError},
    features::{
        admin::{
            client,
            types::{ToggleResponse, UserMailbox},
        },
        auth::types::{Role, User},
        mail::types::Mail,
        notice::Notice,
    },
};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowState {
    /// Matches the last list read.
    #[default]
    Confirmed,
    /// Changed locally, awaiting confirmation from a list read.
    Optimistic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user: User,
    pub state: RowState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub inactive: usize,
}

/// Mail of the user currently inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedMailbox {
    pub user_id: String,
    pub mails: Vec<Mail>,
}

#[derive(Clone, Debug, Default)]
pub struct AdminPanel {
    rows: Vec<UserRow>,
    selected: Option<SelectedMailbox>,
}

impl AdminPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.user.id == id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedMailbox> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> AdminStats {
        let total = self.rows.len();
        let active = self.rows.iter().filter(|row| row.user.active).count();
        let admins = self
            .rows
            .iter()
            .filter(|row| row.user.role == Role::Admin)
            .count();

        AdminStats {
            total,
            active,
            admins,
            inactive: total - active,
        }
    }

    fn replace_users(&mut self, users: Vec<User>) {
        self.rows = users
            .into_iter()
            .map(|user| UserRow {
                user,
                state: RowState::Confirmed,
            })
            .collect();
    }

    /// Loads the user list; every row comes back confirmed.
    pub async fn load(&mut self, api: &ApiClient) -> Option<Notice> {
        match client::list_users(api).await {
            Ok(list) => {
                debug!(count = list.users.len(), "users loaded");
                self.replace_users(list.users);
                None
            }
            Err(err) => Some(Notice::from_error(&err, "Failed to load admin data")),
        }
    }

    /// Flips the row locally and marks it optimistic. Returns `false` when
    /// the user is not listed.
    pub fn begin_toggle(&mut self, id: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.user.id == id) {
            Some(row) => {
                row.user.active = !row.user.active;
                row.state = RowState::Optimistic;
                true
            }
            None => false,
        }
    }

    /// Applies the backend answer to an optimistic row. On success the row
    /// takes the reported status, on failure the flip is undone. Either way
    /// the row stays optimistic; only a list read confirms it.
    pub fn settle_toggle(&mut self, id: &str, result: &Result<ToggleResponse, AppError>) {
        let Some(row) = self
            .rows
            .iter_mut()
            .find(|row| row.user.id == id && row.state == RowState::Optimistic)
        else {
            return;
        };
        match result {
            Ok(response) => {
                if let Some(active) = response.is_active() {
                    row.user.active = active;
                }
            }
            Err(_) => row.user.active = !row.user.active,
        }
    }

    /// Toggles a user's active flag: optimistic flip, backend call, then a
    /// list read that confirms the rows whether or not the call succeeded.
    pub async fn toggle_active(&mut self, api: &ApiClient, id: &str) -> Notice {
        self.begin_toggle(id);
        let result = client::toggle_active(api, id).await;
        self.settle_toggle(id, &result);

        if let Some(notice) = self.load(api).await {
            warn!("toggle not confirmed: {}", notice.message);
        }

        let response = match result {
            Ok(response) => response,
            Err(err) => return Notice::from_error(&err, "Can not update admin status"),
        };

        let activated = response
            .is_active()
            .or_else(|| self.row(id).map(|row| row.user.active))
            .unwrap_or(true);

        if activated {
            Notice::success("User activated successfully")
        } else {
            Notice::success("User deactivated successfully")
        }
    }

    /// Deletes a user, then reloads the list.
    pub async fn delete_user(&mut self, api: &ApiClient, id: &str) -> Notice {
        match client::delete_user(api, id).await {
            Ok(_) => {
                if self
                    .selected
                    .as_ref()
                    .is_some_and(|selected| selected.user_id == id)
                {
                    self.selected = None;
                }
                if let Some(notice) = self.load(api).await {
                    warn!("reload after delete failed: {}", notice.message);
                }
                Notice::success("User deleted successfully")
            }
            Err(err) => Notice::from_error(&err, "Failed to delete user"),
        }
    }

    /// Fetches a user's inbox and sent mail as one list.
    pub async fn view_user_mail(&mut self, api: &ApiClient, id: &str) -> Notice {
        self.selected = None;
        match client::user_mail(api, id).await {
            Ok(mailbox) => self.select(id, mailbox),
            Err(err) => Notice::from_error(&err, "Failed to load user emails"),
        }
    }

    fn select(&mut self, id: &str, mailbox: UserMailbox) -> Notice {
        let mails = mailbox.combined();
        let notice = if mails.is_empty() {
            Notice::info("No emails found for this user")
        } else {
            Notice::success(format!("Found {} emails", mails.len()))
        };
        self.selected = Some(SelectedMailbox {
            user_id: id.to_string(),
            mails,
        });
        notice
    }
}
