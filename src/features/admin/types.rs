use crate::features::{
    auth::types::User,
    mail::types::{Mail, MailList},
};
use serde::Deserialize;

/// Payload of `GET /admin/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ToggledUser {
    #[serde(default)]
    pub status: Option<String>,
}

/// Payload of `PATCH /admin/users/{id}/toggle-active`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<ToggledUser>,
}

impl ToggleResponse {
    /// Whether the backend reports the user as active after the toggle.
    /// Any status other than `active`, in any case, counts as inactive.
    #[must_use]
    pub fn is_active(&self) -> Option<bool> {
        self.user
            .as_ref()
            .and_then(|user| user.status.as_deref())
            .map(|status| status.trim().eq_ignore_ascii_case("active"))
    }
}

/// Payload of `GET /admin/users/{id}/mail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserMailbox {
    #[serde(default)]
    pub inbox: MailList,
    #[serde(default)]
    pub sent: MailList,
}

impl UserMailbox {
    /// Inbox followed by sent mail.
    #[must_use]
    pub fn combined(self) -> Vec<Mail> {
        let mut mails = self.inbox.mails;
        mails.extend(self.sent.mails);
        mails
    }
}
