//! Endpoint registry: the static mapping from logical backend operations to
//! HTTP methods and path templates. Ids are encoded as single path segments
//! and the search query as the `q` parameter when a URL is built.

use reqwest::Method;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    // Auth
    Register,
    SignIn,
    RequestOtp,
    ResetPassword,

    // Mail
    Inbox,
    Sent,
    Drafts,
    Compose,
    MailGet(String),
    MailDelete(String),
    MailRead(String),
    MailSearch(String),

    // Admin
    AdminUsers,
    AdminToggleUser(String),
    AdminUserMail(String),
    AdminDeleteUser(String),
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Register | Self::SignIn | Self::RequestOtp | Self::Compose => Method::POST,
            Self::ResetPassword => Method::PUT,
            Self::MailRead(_) | Self::AdminToggleUser(_) => Method::PATCH,
            Self::MailDelete(_) | Self::AdminDeleteUser(_) => Method::DELETE,
            Self::Inbox
            | Self::Sent
            | Self::Drafts
            | Self::MailGet(_)
            | Self::MailSearch(_)
            | Self::AdminUsers
            | Self::AdminUserMail(_) => Method::GET,
        }
    }

    /// Path segments relative to the API base URL, unencoded.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Register => vec!["users", "register"],
            Self::SignIn => vec!["users", "signin"],
            Self::RequestOtp => vec!["users", "otp"],
            Self::ResetPassword => vec!["users", "reset-password"],
            Self::Inbox => vec!["mail"],
            Self::Sent => vec!["mail", "sent"],
            Self::Drafts => vec!["mail", "drafts"],
            Self::Compose => vec!["mail", "compose"],
            Self::MailGet(id) | Self::MailDelete(id) => vec!["mail", id.as_str()],
            Self::MailRead(id) => vec!["mail", id.as_str(), "read"],
            Self::MailSearch(_) => vec!["mail", "search"],
            Self::AdminUsers => vec!["admin", "users"],
            Self::AdminToggleUser(id) => vec!["admin", "users", id.as_str(), "toggle-active"],
            Self::AdminUserMail(id) => vec!["admin", "users", id.as_str(), "mail"],
            Self::AdminDeleteUser(id) => vec!["admin", "user", id.as_str()],
        }
    }

    /// Query parameters appended to the URL.
    #[must_use]
    pub fn query(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::MailSearch(query) => Some(("q", query.as_str())),
            _ => None,
        }
    }

    /// Human-readable path template, used in logs and tests.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = format!("/{}", self.segments().join("/"));
        if let Some((key, value)) = self.query() {
            path.push_str(&format!("?{key}={value}"));
        }
        path
    }

    /// Builds the full, percent-encoded URL against `base`.
    #[must_use]
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.segments());
        }
        if let Some((key, value)) = self.query() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }
}
