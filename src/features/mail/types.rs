use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Folder {
    #[default]
    Inbox,
    Sent,
    Drafts,
}

impl Folder {
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Sent, Self::Drafts];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Folder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "drafts" => Ok(Self::Drafts),
            other => Err(format!("unknown folder: {other}")),
        }
    }
}

/// Sender or receiver of a mail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Participant {
    /// Display name, falling back to the local part of the address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub sender: Option<Participant>,
    #[serde(default)]
    pub receiver: Option<Participant>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "isRead", default)]
    pub is_read: bool,
    #[serde(rename = "isDraft", default)]
    pub is_draft: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Mail {
    /// Subject line for list rendering.
    #[must_use]
    pub fn subject_line(&self) -> &str {
        if self.subject.trim().is_empty() {
            "No Subject"
        } else {
            &self.subject
        }
    }

    /// First `max` characters of the body.
    #[must_use]
    pub fn preview(&self, max: usize) -> String {
        let preview: String = self.body.chars().take(max).collect();
        if self.body.chars().count() > max {
            format!("{preview}...")
        } else {
            preview
        }
    }

    /// The counterpart shown in a folder listing: receiver for sent mail,
    /// sender otherwise.
    #[must_use]
    pub fn counterpart(&self, folder: Folder) -> &str {
        let party = match folder {
            Folder::Sent => self.receiver.as_ref(),
            Folder::Inbox | Folder::Drafts => self.sender.as_ref(),
        };
        party.map_or("Unknown", Participant::display_name)
    }
}

/// Folder and search payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MailList {
    #[serde(default)]
    pub mails: Vec<Mail>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Body of `POST /mail/compose`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposeRequest {
    #[serde(rename = "toEmail")]
    pub to_email: String,
    pub subject: String,
    pub body: String,
    #[serde(rename = "isDraft")]
    pub is_draft: bool,
}
