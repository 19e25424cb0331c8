//! Plain-text rendering of view state for stdout.

use crate::features::{
    admin::{AdminStats, RowState, UserRow},
    auth::types::User,
    mail::{types::Participant, DashboardStats, Folder, Mail},
};
use chrono::{DateTime, Local, Utc};

const PREVIEW_CHARS: usize = 60;

fn timestamp(created_at: Option<DateTime<Utc>>) -> String {
    created_at.map_or_else(String::new, |created| {
        created
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    })
}

pub fn mail_line(mail: &Mail, folder: Folder) -> String {
    let marker = if mail.is_read { ' ' } else { '*' };
    format!(
        "{marker} {:<24} {:<24} {:<40} {}",
        mail.id,
        mail.counterpart(folder),
        mail.subject_line(),
        timestamp(mail.created_at)
    )
}

pub fn mail_list(mails: &[Mail], folder: Folder) {
    if mails.is_empty() {
        println!("No emails in {folder}");
        return;
    }
    for mail in mails {
        println!("{}", mail_line(mail, folder));
    }
}

pub fn mail_detail(mail: &Mail) {
    let party = |participant: Option<&Participant>| {
        participant.map_or_else(
            || "Unknown".to_string(),
            |p| format!("{} <{}>", p.display_name(), p.email),
        )
    };
    println!("From:    {}", party(mail.sender.as_ref()));
    println!("To:      {}", party(mail.receiver.as_ref()));
    println!("Subject: {}", mail.subject_line());
    println!("Date:    {}", timestamp(mail.created_at));
    if mail.is_draft {
        println!("Status:  draft");
    }
    println!();
    println!("{}", mail.body);
}

/// Sender and receiver on one line, for listings that mix folders.
pub fn exchange_line(mail: &Mail) -> String {
    let email = |participant: Option<&Participant>| {
        participant.map_or("Unknown", |p| p.email.as_str()).to_string()
    };
    format!(
        "{:<24} {} -> {}  {:<40} {}",
        mail.id,
        email(mail.sender.as_ref()),
        email(mail.receiver.as_ref()),
        mail.subject_line(),
        timestamp(mail.created_at)
    )
}

pub fn recent_line(mail: &Mail) -> String {
    format!(
        "{} {:<24} {}: {}",
        if mail.is_read { ' ' } else { '*' },
        mail.counterpart(Folder::Inbox),
        mail.subject_line(),
        mail.preview(PREVIEW_CHARS)
    )
}

pub fn dashboard_stats(stats: &DashboardStats) {
    println!("Total emails: {}", stats.total);
    println!("Unread:       {}", stats.unread);
    println!("Sent today:   {}", stats.sent_today);
    println!("Drafts:       {}", stats.drafts);
}

pub fn user_summary(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!("id:     {}", user.id);
    println!("role:   {}", user.role);
    println!("status: {}", if user.active { "active" } else { "inactive" });
}

pub fn user_line(row: &UserRow) -> String {
    let status = if row.user.active { "active" } else { "inactive" };
    let pending = match row.state {
        RowState::Confirmed => "",
        RowState::Optimistic => " (pending)",
    };
    format!(
        "{:<24} {:<24} {:<32} {:<6} {status}{pending}",
        row.user.id,
        row.user.name,
        row.user.email,
        row.user.role.to_string()
    )
}

pub fn admin_stats(stats: &AdminStats) {
    println!(
        "users: {}  active: {}  admins: {}  inactive: {}",
        stats.total, stats.active, stats.admins, stats.inactive
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mail_line_marks_unread() {
        let mail: Mail = serde_json::from_value(json!({
            "_id": "m1",
            "subject": "Hello",
            "sender": {"name": "Alice", "email": "alice@example.com"}
        }))
        .unwrap();
        let line = mail_line(&mail, Folder::Inbox);
        assert!(line.starts_with("* m1"));
        assert!(line.contains("Alice"));
        assert!(line.contains("Hello"));
    }

    #[test]
    fn user_line_flags_pending_rows() {
        let row = UserRow {
            user: User {
                id: "u1".to_string(),
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                role: crate::features::auth::types::Role::User,
                active: false,
                created_at: None,
            },
            state: RowState::Optimistic,
        };
        assert!(user_line(&row).ends_with("inactive (pending)"));
    }
}
