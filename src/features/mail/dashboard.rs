//! User dashboard: inbox, sent and drafts fetched concurrently, merged once
//! all three settle. A failed folder contributes an empty list and does not
//! abort the others.

use crate::{
    client::{ApiClient, AppError},
    features::{
        mail::{
            client,
            types::{Folder, Mail, MailList},
        },
        notice::Notice,
    },
};
use chrono::{Local, NaiveDate};
use tracing::warn;

/// Number of inbox mails shown under "Recent Emails".
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub unread: usize,
    pub sent_today: usize,
    pub drafts: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    inbox: Vec<Mail>,
    sent: Vec<Mail>,
    drafts: Vec<Mail>,
    failed: Vec<Folder>,
}

fn settle(
    folder: Folder,
    result: Result<MailList, AppError>,
    failed: &mut Vec<Folder>,
) -> Vec<Mail> {
    match result {
        Ok(list) => list.mails,
        Err(err) => {
            warn!(%folder, "folder fetch failed: {err}");
            failed.push(folder);
            Vec::new()
        }
    }
}

impl Dashboard {
    /// Fetches the three folders concurrently.
    pub async fn load(api: &ApiClient) -> Self {
        let (inbox, sent, drafts) =
            tokio::join!(client::inbox(api), client::sent(api), client::drafts(api));

        let mut failed = Vec::new();
        let inbox = settle(Folder::Inbox, inbox, &mut failed);
        let sent = settle(Folder::Sent, sent, &mut failed);
        let drafts = settle(Folder::Drafts, drafts, &mut failed);

        Self {
            inbox,
            sent,
            drafts,
            failed,
        }
    }

    /// Re-fetches everything in place.
    pub async fn reload(&mut self, api: &ApiClient) {
        *self = Self::load(api).await;
    }

    #[must_use]
    pub fn inbox(&self) -> &[Mail] {
        &self.inbox
    }

    #[must_use]
    pub fn sent(&self) -> &[Mail] {
        &self.sent
    }

    #[must_use]
    pub fn drafts(&self) -> &[Mail] {
        &self.drafts
    }

    /// Folders whose fetch failed during the last load.
    #[must_use]
    pub fn failed(&self) -> &[Folder] {
        &self.failed
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.inbox.iter().filter(|mail| !mail.is_read).count()
    }

    /// Most recent inbox mails, in backend order.
    #[must_use]
    pub fn recent(&self) -> &[Mail] {
        &self.inbox[..self.inbox.len().min(RECENT_LIMIT)]
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        self.stats_on(Local::now().date_naive())
    }

    /// Stats with "today" pinned, in local time.
    #[must_use]
    pub fn stats_on(&self, today: NaiveDate) -> DashboardStats {
        let sent_today = self
            .sent
            .iter()
            .filter_map(|mail| mail.created_at)
            .filter(|created| created.with_timezone(&Local).date_naive() == today)
            .count();

        DashboardStats {
            total: self.inbox.len(),
            unread: self.unread_count(),
            sent_today,
            drafts: self.drafts.len(),
        }
    }

    /// Marks a mail read, then re-fetches the dashboard.
    pub async fn mark_as_read(&mut self, api: &ApiClient, id: &str) -> Notice {
        match client::mark_as_read(api, id).await {
            Ok(_) => {
                self.reload(api).await;
                Notice::success("Mail marked as read")
            }
            Err(err) => Notice::from_error(&err, "Failed to mark as read"),
        }
    }

    /// Deletes a mail, then re-fetches the dashboard.
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Notice {
        match client::delete(api, id).await {
            Ok(_) => {
                self.reload(api).await;
                Notice::success("Mail deleted successfully")
            }
            Err(err) => Notice::from_error(&err, "Failed to delete mail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn mail(id: &str, is_read: bool, created_at: &str) -> Mail {
        serde_json::from_value(json!({
            "_id": id,
            "isRead": is_read,
            "createdAt": created_at
        }))
        .unwrap()
    }

    #[test]
    fn stats_count_unread_and_sent_today() {
        let noon_utc = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let today = noon_utc.with_timezone(&Local).date_naive();

        let dashboard = Dashboard {
            inbox: vec![
                mail("1", false, "2024-05-10T12:00:00Z"),
                mail("2", true, "2024-05-09T12:00:00Z"),
            ],
            sent: vec![
                mail("3", true, "2024-05-10T12:00:00Z"),
                mail("4", true, "2024-04-01T12:00:00Z"),
            ],
            drafts: vec![mail("5", true, "2024-05-10T12:00:00Z")],
            failed: Vec::new(),
        };

        assert_eq!(
            dashboard.stats_on(today),
            DashboardStats {
                total: 2,
                unread: 1,
                sent_today: 1,
                drafts: 1,
            }
        );
    }

    #[test]
    fn recent_is_capped() {
        let inbox = (0..8)
            .map(|i| mail(&i.to_string(), false, "2024-05-10T12:00:00Z"))
            .collect();
        let dashboard = Dashboard {
            inbox,
            ..Dashboard::default()
        };
        assert_eq!(dashboard.recent().len(), RECENT_LIMIT);
        assert_eq!(dashboard.recent()[0].id, "0");
    }
}
