//! Mail feature: folder listings, the dashboard, compose, and search. The
//! backend scopes every endpoint to the signed-in user.

pub mod client;
pub mod compose;
pub mod dashboard;
pub mod folder;
pub mod types;

pub use compose::ComposeForm;
pub use dashboard::{Dashboard, DashboardStats};
pub use folder::FolderView;
pub use types::{Folder, Mail, MailList};
