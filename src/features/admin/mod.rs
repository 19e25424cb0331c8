//! Admin feature: user listing, activation toggles, deletion, and read-only
//! inspection of a user's mail. Guarded client-side by `require_admin`; the
//! API enforces the role.

pub mod client;
pub mod panel;
pub mod types;

pub use panel::{AdminPanel, AdminStats, RowState, UserRow};
