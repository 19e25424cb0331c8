//! Domain features (auth, mail, admin) and their view state. Each feature has
//! a thin service client, one function per backend operation, plus the view
//! models that consume it. Views catch errors at the point of a user action
//! and turn them into [`notice::Notice`] values.

pub mod admin;
pub mod auth;
pub mod mail;
pub mod notice;
