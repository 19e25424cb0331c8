//! Auth feature covering sign-in, registration, password reset, and the
//! session context. It keeps authentication logic out of the views and touches
//! security boundaries: passwords and tokens must never be logged.
//!
//! Flow overview: sign-in and registration POST credentials and persist the
//! returned token and user. Password reset requests an OTP by email, then PUTs
//! the OTP with the new password. Logout is local only.

pub mod client;
pub mod forms;
mod guards;
pub mod state;
pub mod types;

pub use guards::{require_admin, require_auth, Access};
pub use state::AuthContext;
