use crate::client::{Route, SessionState};

/// Outcome of a route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// The initial session check has not completed; render nothing yet.
    Loading,
    Allow,
    Redirect(Route),
}

/// Guard for authenticated views. UX-only; real access control lives on the
/// API.
#[must_use]
pub fn require_auth(state: &SessionState) -> Access {
    if state.loading {
        Access::Loading
    } else if state.is_authenticated {
        Access::Allow
    } else {
        Access::Redirect(Route::Landing)
    }
}

/// Guard for the admin panel; non-admins go back to their dashboard.
#[must_use]
pub fn require_admin(state: &SessionState) -> Access {
    match require_auth(state) {
        Access::Allow if !state.is_admin() => Access::Redirect(Route::Dashboard),
        access => access,
    }
}
