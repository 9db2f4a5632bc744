//! Event dispatch against an injected session.
//!
//! [`handle_event`] stays free of I/O. `dispatch` runs it, executes the
//! actions that belong to the session (`Login`, `Logout`), mirrors the
//! resulting flag into the state, and hands the remaining actions back to the
//! plugin runtime.

use super::handler::{handle_event, Event};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::session::AuthSession;

/// Handles `event` and executes session-bound actions on `session`.
///
/// # Returns
///
/// `(should_render, actions)` where `actions` contains only runtime actions
/// (`CloseFocus`, `ScheduleRevalidation`).
///
/// # Errors
///
/// Returns an error if the session flag cannot be persisted. The state keeps
/// the flag the session actually holds.
///
/// # Example
///
/// ```rust
/// use logingate::app::{dispatch, AppState, Event, ValidationPolicy};
/// use logingate::session::{AuthSession, MemoryStore};
/// use logingate::ui::Theme;
///
/// let mut session = AuthSession::open(Box::new(MemoryStore::new()))?;
/// let mut state = AppState::new(session.is_logged_in(), ValidationPolicy::Immediate, Theme::default());
/// let (_, actions) = dispatch(&mut state, &mut session, &Event::Submit)?;
/// assert!(actions.is_empty());
/// assert!(!session.is_logged_in());
/// # Ok::<(), logingate::LoginGateError>(())
/// ```
pub fn dispatch(
    state: &mut AppState,
    session: &mut AuthSession,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let (mut should_render, actions) = handle_event(state, event)?;

    let mut remaining = Vec::with_capacity(actions.len());
    for action in actions {
        match action {
            Action::Login { email, password } => {
                let result = session.login(&email, &password);
                should_render |= sync_session(state, session);
                result?;
            }
            Action::Logout => {
                let result = session.logout();
                should_render |= sync_session(state, session);
                result?;
            }
            other => remaining.push(other),
        }
    }

    Ok((should_render, remaining))
}

/// Mirrors the session flag into the state. Returns `true` if it changed.
fn sync_session(state: &mut AppState, session: &AuthSession) -> bool {
    let changed = state.logged_in != session.is_logged_in();
    state.set_logged_in(session.is_logged_in());
    if changed {
        tracing::debug!(logged_in = state.logged_in, "session changed");
    }
    changed
}
