//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin runtime (keys, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`
//! - **Focus**: `FocusNext`, `FocusPrevious`
//! - **Form**: `Submit`
//! - **Session**: `Logout`
//! - **System**: `TimerElapsed`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use logingate::app::{handle_event, AppState, Event, ValidationPolicy};
//! use logingate::ui::Theme;
//!
//! let mut state = AppState::new(false, ValidationPolicy::Immediate, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), logingate::LoginGateError>(())
//! ```

use super::modes::Screen;
use super::state::{Focus, SubmitOutcome};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Moves focus to the next field, blurring the current one.
    FocusNext,
    /// Moves focus to the previous field, blurring the current one.
    FocusPrevious,
    /// Submits the login form.
    Submit,
    /// Requests logout from the home screen.
    Logout,
    /// Hides the plugin pane.
    CloseFocus,
    /// A previously armed revalidation timer elapsed.
    TimerElapsed,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Events that do not apply to the visible screen
/// (typing on the home screen, logout on the login screen) are ignored.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` keeps the signature
/// aligned with [`dispatch`](crate::app::dispatch), which can.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, screen = ?state.screen()).entered();

    match (state.screen(), event) {
        (_, Event::CloseFocus) => Ok((false, vec![Action::CloseFocus])),
        (_, Event::TimerElapsed) => Ok((state.on_timer(), vec![])),

        (Screen::Login, Event::Char(c)) => {
            let mut value = state.form.field(state.focused).value.clone();
            value.push(*c);
            let actions = state.edit_focused(value).into_iter().collect();
            Ok((true, actions))
        }
        (Screen::Login, Event::Backspace) => {
            let mut value = state.form.field(state.focused).value.clone();
            if value.pop().is_none() {
                return Ok((false, vec![]));
            }
            let actions = state.edit_focused(value).into_iter().collect();
            Ok((true, actions))
        }
        (Screen::Login, Event::FocusNext) => {
            let target = state.focused.next();
            state.focus(target);
            Ok((true, vec![]))
        }
        (Screen::Login, Event::FocusPrevious) => {
            let target = state.focused.previous();
            state.focus(target);
            Ok((true, vec![]))
        }
        (Screen::Login, Event::Submit) => match state.submit() {
            SubmitOutcome::Login { email, password } => {
                tracing::debug!(email_len = email.chars().count(), "form submitted");
                Ok((true, vec![Action::Login { email, password }]))
            }
            SubmitOutcome::Focus(_) => Ok((true, vec![])),
        },

        (Screen::Home, Event::Logout) => Ok((false, vec![Action::Logout])),

        (screen, event) => {
            tracing::trace!(screen = ?screen, event = ?event, "event ignored on this screen");
            Ok((false, vec![]))
        }
    }
}
