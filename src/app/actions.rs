//! Actions representing side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) returns a `Vec<Action>` after each
//! event. [`dispatch`](crate::app::dispatch) executes the session-bound ones
//! (`Login`, `Logout`) against the injected session; the rest are executed by
//! the plugin runtime.
//!
//! # Example
//!
//! ```rust
//! use logingate::app::Action;
//!
//! let actions = vec![Action::Login {
//!     email: "a@b.com".to_string(),
//!     password: "longenough".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::FieldId;
use std::time::Duration;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// The form was submitted with valid values.
    ///
    /// Fire-and-forget: the mock session accepts any credentials.
    Login {
        /// Submitted email value.
        email: String,
        /// Submitted password value.
        password: String,
    },

    /// The user asked to log out.
    Logout,

    /// Arms a timer that re-validates `field` once it elapses.
    ///
    /// Only emitted under the debounced validation policy.
    ScheduleRevalidation {
        /// Field whose recomputation is pending.
        field: FieldId,
        /// Delay before the timer elapses.
        delay: Duration,
    },
}
