//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/session layers.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                                            │
//!                                        Login / Logout ─────┴──→ AuthSession
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Ticket bookkeeping for debounced re-validation
//! - [`dispatch`]: Executes session-bound actions on an injected session
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen and validation policy types
//! - [`state`]: Application state, focus capability, view model computation

pub mod actions;
pub mod debounce;
pub mod dispatch;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use dispatch::dispatch;
pub use handler::{handle_event, Event};
pub use modes::{Screen, ValidationPolicy, DEFAULT_DEBOUNCE};
pub use state::{AppState, Focus, SubmitOutcome};
