//! Session layer: the persisted "logged in" flag.
//!
//! # Modules
//!
//! - `backend`: key-value store trait plus an in-memory implementation
//! - `json`: JSON file store with atomic writes
//! - `auth`: the session holder exposing `login`/`logout`

pub mod auth;
pub mod backend;
pub mod json;

pub use auth::{AuthSession, LOGGED_IN_KEY, LOGGED_IN_VALUE};
pub use backend::{KeyValueStore, MemoryStore};
pub use json::JsonStore;
