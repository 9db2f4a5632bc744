//! LoginGate: a Zellij plugin rendering a validated login form.
//!
//! LoginGate shows an email/password form in a pane, validates each field as
//! it is edited or blurred, and keeps a mock "logged in" flag on disk:
//! - Weak client-side validators (email contains `@`, trimmed password longer than 6)
//! - One value+validity record per field, changed by a single transition function
//! - A tri-state form aggregate (unknown until every field has been evaluated)
//! - Optional debounced re-validation
//! - A persisted session flag with a home screen once logged in
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Debounce tickets                                 │
//! │  - Session dispatch                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Session Layer │
//! │ (ui/)         │   │ (session/)    │
//! │ - Rendering   │   │ - Auth flag   │
//! │ - Theming     │   │ - JSON store  │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Validators, field reducer, form (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/logingate.wasm" {
//!         validation "debounced"
//!         debounce_ms "500"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use logingate::{dispatch, initialize, Config, Event};
//! use logingate::session::{AuthSession, MemoryStore};
//!
//! let config = Config::default();
//! let mut session = AuthSession::open(Box::new(MemoryStore::new()))?;
//! let mut state = initialize(&config, session.is_logged_in());
//!
//! for c in "me@example.com".chars() {
//!     dispatch(&mut state, &mut session, &Event::Char(c))?;
//! }
//! dispatch(&mut state, &mut session, &Event::FocusNext)?;
//! for c in "hunter22".chars() {
//!     dispatch(&mut state, &mut session, &Event::Char(c))?;
//! }
//! dispatch(&mut state, &mut session, &Event::Submit)?;
//! assert!(session.is_logged_in());
//! # Ok::<(), logingate::LoginGateError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod session;

pub mod ui;

pub mod observability;

pub use app::{dispatch, handle_event, Action, AppState, Event, Screen, SubmitOutcome, ValidationPolicy};
pub use domain::{FieldId, LoginGateError, Result};
pub use session::AuthSession;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use app::DEFAULT_DEBOUNCE;
use infrastructure::{expand_tilde, get_data_dir};
use session::JsonStore;

/// File name of the persisted session inside the data directory.
pub const SESSION_FILE: &str = "session.json";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/logingate.wasm" {
///     validation "debounced"
///     debounce_ms "300"
///     theme "catppuccin-latte"
///     theme_file "~/.config/logingate/theme.toml"
///     storage_file "~/.local/share/logingate.json"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// When edits re-validate. Default: immediate.
    pub validation: ValidationPolicy,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level filter. Default: `"info"`
    pub trace_level: Option<String>,

    /// Overrides the session file location.
    pub storage_file: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `validation`: `immediate` | `debounced`; anything else falls back to immediate
    /// - `debounce_ms`: String → milliseconds (falls back to 500 on parse error)
    /// - `theme`, `theme_file`, `trace_level`, `storage_file`: copied as-is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use logingate::{Config, ValidationPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("validation".to_string(), "debounced".to_string());
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(
    ///     config.validation,
    ///     ValidationPolicy::Debounced { delay: Duration::from_millis(250) }
    /// );
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let delay = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(DEFAULT_DEBOUNCE, Duration::from_millis);

        let validation = config.get("validation").map_or_else(ValidationPolicy::default, |name| {
            ValidationPolicy::parse(name, delay).unwrap_or_else(|| {
                tracing::warn!(validation = %name, "unknown validation policy, using immediate");
                ValidationPolicy::default()
            })
        });

        Self {
            validation,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            storage_file: config.get("storage_file").cloned(),
        }
    }

    /// Resolved location of the session file.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.storage_file
            .as_deref()
            .map_or_else(|| get_data_dir().join(SESSION_FILE), |path| PathBuf::from(expand_tilde(path)))
    }

    /// Theme from file, then name, then the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the application state for a session whose flag is `logged_in`.
pub fn initialize(config: &Config, logged_in: bool) -> AppState {
    tracing::debug!(logged_in, policy = ?config.validation, "initializing logingate plugin");

    AppState::new(logged_in, config.validation, config.load_theme())
}

/// Opens the persisted session.
///
/// A session file that cannot be read is logged and replaced by an in-memory
/// session, so the plugin still starts (logged out).
pub fn open_session(config: &Config) -> AuthSession {
    let path = config.session_path();

    match JsonStore::open(path.clone()).and_then(|store| AuthSession::open(Box::new(store))) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open session store, using memory");
            AuthSession::in_memory()
        }
    }
}
