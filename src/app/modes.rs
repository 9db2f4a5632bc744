//! Screen and validation policy types.
//!
//! The plugin shows one of two screens depending on the session flag:
//! - **Login**: the form, with field focus and validation markers
//! - **Home**: the greeting shown once logged in
//!
//! How quickly a field's validity follows its value is a separate choice,
//! captured by [`ValidationPolicy`].

use std::time::Duration;

/// Default pause before a debounced recomputation fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Logged out: the login form.
    Login,
    /// Logged in: greeting and navigation.
    Home,
}

impl Screen {
    #[must_use]
    pub const fn for_session(logged_in: bool) -> Self {
        if logged_in {
            Self::Home
        } else {
            Self::Login
        }
    }
}

/// When a field's validity is recomputed after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// On every keystroke.
    #[default]
    Immediate,

    /// After `delay` without further edits to the same field.
    ///
    /// Blur still re-validates at once.
    Debounced {
        /// Pause required before the recomputation fires.
        delay: Duration,
    },
}

impl ValidationPolicy {
    /// Parses the `validation` configuration value.
    ///
    /// Accepts `immediate` and `debounced` (case-insensitive). `delay` is only
    /// used for the debounced policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use logingate::app::ValidationPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = ValidationPolicy::parse("Debounced", Duration::from_millis(250));
    /// assert_eq!(policy, Some(ValidationPolicy::Debounced { delay: Duration::from_millis(250) }));
    /// assert_eq!(ValidationPolicy::parse("eventually", Duration::ZERO), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str, delay: Duration) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "immediate" => Some(Self::Immediate),
            "debounced" => Some(Self::Debounced { delay }),
            _ => None,
        }
    }
}
