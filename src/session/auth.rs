//! Mock authentication session.
//!
//! Holds a single "logged in" flag. The flag is read from the store once when
//! the session is opened and written only by [`AuthSession::login`] and
//! [`AuthSession::logout`].

use crate::domain::error::Result;
use crate::session::backend::KeyValueStore;

/// Storage key of the logged-in flag.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Stored value meaning "logged in". Anything else, or no value, is logged out.
pub const LOGGED_IN_VALUE: &str = "1";

/// Session handle passed explicitly to whoever needs to read or change it.
pub struct AuthSession {
    store: Box<dyn KeyValueStore>,
    logged_in: bool,
}

impl AuthSession {
    /// Opens the session, reading the persisted flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use logingate::session::{AuthSession, MemoryStore};
    ///
    /// let mut session = AuthSession::open(Box::new(MemoryStore::new()))?;
    /// assert!(!session.is_logged_in());
    /// session.login("a@b.com", "longenough")?;
    /// assert!(session.is_logged_in());
    /// # Ok::<(), logingate::LoginGateError>(())
    /// ```
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let stored = store.get(LOGGED_IN_KEY)?;
        let logged_in = stored.as_deref() == Some(LOGGED_IN_VALUE);
        tracing::debug!(logged_in, has_value = stored.is_some(), "session restored");
        Ok(Self { store, logged_in })
    }

    /// Logged-out session over a fresh [`MemoryStore`](crate::session::MemoryStore).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(crate::session::MemoryStore::new()),
            logged_in: false,
        }
    }

    /// Marks the session as logged in.
    ///
    /// Credentials are not checked; any pair is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted. The in-memory flag is
    /// left unchanged in that case.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        tracing::debug!(email_len = email.len(), password_len = password.len(), "logging in");
        self.store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        self.logged_in = true;
        Ok(())
    }

    /// Clears the logged-in flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be removed from the store.
    pub fn logout(&mut self) -> Result<()> {
        tracing::debug!("logging out");
        self.store.remove(LOGGED_IN_KEY)?;
        self.logged_in = false;
        Ok(())
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{JsonStore, MemoryStore};

    #[test]
    fn only_literal_one_means_logged_in() {
        for (value, expected) in [(Some("1"), true), (Some("true"), false), (Some(""), false), (None, false)] {
            let mut store = MemoryStore::new();
            if let Some(v) = value {
                store.set(LOGGED_IN_KEY, v).unwrap();
            }
            let session = AuthSession::open(Box::new(store)).unwrap();
            assert_eq!(session.is_logged_in(), expected, "{value:?}");
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn credentials_stay_out_of_traces() {
        use crate::app::{dispatch, AppState, Event, ValidationPolicy};
        use crate::ui::Theme;

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = AuthSession::in_memory();
            let mut state = AppState::new(false, ValidationPolicy::Immediate, Theme::default());
            let mut events: Vec<Event> = "secret@mail.test".chars().map(Event::Char).collect();
            events.push(Event::FocusNext);
            events.extend("hunter2hunter2".chars().map(Event::Char));
            events.push(Event::Submit);
            for event in &events {
                dispatch(&mut state, &mut session, event).unwrap();
            }
            assert!(session.is_logged_in());
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("logging in"));
        assert!(!output.contains("secret@mail.test"));
        assert!(!output.contains("hunter2hunter2"));
    }

    #[test]
    fn login_and_logout_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = AuthSession::open(Box::new(JsonStore::open(path.clone()).unwrap())).unwrap();
        assert!(!session.is_logged_in());
        session.login("a@b.com", "longenough").unwrap();
        drop(session);

        let mut session = AuthSession::open(Box::new(JsonStore::open(path.clone()).unwrap())).unwrap();
        assert!(session.is_logged_in());
        session.logout().unwrap();
        drop(session);

        let session = AuthSession::open(Box::new(JsonStore::open(path).unwrap())).unwrap();
        assert!(!session.is_logged_in());
    }
}
