//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the LoginGate library and Zellij: it maps
//! Zellij events to library events, runs them through
//! [`dispatch`](logingate::dispatch) against the session, and executes the
//! runtime actions that come back.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Timer, `PermissionRequestResult` events
//! 3. **Permissions granted**: Open the persisted session and show the matching screen
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Login screen:
//! - Printable characters: Type into the focused field
//! - `Backspace`: Delete last character
//! - `Tab`/`Down`: Next field
//! - `Shift+Tab`/`Up`: Previous field
//! - `Enter`: Submit
//! - `Esc`: Close plugin
//!
//! Home screen:
//! - `l`: Logout
//! - `q`/`Esc`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use logingate::session::AuthSession;
use logingate::{dispatch, Action, AppState, Config, Event, Screen};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Holds the library's `AppState` next to the session it is dispatched
/// against, plus the config needed to reopen the session once the plugin may
/// touch the host filesystem.
struct State {
    app: AppState,
    session: AuthSession,
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: logingate::initialize(&config, false),
            session: AuthSession::in_memory(),
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state, and subscribes to events.
    ///
    /// The session starts in memory; the persisted one is opened after
    /// `FullHdAccess` is granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        self.config = Config::from_zellij(&configuration);
        logingate::observability::init_tracing(&self.config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?self.config, "parsed configuration");
        self.app = logingate::initialize(&self.config, self.session.is_logged_in());

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::Timer, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        match dispatch(&mut self.app, &mut self.session, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        logingate::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the visible screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.screen() {
            Screen::Login => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrevious,
                BareKey::Tab | BareKey::Down => Event::FocusNext,
                BareKey::Up => Event::FocusPrevious,
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::CloseFocus,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
                _ => return None,
            }),
            Screen::Home => match key.bare_key {
                BareKey::Char('l' | 'L') => Some(Event::Logout),
                BareKey::Char('q') | BareKey::Esc => Some(Event::CloseFocus),
                _ => None,
            },
        }
    }

    /// Opens the persisted session once the host filesystem is reachable.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - opening session");
                self.session = logingate::open_session(&self.config);
                self.app.set_logged_in(self.session.is_logged_in());
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - session will not persist");
                false
            }
        }
    }

    /// Executes a runtime action returned from dispatch.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `ScheduleRevalidation`: Arm a timer; its `Timer` event fires the ticket
    ///
    /// Session actions never reach this point; `dispatch` consumes them.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleRevalidation { field, delay } => {
                tracing::trace!(?field, ?delay, "arming revalidation timer");
                set_timeout(delay.as_secs_f64());
            }
            Action::Login { .. } | Action::Logout => {
                tracing::warn!("session action reached the runtime");
            }
        }
    }
}
