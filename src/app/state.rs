//! Application state and view model computation.
//!
//! [`AppState`] owns the login form, the focused field, the debounce
//! bookkeeping, and a mirror of the session flag. It is the single source of
//! truth for what the plugin renders; the session itself lives outside and is
//! passed in by [`dispatch`](crate::app::dispatch).
//!
//! # Example
//!
//! ```rust
//! use logingate::app::{AppState, SubmitOutcome, ValidationPolicy};
//! use logingate::domain::FieldId;
//! use logingate::ui::Theme;
//!
//! let mut state = AppState::new(false, ValidationPolicy::Immediate, Theme::default());
//! assert_eq!(state.submit(), SubmitOutcome::Focus(FieldId::Email));
//! ```

use super::debounce::Debouncer;
use super::modes::{Screen, ValidationPolicy};
use crate::app::Action;
use crate::domain::{FieldAction, FieldId, FormState, Validity};
use crate::ui::components::FIELD_CHROME_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, FieldView, FooterInfo, HeaderInfo, HomeInfo, LoginView, UIViewModel};

/// Grants the ability to move input focus to a field, and nothing more.
pub trait Focus {
    /// Moves focus to `field`. The previously focused field is blurred.
    fn focus(&mut self, field: FieldId);
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid; these values go to the session.
    Login { email: String, password: String },
    /// Form was not valid; focus moved to this field.
    Focus(FieldId),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Field records of the login form.
    pub form: FormState,

    /// Field receiving keystrokes.
    pub focused: FieldId,

    /// Mirror of the session flag; selects the screen.
    pub logged_in: bool,

    /// How edits trigger re-validation.
    pub policy: ValidationPolicy,

    /// Pending debounced recomputations.
    pub debouncer: Debouncer,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state with an empty form focused on the email field.
    #[must_use]
    pub fn new(logged_in: bool, policy: ValidationPolicy, theme: Theme) -> Self {
        Self {
            form: FormState::new(),
            focused: FieldId::Email,
            logged_in,
            policy,
            debouncer: Debouncer::new(),
            theme,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        Screen::for_session(self.logged_in)
    }

    /// Replaces the focused field's value.
    ///
    /// Under the immediate policy the validity follows at once. Under the
    /// debounced policy only the value changes, and the returned action asks
    /// the runtime to arm the recomputation timer.
    pub fn edit_focused(&mut self, value: String) -> Option<Action> {
        let field = self.focused;
        match self.policy {
            ValidationPolicy::Immediate => {
                self.form.apply(field, &FieldAction::Edit(value));
                None
            }
            ValidationPolicy::Debounced { delay } => {
                self.form.apply(field, &FieldAction::Input(value));
                self.debouncer.schedule(field);
                Some(Action::ScheduleRevalidation { field, delay })
            }
        }
    }

    /// Re-validates `field` because focus left it.
    pub fn blur(&mut self, field: FieldId) {
        self.debouncer.cancel(field);
        self.form.apply(field, &FieldAction::Commit);
    }

    /// Settles the oldest debounce timer.
    ///
    /// Returns `true` if a field was re-validated.
    pub fn on_timer(&mut self) -> bool {
        match self.debouncer.elapse() {
            Some(field) => {
                self.form.apply(field, &FieldAction::Revalidate);
                tracing::debug!(field = ?field, validity = ?self.form.field(field).validity, "debounced revalidation");
                true
            }
            None => false,
        }
    }

    /// Attempts to submit the form.
    ///
    /// A valid form yields its values. Otherwise focus moves to the email field
    /// if it is not valid, or to the password field.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.settle_pending();

        let _span = tracing::debug_span!(
            "submit",
            form_valid = ?self.form.is_form_valid()
        )
        .entered();

        if self.form.is_submittable() {
            return SubmitOutcome::Login {
                email: self.form.email.value.clone(),
                password: self.form.password.value.clone(),
            };
        }

        let target = if self.form.email.validity == Validity::Valid {
            FieldId::Password
        } else {
            FieldId::Email
        };
        tracing::debug!(field = ?target, "form not submittable, moving focus");
        self.focus(target);
        SubmitOutcome::Focus(target)
    }

    /// Re-validates every field whose debounce has not fired yet, so the
    /// validities match the values.
    fn settle_pending(&mut self) {
        for field in FieldId::ALL {
            if self.debouncer.cancel(field) {
                self.form.apply(field, &FieldAction::Revalidate);
            }
        }
    }

    /// Updates the session mirror. A change discards the form and cancels any
    /// pending recomputation.
    pub fn set_logged_in(&mut self, logged_in: bool) {
        if self.logged_in == logged_in {
            return;
        }
        self.logged_in = logged_in;
        self.reset_form();
    }

    /// Discards the form and every pending recomputation.
    pub fn reset_form(&mut self) {
        self.debouncer.cancel_all();
        self.form = FormState::new();
        self.focused = FieldId::Email;
    }

    /// Computes the renderable view model for a pane `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let body = match self.screen() {
            Screen::Login => BodyView::Login(self.compute_login_view(cols)),
            Screen::Home => BodyView::Home(HomeInfo {
                message: "Welcome back!".to_string(),
                subtitle: "You are logged in.".to_string(),
            }),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let nav_items = if self.logged_in {
            vec!["Users".to_string(), "Admin".to_string(), "Logout".to_string()]
        } else {
            vec![]
        };

        HeaderInfo {
            title: " A Typical Page ".to_string(),
            nav_items,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.screen() {
            Screen::Login => "Type to edit  Tab/↑/↓: switch field  Enter: login  Esc: close",
            Screen::Home => "L: logout  q/Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_login_view(&self, cols: usize) -> LoginView {
        let max_text = cols.saturating_sub(FIELD_CHROME_WIDTH);

        let fields = FieldId::ALL
            .into_iter()
            .map(|id| {
                let field = self.form.field(id);
                let shown = match id {
                    FieldId::Email => field.value.clone(),
                    FieldId::Password => "*".repeat(field.value.chars().count()),
                };
                let is_invalid = self.form.marks_invalid(id);
                FieldView {
                    label: id.label().to_string(),
                    text: Self::tail(&shown, max_text),
                    is_focused: id == self.focused,
                    is_invalid,
                    hint: is_invalid.then(|| Self::invalid_hint(id).to_string()),
                }
            })
            .collect();

        LoginView {
            fields,
            submittable: self.form.is_submittable(),
        }
    }

    const fn invalid_hint(id: FieldId) -> &'static str {
        match id {
            FieldId::Email => "Please enter a valid email address",
            FieldId::Password => "Password must be longer than 6 characters",
        }
    }

    /// Keeps the last `max` characters so the cursor end stays visible.
    fn tail(text: &str, max: usize) -> String {
        let count = text.chars().count();
        if count <= max {
            text.to_string()
        } else {
            text.chars().skip(count - max).collect()
        }
    }
}

impl Focus for AppState {
    fn focus(&mut self, field: FieldId) {
        if self.focused == field {
            return;
        }
        let previous = self.focused;
        self.blur(previous);
        self.focused = field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(false, ValidationPolicy::Immediate, Theme::default())
    }

    #[test]
    fn focus_change_blurs_previous_field() {
        let mut s = state();
        s.focus(FieldId::Password);
        assert_eq!(s.focused, FieldId::Password);
        assert_eq!(s.form.email.validity, Validity::Invalid);
        assert_eq!(s.form.password.validity, Validity::Unknown);
    }

    #[test]
    fn refocusing_same_field_is_noop() {
        let mut s = state();
        s.focus(FieldId::Email);
        assert_eq!(s.form.email.validity, Validity::Unknown);
    }

    #[test]
    fn password_is_masked_and_marked() {
        let mut s = state();
        s.focus(FieldId::Password);
        s.edit_focused("abc".to_string());

        let vm = s.compute_viewmodel(80);
        let BodyView::Login(login) = vm.body else {
            panic!("expected login body");
        };
        let password = &login.fields[1];
        assert_eq!(password.text, "***");
        assert!(password.is_focused);
        assert!(password.is_invalid);
        assert!(password.hint.is_some());
        assert!(!login.submittable);
    }

    #[test]
    fn long_values_keep_their_tail() {
        let mut s = state();
        s.edit_focused(format!("{}@end", "x".repeat(100)));
        let BodyView::Login(login) = s.compute_viewmodel(34).body else {
            panic!("expected login body");
        };
        assert_eq!(login.fields[0].text.chars().count(), 10);
        assert!(login.fields[0].text.ends_with("@end"));
    }

    #[test]
    fn truncated_text_fits_inside_the_box() {
        let mut s = state();
        s.edit_focused("y".repeat(200));
        for cols in [30, 60, 120] {
            let BodyView::Login(login) = s.compute_viewmodel(cols).body else {
                panic!("expected login body");
            };
            assert_eq!(login.fields[0].text.chars().count() + FIELD_CHROME_WIDTH, cols);
        }
    }

    #[test]
    fn header_shows_navigation_only_when_logged_in() {
        let mut s = state();
        assert!(s.compute_viewmodel(80).header.nav_items.is_empty());

        s.set_logged_in(true);
        let vm = s.compute_viewmodel(80);
        assert_eq!(vm.header.nav_items, vec!["Users", "Admin", "Logout"]);
        assert!(matches!(vm.body, BodyView::Home(_)));
    }

    #[test]
    fn session_change_discards_form_and_timers() {
        let mut s = AppState::new(
            false,
            ValidationPolicy::Debounced { delay: Duration::from_millis(500) },
            Theme::default(),
        );
        s.edit_focused("a@b.com".to_string());
        assert!(s.debouncer.is_pending(FieldId::Email));

        s.set_logged_in(true);
        assert_eq!(s.form, FormState::new());
        assert!(!s.debouncer.is_pending(FieldId::Email));
        assert!(!s.on_timer());
    }
}
