//! Per-field state and the shared transition function.
//!
//! A field's value and validity are one record. Every change goes through
//! [`reduce`], so the validity can never lag behind a value it was not
//! computed from (except under the debounced policy, where [`FieldAction::Input`]
//! intentionally defers the recomputation to a later [`FieldAction::Revalidate`]).

use super::validation::Validator;

/// Tri-state validity of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not evaluated yet (no edit or blur has happened).
    #[default]
    Unknown,
    /// Last evaluation accepted the value.
    Valid,
    /// Last evaluation rejected the value.
    Invalid,
}

impl Validity {
    /// Maps a validator verdict onto a known validity.
    #[must_use]
    pub const fn from_verdict(ok: bool) -> Self {
        if ok {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Current text and validity of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
}

impl FieldState {
    #[must_use]
    pub fn new(value: impl Into<String>, validity: Validity) -> Self {
        Self {
            value: value.into(),
            validity,
        }
    }
}

/// Transitions a field can undergo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// User replaced the value; validity is recomputed immediately.
    Edit(String),
    /// User replaced the value; validity is left for a later `Revalidate`.
    Input(String),
    /// Focus left the field; re-validate the unchanged value.
    Commit,
    /// A debounced recomputation fired; re-validate the unchanged value.
    Revalidate,
}

impl FieldAction {
    /// Variant name without the carried value, for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Edit(_) => "edit",
            Self::Input(_) => "input",
            Self::Commit => "commit",
            Self::Revalidate => "revalidate",
        }
    }
}

/// Produces the next field state.
///
/// The logic is validator-agnostic: the email and password fields share it and
/// differ only in the `validate` they pass.
///
/// # Examples
///
/// ```
/// use logingate::domain::field::{reduce, FieldAction, FieldState, Validity};
/// use logingate::domain::validation::is_valid_email;
///
/// let state = FieldState::default();
/// let next = reduce(&state, &FieldAction::Edit("a@b.com".into()), is_valid_email);
/// assert_eq!(next.validity, Validity::Valid);
/// ```
#[must_use]
pub fn reduce(state: &FieldState, action: &FieldAction, validate: Validator) -> FieldState {
    match action {
        FieldAction::Edit(value) => FieldState {
            value: value.clone(),
            validity: Validity::from_verdict(validate(value)),
        },
        FieldAction::Input(value) => FieldState {
            value: value.clone(),
            validity: state.validity,
        },
        FieldAction::Commit | FieldAction::Revalidate => FieldState {
            value: state.value.clone(),
            validity: Validity::from_verdict(validate(&state.value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{is_valid_email, is_valid_password};

    fn states() -> Vec<FieldState> {
        vec![
            FieldState::default(),
            FieldState::new("a@b.com", Validity::Invalid),
            FieldState::new("short", Validity::Valid),
            FieldState::new("longenough", Validity::Unknown),
        ]
    }

    #[test]
    fn edit_sets_value_and_recomputes_validity() {
        for state in states() {
            for v in ["", "a@", "noat.com", "longenough"] {
                let next = reduce(&state, &FieldAction::Edit(v.to_string()), is_valid_email);
                assert_eq!(next.value, v);
                assert_eq!(next.validity, Validity::from_verdict(is_valid_email(v)));
            }
        }
    }

    #[test]
    fn commit_keeps_value_and_is_idempotent() {
        for state in states() {
            let once = reduce(&state, &FieldAction::Commit, is_valid_password);
            let twice = reduce(&once, &FieldAction::Commit, is_valid_password);
            assert_eq!(once.value, state.value);
            assert_eq!(once.validity, Validity::from_verdict(is_valid_password(&state.value)));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn commit_on_fresh_field_evaluates_empty_value() {
        let next = reduce(&FieldState::default(), &FieldAction::Commit, is_valid_email);
        assert_eq!(next, FieldState::new("", Validity::Invalid));
    }

    #[test]
    fn input_defers_validity() {
        let state = FieldState::new("a@b", Validity::Valid);
        let next = reduce(&state, &FieldAction::Input("ab".into()), is_valid_email);
        assert_eq!(next, FieldState::new("ab", Validity::Valid));

        let settled = reduce(&next, &FieldAction::Revalidate, is_valid_email);
        assert_eq!(settled.validity, Validity::Invalid);
    }
}
