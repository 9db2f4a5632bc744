//! Login form model: the two field records and the derived aggregate.

use super::field::{reduce, FieldAction, FieldState, Validity};
use super::validation::{is_valid_email, is_valid_password, Validator};

/// Identifies a field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Email,
    Password,
}

impl FieldId {
    /// All fields in focus order.
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    /// Validator bound to this field.
    #[must_use]
    pub fn validator(self) -> Validator {
        match self {
            Self::Email => is_valid_email,
            Self::Password => is_valid_password,
        }
    }

    /// Next field in focus order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }

    /// Previous field in focus order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        // Two fields: previous and next coincide.
        self.next()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "E-mail",
            Self::Password => "Password",
        }
    }
}

/// Both field records of the login form.
///
/// The aggregate validity is never stored; [`FormState::is_form_valid`]
/// derives it on every call, so it cannot drift from the fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub email: FieldState,
    pub password: FieldState,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    /// Applies `action` to field `id` through the shared reducer.
    pub fn apply(&mut self, id: FieldId, action: &FieldAction) {
        let next = reduce(self.field(id), action, id.validator());
        tracing::trace!(
            field = ?id,
            action = action.kind(),
            validity = ?next.validity,
            "field transition"
        );
        *self.field_mut(id) = next;
    }

    /// Aggregate validity.
    ///
    /// - `None` while any field is still [`Validity::Unknown`]
    /// - `Some(true)` only when every field is [`Validity::Valid`]
    /// - `Some(false)` otherwise
    #[must_use]
    pub fn is_form_valid(&self) -> Option<bool> {
        let validities = FieldId::ALL.map(|id| self.field(id).validity);
        if validities.contains(&Validity::Unknown) {
            return None;
        }
        Some(!validities.contains(&Validity::Invalid))
    }

    /// `true` only when the aggregate is known and valid.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.is_form_valid() == Some(true)
    }

    /// First field (in focus order) whose validity is not `Valid`.
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|&id| !self.field(id).validity.is_valid())
    }

    /// Whether field `id` should be drawn with the invalid marker.
    ///
    /// The marker needs both the field to be `Invalid` and the whole form not
    /// to be valid.
    #[must_use]
    pub fn marks_invalid(&self, id: FieldId) -> bool {
        self.field(id).validity == Validity::Invalid && self.is_form_valid() != Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: Validity, password: Validity) -> FormState {
        FormState {
            email: FieldState::new("", email),
            password: FieldState::new("", password),
        }
    }

    #[test]
    fn aggregate_truth_table() {
        use Validity::{Invalid, Unknown, Valid};

        let cases = [
            (Unknown, Unknown, None),
            (Valid, Unknown, None),
            (Unknown, Valid, None),
            (Invalid, Unknown, None),
            (Unknown, Invalid, None),
            (Valid, Invalid, Some(false)),
            (Invalid, Valid, Some(false)),
            (Invalid, Invalid, Some(false)),
            (Valid, Valid, Some(true)),
        ];

        for (email, password, expected) in cases {
            let f = form(email, password);
            assert_eq!(f.is_form_valid(), expected, "{email:?}/{password:?}");
            assert_eq!(f.is_submittable(), expected == Some(true));
        }
    }

    #[test]
    fn first_invalid_prefers_email() {
        assert_eq!(form(Validity::Unknown, Validity::Unknown).first_invalid_field(), Some(FieldId::Email));
        assert_eq!(form(Validity::Valid, Validity::Invalid).first_invalid_field(), Some(FieldId::Password));
        assert_eq!(form(Validity::Valid, Validity::Valid).first_invalid_field(), None);
    }

    #[test]
    fn invalid_marker_requires_invalid_field() {
        let f = form(Validity::Invalid, Validity::Unknown);
        assert!(f.marks_invalid(FieldId::Email));
        assert!(!f.marks_invalid(FieldId::Password));

        let fresh = FormState::new();
        assert!(!fresh.marks_invalid(FieldId::Email));
        assert!(!fresh.marks_invalid(FieldId::Password));
    }

    #[test]
    fn apply_routes_to_field_validator() {
        let mut f = FormState::new();
        f.apply(FieldId::Email, &FieldAction::Edit("longenough".into()));
        f.apply(FieldId::Password, &FieldAction::Edit("longenough".into()));
        assert_eq!(f.email.validity, Validity::Invalid);
        assert_eq!(f.password.validity, Validity::Valid);
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(FieldId::Email.next(), FieldId::Password);
        assert_eq!(FieldId::Password.next(), FieldId::Email);
        assert_eq!(FieldId::Email.previous(), FieldId::Password);
    }
}
