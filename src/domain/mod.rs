//! Domain layer: validators, field records, and the login form model.
//!
//! Nothing here touches Zellij, storage, or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`validation`]: Email and password predicates
//! - [`field`]: Field record and the shared reducer
//! - [`form`]: Form model and aggregate validity
//!
//! # Examples
//!
//! ```
//! use logingate::domain::{FieldAction, FieldId, FormState};
//!
//! let mut form = FormState::new();
//! form.apply(FieldId::Email, &FieldAction::Edit("a@b.com".into()));
//! assert_eq!(form.is_form_valid(), None);
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod validation;

pub use error::{LoginGateError, Result};
pub use field::{reduce, FieldAction, FieldState, Validity};
pub use form::{FieldId, FormState};
pub use validation::{is_valid_email, is_valid_password, Validator};
