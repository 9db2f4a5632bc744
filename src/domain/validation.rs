//! Field validators.
//!
//! Both predicates are deliberately weak: an email only needs an `@`, and a
//! password only needs more than six characters once surrounding whitespace
//! is trimmed. `"a@"` is a valid email here, and callers rely on that.

/// Signature shared by every field validator.
pub type Validator = fn(&str) -> bool;

/// Minimum password length is exclusive: seven trimmed characters pass.
const PASSWORD_MIN_EXCLUSIVE: usize = 6;

/// Returns `true` if `value` contains an `@` anywhere.
///
/// # Examples
///
/// ```
/// use logingate::domain::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(is_valid_email("a@"));
/// assert!(!is_valid_email("noat.com"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}

/// Returns `true` if the trimmed `value` is longer than six characters.
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use logingate::domain::validation::is_valid_password;
///
/// assert!(is_valid_password("longenough"));
/// assert!(!is_valid_password("short"));
/// assert!(!is_valid_password("  abcdef  "));
/// ```
#[must_use]
pub fn is_valid_password(value: &str) -> bool {
    value.trim().chars().count() > PASSWORD_MIN_EXCLUSIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_sign_only() {
        for s in ["@", "a@", "@b", "a@b.com", "x y@z"] {
            assert!(is_valid_email(s), "{s:?} should be accepted");
        }
        for s in ["", "noat.com", "a.b", "  "] {
            assert!(!is_valid_email(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn email_matches_contains_for_arbitrary_inputs() {
        let samples = ["", "plain", "with@", "ü@ñ", "@@@", "tab\t@"];
        for s in samples {
            assert_eq!(is_valid_email(s), s.contains('@'));
        }
    }

    #[test]
    fn password_boundary_is_exclusive() {
        assert!(!is_valid_password("123456"));
        assert!(is_valid_password("1234567"));
    }

    #[test]
    fn password_trims_before_counting() {
        assert!(!is_valid_password("   123456   "));
        assert!(is_valid_password("  1234567 "));
        assert!(is_valid_password("12 3456"));
        assert!(!is_valid_password("       "));
    }

    #[test]
    fn password_counts_characters_not_bytes() {
        assert!(!is_valid_password("ééééé"));
        assert!(is_valid_password("ééééééé"));
    }
}
