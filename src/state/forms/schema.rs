//! Registration schema: per-field rules plus the password confirmation check
//!
//! The rules are declared on [`RegistrationInput`] with `validator` attributes.
//! [`validate`] runs them and folds the result into a [`FieldErrors`] map,
//! one message per field.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidateLength, ValidationError, ValidationErrors};

pub const NAME_MAX_LEN: u64 = 250;
pub const PASSWORD_MAX_LEN: u64 = 50;

pub const NAME_TOO_LONG: &str = "name must be at most 250 characters";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 50 characters";

/// Candidate registration data, as typed into the form
#[derive(Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    #[validate(
        length(min = 3, message = "name must be at least 3 characters"),
        custom(function = "name_within_max")
    )]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "email_has_public_domain")
    )]
    pub email: String,
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters"),
        custom(function = "password_within_max")
    )]
    pub password: String,
    // Cross-field refinement, reported on the confirmation field only
    #[validate(must_match(other = "password", message = "Passwords don't match"))]
    pub confirm_password: String,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

// Passwords stay out of logs and panic messages
impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Where an error message is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Password,
    ConfirmPassword,
    /// Not tied to any input; shown once near the submit control
    Root,
}

impl FieldPath {
    /// Key used by the signup request body
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::Name => "name",
            FieldPath::Email => "email",
            FieldPath::Password => "password",
            FieldPath::ConfirmPassword => "confirmPassword",
            FieldPath::Root => "root",
        }
    }

    /// Map a struct field name reported by `validator` back to its path
    fn from_field_name(field: &str) -> Option<Self> {
        match field {
            "name" => Some(FieldPath::Name),
            "email" => Some(FieldPath::Email),
            "password" => Some(FieldPath::Password),
            "confirm_password" | "confirmPassword" => Some(FieldPath::ConfirmPassword),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one message per field, plus one root-level message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldPath, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.messages.get(&path).map(String::as_str)
    }

    /// Attach a message, replacing any existing message for that path
    pub fn set(&mut self, path: FieldPath, message: impl Into<String>) {
        self.messages.insert(path, message.into());
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate in field order, root last
    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &str)> {
        self.messages.iter().map(|(path, msg)| (*path, msg.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, failures) in errors.field_errors() {
            let Some(path) = FieldPath::from_field_name(&field) else {
                continue;
            };
            // First failing rule wins
            if let Some(message) = failures.iter().find_map(|f| f.message.as_deref()) {
                fields.set(path, message);
            }
        }
        fields
    }
}

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn name_within_max(name: &str) -> Result<(), ValidationError> {
    if name.validate_length(None, Some(NAME_MAX_LEN), None) {
        Ok(())
    } else {
        Err(rule_violation("length", NAME_TOO_LONG))
    }
}

fn password_within_max(password: &str) -> Result<(), ValidationError> {
    if password.validate_length(None, Some(PASSWORD_MAX_LEN), None) {
        Ok(())
    } else {
        Err(rule_violation("length", PASSWORD_TOO_LONG))
    }
}

/// Domain must be a dotted host name ending in an alphabetic label of two or
/// more letters; address literals like `[127.0.0.1]` are refused
fn email_has_public_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map_or("", |(_, domain)| domain);
    let public = !domain.starts_with('[')
        && domain.rsplit_once('.').is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });
    if public {
        Ok(())
    } else {
        Err(rule_violation("email", INVALID_EMAIL))
    }
}

/// Validate a candidate against the registration schema
pub fn validate(input: &RegistrationInput) -> Result<(), FieldErrors> {
    input.validate().map_err(FieldErrors::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME_TOO_SHORT: &str = "name must be at least 3 characters";
    const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
    const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

    fn valid_input() -> RegistrationInput {
        RegistrationInput::new("Alice", "alice@example.com", "secret1", "secret1")
    }

    fn errors_of(input: &RegistrationInput) -> FieldErrors {
        validate(input).expect_err("expected validation to fail")
    }

    mod field_rules_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_input_passes() {
            assert!(validate(&valid_input()).is_ok());
        }

        #[test]
        fn test_short_names_fail_with_exact_message() {
            for name in ["", "A", "Al"] {
                let input = RegistrationInput {
                    name: name.to_string(),
                    ..valid_input()
                };
                let errors = errors_of(&input);
                assert_eq!(errors.get(FieldPath::Name), Some(NAME_TOO_SHORT));
            }
        }

        #[test]
        fn test_name_length_bounds_are_inclusive() {
            for len in [3, NAME_MAX_LEN as usize] {
                let input = RegistrationInput {
                    name: "x".repeat(len),
                    ..valid_input()
                };
                assert!(validate(&input).is_ok(), "length {len} should pass");
            }
        }

        #[test]
        fn test_name_too_long() {
            let input = RegistrationInput {
                name: "x".repeat(NAME_MAX_LEN as usize + 1),
                ..valid_input()
            };
            assert_eq!(errors_of(&input).get(FieldPath::Name), Some(NAME_TOO_LONG));
        }

        #[test]
        fn test_name_length_counts_characters_not_bytes() {
            let input = RegistrationInput {
                name: "Zoë".to_string(),
                ..valid_input()
            };
            assert!(validate(&input).is_ok());
        }

        #[test]
        fn test_email_without_at_or_domain_fails() {
            for email in ["", "alice", "alice.example.com", "alice@", "@example.com"] {
                let input = RegistrationInput {
                    email: email.to_string(),
                    ..valid_input()
                };
                let errors = errors_of(&input);
                assert_eq!(
                    errors.get(FieldPath::Email),
                    Some(INVALID_EMAIL),
                    "email {email:?} should be rejected"
                );
            }
        }

        #[test]
        fn test_length_counts_scalar_values_not_utf16_units() {
            // Two emoji are four UTF-16 units but only two characters
            let input = RegistrationInput {
                name: "😀😀".to_string(),
                ..valid_input()
            };
            assert_eq!(errors_of(&input).get(FieldPath::Name), Some(NAME_TOO_SHORT));

            let input = RegistrationInput {
                name: "😀😀😀".to_string(),
                ..valid_input()
            };
            assert!(validate(&input).is_ok());
        }

        #[test]
        fn test_email_without_public_domain_fails() {
            for email in ["alice@localhost", "a@b", "a@b.c", "a@[127.0.0.1]", "a@example.c0m"] {
                let input = RegistrationInput {
                    email: email.to_string(),
                    ..valid_input()
                };
                let errors = errors_of(&input);
                assert_eq!(
                    errors.get(FieldPath::Email),
                    Some(INVALID_EMAIL),
                    "email {email:?} should be rejected"
                );
                assert_eq!(errors.len(), 1);
            }
        }

        #[test]
        fn test_email_with_subdomains_and_plus_passes() {
            for email in ["a@b.co", "first.last+tag@mail.example.org"] {
                let input = RegistrationInput {
                    email: email.to_string(),
                    ..valid_input()
                };
                assert!(validate(&input).is_ok(), "email {email:?} should pass");
            }
        }

        #[test]
        fn test_short_password_fails_with_exact_message() {
            let input = RegistrationInput::new("Alice", "alice@example.com", "abc", "abc");
            let errors = errors_of(&input);
            assert_eq!(errors.get(FieldPath::Password), Some(PASSWORD_TOO_SHORT));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_password_too_long() {
            let long = "p".repeat(PASSWORD_MAX_LEN as usize + 1);
            let input = RegistrationInput::new("Alice", "alice@example.com", long.clone(), long);
            assert_eq!(
                errors_of(&input).get(FieldPath::Password),
                Some(PASSWORD_TOO_LONG)
            );
        }

        #[test]
        fn test_confirm_password_has_no_length_rule() {
            let input = RegistrationInput::new("Alice", "alice@example.com", "secret1", "");
            let errors = errors_of(&input);
            assert_eq!(
                errors.get(FieldPath::ConfirmPassword),
                Some(PASSWORDS_DONT_MATCH)
            );
        }
    }

    mod cross_field_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch_attaches_to_confirm_password_only() {
            let input = RegistrationInput::new("Alice", "alice@example.com", "secret1", "secret2");
            let errors = errors_of(&input);
            assert_eq!(
                errors.get(FieldPath::ConfirmPassword),
                Some(PASSWORDS_DONT_MATCH)
            );
            assert_eq!(errors.get(FieldPath::Password), None);
            assert_eq!(errors.get(FieldPath::Root), None);
        }

        #[test]
        fn test_mismatch_reported_alongside_other_failures() {
            let input = RegistrationInput::new("Al", "nope", "abc", "abcd");
            let errors = errors_of(&input);
            assert_eq!(errors.get(FieldPath::Name), Some(NAME_TOO_SHORT));
            assert_eq!(errors.get(FieldPath::Email), Some(INVALID_EMAIL));
            assert_eq!(errors.get(FieldPath::Password), Some(PASSWORD_TOO_SHORT));
            assert_eq!(
                errors.get(FieldPath::ConfirmPassword),
                Some(PASSWORDS_DONT_MATCH)
            );
            assert_eq!(errors.len(), 4);
        }

        #[test]
        fn test_validation_is_deterministic() {
            let input = RegistrationInput::new("Al", "nope", "abc", "abcd");
            assert_eq!(validate(&input), validate(&input));
        }
    }

    mod scenario_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scenario_a_fails_only_on_name() {
            let input = RegistrationInput::new("Al", "a@b.com", "secret1", "secret1");
            let errors = errors_of(&input);
            let paths: Vec<_> = errors.iter().map(|(path, _)| path).collect();
            assert_eq!(paths, vec![FieldPath::Name]);
        }

        #[test]
        fn test_scenario_b_fails_only_on_confirm_password() {
            let input = RegistrationInput::new("Alice", "alice@example.com", "secret1", "secret2");
            let errors = errors_of(&input);
            let collected: Vec<_> = errors.iter().collect();
            assert_eq!(
                collected,
                vec![(FieldPath::ConfirmPassword, PASSWORDS_DONT_MATCH)]
            );
        }

        #[test]
        fn test_scenario_c_passes() {
            assert!(validate(&valid_input()).is_ok());
        }
    }

    mod field_errors_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_replaces_existing_message() {
            let mut errors = FieldErrors::new();
            errors.set(FieldPath::Root, "first");
            errors.set(FieldPath::Root, "second");
            assert_eq!(errors.get(FieldPath::Root), Some("second"));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_iter_orders_root_last() {
            let mut errors = FieldErrors::new();
            errors.set(FieldPath::Root, "root");
            errors.set(FieldPath::Email, "email");
            errors.set(FieldPath::Name, "name");
            let paths: Vec<_> = errors.iter().map(|(path, _)| path).collect();
            assert_eq!(
                paths,
                vec![FieldPath::Name, FieldPath::Email, FieldPath::Root]
            );
        }

        #[test]
        fn test_from_validation_errors_keeps_known_fields() {
            let mut raw = ValidationErrors::new();
            raw.add("email", rule_violation("email", INVALID_EMAIL));
            raw.add("unknown", rule_violation("custom", "ignored"));
            let errors = FieldErrors::from(raw);
            assert_eq!(errors.get(FieldPath::Email), Some(INVALID_EMAIL));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_clear() {
            let mut errors = FieldErrors::new();
            errors.set(FieldPath::Name, "name");
            errors.set(FieldPath::Email, "email");
            errors.clear();
            assert!(errors.is_empty());
        }
    }

    mod serialization_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_request_body_uses_camel_case_keys() {
            let json = serde_json::to_value(valid_input()).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "name": "Alice",
                    "email": "alice@example.com",
                    "password": "secret1",
                    "confirmPassword": "secret1",
                })
            );
        }

        #[test]
        fn test_debug_redacts_passwords() {
            let debug_str = format!("{:?}", valid_input());
            assert!(debug_str.contains("alice@example.com"));
            assert!(!debug_str.contains("secret1"));
        }
    }
}
