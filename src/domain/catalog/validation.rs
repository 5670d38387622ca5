//! Field-level checks shared by catalog records.
//!
//! Checks push into a caller-owned list so one request reports every
//! violation at once.

use crate::domain::foundation::ValidationError;

/// Maximum length for any stored text column.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Length in characters must lie within `min..=max`.
pub(crate) fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(ValidationError::length(field, min, max, len));
    }
}

/// Value must contain something other than whitespace.
pub(crate) fn check_not_blank(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::empty_field(field));
    }
}

/// Minimal address shape: `local@domain.tld`, no whitespace.
pub(crate) fn check_email(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::empty_field(field));
        return;
    }
    if value.chars().any(char::is_whitespace) {
        errors.push(ValidationError::invalid_format(field, "must not contain whitespace"));
        return;
    }
    let Some((local, domain)) = value.split_once('@') else {
        errors.push(ValidationError::invalid_format(field, "missing @ symbol"));
        return;
    };
    let domain_ok = !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false);
    if local.is_empty() || !domain_ok {
        errors.push(ValidationError::invalid_format(field, "not a valid email address"));
    }
}

/// Value must not be negative.
pub(crate) fn check_non_negative(field: &str, value: i64, errors: &mut Vec<ValidationError>) {
    if value < 0 {
        errors.push(ValidationError::out_of_range(field, 0, i64::MAX, value));
    }
}

/// Turns a violation list into `Ok(())` when empty.
pub(crate) fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_errors(value: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_email("email", value, &mut errors);
        errors
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_errors("jane.doe@example.com").is_empty());
        assert!(email_errors("a@b.io").is_empty());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "plain", "@example.com", "jane@", "jane@example", "ja ne@example.com", "a@b@c.com"] {
            assert_eq!(email_errors(bad).len(), 1, "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        check_length("firstName", "Zoë", 2, 3, &mut errors);
        assert!(errors.is_empty());

        check_length("firstName", "Z", 2, 3, &mut errors);
        assert_eq!(errors, vec![ValidationError::length("firstName", 2, 3, 1)]);
    }

    #[test]
    fn negative_values_are_out_of_range() {
        let mut errors = Vec::new();
        check_non_negative("price", 0, &mut errors);
        assert!(errors.is_empty());

        check_non_negative("price", -1, &mut errors);
        assert_eq!(errors.len(), 1);
    }
}
