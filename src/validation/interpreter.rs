//! Server-side interpreter for the rule table.
//!
//! Pure and stateless: given a [`FieldSource`] it walks a rule table and
//! collects one [`FieldError`] per failing field. Individual constraint
//! failures are expressed as `validator::ValidationError`s, the same type the
//! rest of the crate's validation speaks.

use std::borrow::Cow;

use regex::Regex;
use validator::{ValidateEmail, ValidationError};

use super::rules::{Constraint, FieldRules, compiled_pattern};
use super::{FieldError, FieldSource};

/// Evaluates every field of `rules` against `source`.
///
/// Returns all failing fields at once, in table order, each with the message
/// of its first failing constraint.
pub fn validate(rules: &[FieldRules], source: &impl FieldSource) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules
        .iter()
        .filter_map(|field_rules| {
            validate_field(field_rules, source)
                .err()
                .map(|error| FieldError::from_validation(field_rules.field, &error))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Evaluates one field, stopping at the first failing constraint.
pub fn validate_field(
    field_rules: &FieldRules,
    source: &impl FieldSource,
) -> Result<(), ValidationError> {
    let raw = source.field_value(field_rules.field).unwrap_or("");
    let value = raw.trim();

    if field_rules.optional && value.is_empty() {
        return Ok(());
    }

    for constraint in field_rules.constraints {
        if !satisfies(constraint, raw, value, source) {
            return Err(ValidationError::new(constraint.code())
                .with_message(Cow::Borrowed(constraint.message())));
        }
    }

    Ok(())
}

fn satisfies(constraint: &Constraint, raw: &str, value: &str, source: &impl FieldSource) -> bool {
    match *constraint {
        Constraint::Required { .. } => !value.is_empty(),
        Constraint::Length { min, max, .. } => {
            let length = value.chars().count();
            min.is_none_or(|min| length >= min) && max.is_none_or(|max| length <= max)
        }
        Constraint::Pattern { regex, .. } => value.is_empty() || matches_pattern(regex, value),
        // The pattern is what the browser checks; `validate_email` only narrows it.
        Constraint::Email { regex, .. } => {
            value.is_empty() || (matches_pattern(regex, value) && value.to_string().validate_email())
        }
        Constraint::Composition {
            lowercase,
            uppercase,
            digit,
            ..
        } => {
            (!lowercase || value.chars().any(|c| c.is_ascii_lowercase()))
                && (!uppercase || value.chars().any(|c| c.is_ascii_uppercase()))
                && (!digit || value.chars().any(|c| c.is_ascii_digit()))
        }
        Constraint::NumericRange { min, max, .. } => value
            .parse::<i64>()
            .map(|number| (min..=max).contains(&number))
            .unwrap_or(false),
        // Compared untrimmed: whitespace is significant in a password.
        Constraint::Matches { other, .. } => raw == source.field_value(other).unwrap_or(""),
        Constraint::OneOf { values, .. } => values.contains(&value),
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    if let Some(regex) = compiled_pattern(pattern) {
        return regex.is_match(value);
    }

    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(value),
        Err(e) => {
            log::error!("invalid rule pattern {}: {}", pattern, e);
            false
        }
    }
}
