//! Field rules shared by the resource schemas.

use std::borrow::Cow;

use bigdecimal::{BigDecimal, Zero};
use validator::ValidationError;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("blank", "must not be blank"));
    }
    Ok(())
}

/// Exactly ten ASCII digits.
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rule("phone", "must be a 10-digit phone number"));
    }
    Ok(())
}

/// A person's name: not blank and not made of digits.
pub fn person_name(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(rule("name", "must not contain digits"));
    }
    Ok(())
}

pub fn non_negative(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value < BigDecimal::zero() {
        return Err(rule("negative", "must not be negative"));
    }
    Ok(())
}
