//! Reusable string rules.
//!
//! A rule inspects one value and either accepts it or returns the message that
//! should be reported for the field. Parameterized rules are built by the
//! constructor functions below and capture their bounds.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));

/// A stateless predicate over a string value.
pub trait Rule {
    fn check(&self, value: &str) -> Result<(), String>;
}

impl<F> Rule for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn check(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

pub fn non_empty(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(())
}

/// Accepts values whose character count lies in `min..=max`.
///
/// # Panics
///
/// Panics when `min > max`; that is a bug in the caller, not bad input.
pub fn length_between(min: usize, max: usize) -> impl Fn(&str) -> Result<(), String> {
    assert!(
        min <= max,
        "length rule misconfigured: min {min} is greater than max {max}"
    );
    move |value: &str| {
        let len = value.chars().count();
        if len < min {
            return Err(format!("length must be at least {min} characters"));
        }
        if len > max {
            return Err(format!("length must not exceed {max} characters"));
        }
        Ok(())
    }
}

/// Accepts an optionally negative run of ASCII digits.
///
/// `bits == 0` puts no bound on the magnitude; otherwise the value must fit a
/// signed integer of that width.
///
/// # Panics
///
/// Panics when `bits > 64`.
pub fn integer(bits: u32) -> impl Fn(&str) -> Result<(), String> {
    assert!(bits <= 64, "integer rule misconfigured: {bits} bit width");
    move |value: &str| {
        if !INTEGER_RE.is_match(value) {
            return Err("must be a valid integer".to_string());
        }
        if bits > 0 && !fits_signed(value, bits) {
            return Err(format!("number is out of range for a {bits} bit integer"));
        }
        Ok(())
    }
}

fn fits_signed(value: &str, bits: u32) -> bool {
    let Ok(n) = value.parse::<i64>() else {
        return false;
    };
    if bits == 64 {
        return true;
    }
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    (min..=max).contains(&n)
}

pub fn email(value: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(value) {
        return Err("invalid email format".to_string());
    }
    Ok(())
}
