//! Per-request validation error accumulator.
//!
//! A [`Validator`] collects at most one message per field. Callers run all of
//! their checks against the same instance and inspect [`Validator::valid`]
//! once at the end, so a single response can report every invalid field.

pub mod rules;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub use rules::Rule;

/// Field name -> first error message recorded for that field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn check(&mut self, constraint: bool, field: &str, message: &str) {
        if !constraint {
            self.add_error(field, message);
        }
    }

    /// Runs every rule against `value` in order, recording each failure.
    ///
    /// Returns `true` when all rules passed for this call.
    pub fn check_with_rules(&mut self, field: &str, value: &str, rules: &[&dyn Rule]) -> bool {
        let mut passed = true;
        for rule in rules {
            if let Err(message) = rule.check(value) {
                self.add_error(field, message);
                passed = false;
            }
        }
        passed
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

#[derive(Serialize)]
struct Report<'a> {
    validation_errors: &'a BTreeMap<String, String>,
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = Report {
            validation_errors: &self.errors,
        };
        let rendered = serde_json::to_string_pretty(&report).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
