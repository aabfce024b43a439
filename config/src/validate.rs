//! Aggregated configuration validation errors.
//!
//! DESIGN
//! ======
//! A config object is either fully valid or not produced at all. Validators
//! collect every problem into one [`ConfigValidationError`] whose display
//! separates "missing required" from "invalid value" groups, so an operator
//! can fix the whole environment in a single retry cycle.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// One failed validation, attached to the variable that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    /// The offending raw value, when one was present.
    pub value: Option<String>,
}

impl ValidationError {
    /// A required variable was absent or empty.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self { field: field.into(), message: "required variable not set".to_owned(), value: None }
    }

    /// A variable was present but malformed or out of range.
    #[must_use]
    pub fn invalid(field: impl Into<String>, value: impl Into<String>, expected: &str) -> Self {
        Self {
            field: field.into(),
            message: format!("invalid value, expected {expected}"),
            value: Some(value.into()),
        }
    }

    fn is_missing(&self) -> bool {
        self.message.contains("required")
    }
}

/// Aggregate of every validation failure from one load attempt.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_errors())]
pub struct ConfigValidationError {
    pub errors: Vec<ValidationError>,
}

impl ConfigValidationError {
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Multi-line report grouping missing-required entries apart from
    /// invalid-value entries. Either section is omitted when empty.
    #[must_use]
    pub fn format_errors(&self) -> String {
        let mut out = String::from("configuration validation failed");

        let missing: Vec<&ValidationError> = self.errors.iter().filter(|e| e.is_missing()).collect();
        let invalid: Vec<&ValidationError> = self.errors.iter().filter(|e| !e.is_missing()).collect();

        if !missing.is_empty() {
            out.push_str("\nMissing required variables:");
            for err in missing {
                out.push_str(&format!("\n  - {}: {}", err.field, err.message));
            }
        }
        if !invalid.is_empty() {
            out.push_str("\nInvalid values:");
            for err in invalid {
                match &err.value {
                    Some(value) => out.push_str(&format!("\n  - {}: {} (got \"{}\")", err.field, err.message, value)),
                    None => out.push_str(&format!("\n  - {}: {}", err.field, err.message)),
                }
            }
        }
        out
    }
}
