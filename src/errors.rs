// Copyright 2025 Cowboy AI, LLC.

//! Error types raised at the boundary between `Outcome` values and native errors

use thiserror::Error;

use crate::json::JsonInterpretationFailure;

/// Errors produced when a structured failure leaves the `Outcome` world
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    /// A required field binding could not be read
    #[error("Field `{field}` unavailable: {source}")]
    Field {
        /// Name of the bound field
        field: String,
        /// Why the lookup or interpretation failed
        #[source]
        source: JsonInterpretationFailure,
    },

    /// An externally parsed document was `null` at the top level
    #[error("Null document: a JSON tree must have a non-null root")]
    NullDocument,

    /// Only finite floats have a JSON number representation
    #[error("Non-finite number: {0}")]
    NonFiniteNumber(f64),

    /// A failure converted with its display form
    #[error("Failure: {0}")]
    Failure(String),
}

/// Result type for boundary operations
pub type JsonResult<T> = Result<T, JsonError>;

impl JsonError {
    /// Wrap a field failure
    pub fn field(field: impl Into<String>, source: impl Into<JsonInterpretationFailure>) -> Self {
        JsonError::Field {
            field: field.into(),
            source: source.into(),
        }
    }

    /// Check if this is a lookup failure (missing, null or mistyped field)
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            JsonError::Field {
                source: JsonInterpretationFailure::Lookup(_),
                ..
            }
        )
    }

    /// Check if this is a parse failure on a correctly shaped field
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            JsonError::Field {
                source: JsonInterpretationFailure::FailedParse { .. },
                ..
            }
        )
    }
}

/// Conditions that mean the execution environment itself is compromised.
///
/// These are never folded into a `Failure`; see [`outcome_of`](crate::outcome_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EnvironmentFatal {
    /// The running computation was asked to stop
    #[error("Computation interrupted")]
    Interrupted,

    /// Recursion ran out of stack
    #[error("Stack exhausted")]
    StackExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::FailedLookup;

    #[test]
    fn test_error_display_messages() {
        let err = JsonError::field("name", FailedLookup::missing_key("name"));
        assert_eq!(err.to_string(), "Field `name` unavailable: Missing key: name");

        assert_eq!(
            JsonError::NullDocument.to_string(),
            "Null document: a JSON tree must have a non-null root"
        );
        assert_eq!(
            JsonError::NonFiniteNumber(f64::INFINITY).to_string(),
            "Non-finite number: inf"
        );
        assert_eq!(
            EnvironmentFatal::StackExhausted.to_string(),
            "Stack exhausted"
        );
    }

    #[test]
    fn test_failure_classification() {
        let lookup = JsonError::field("age", FailedLookup::null_value("age"));
        assert!(lookup.is_lookup_failure());
        assert!(!lookup.is_parse_failure());

        let parse = JsonError::field(
            "born",
            JsonInterpretationFailure::failed_parse("born", "nope", "invalid date"),
        );
        assert!(parse.is_parse_failure());
        assert!(!parse.is_lookup_failure());

        assert!(!JsonError::NullDocument.is_lookup_failure());
    }
}
