// Copyright 2025 Cowboy AI, LLC.

//! Why a typed lookup did not produce the requested shape
//!
//! The checks run in a fixed order: containment, then nullness, then the
//! variant tag. A null at a present key is therefore always `NullValue`,
//! never `UnexpectedType`.

use std::fmt::Display;

use thiserror::Error;

use super::{Json, JsonKind};

/// A lookup failure: the key is absent, null, or holds the wrong shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum FailedLookup {
    /// The key is not in the object
    #[error("Missing key: {key}")]
    MissingKey {
        /// Requested key
        key: String,
    },

    /// The key is present but bound to null
    #[error("Null value at key: {key}")]
    NullValue {
        /// Requested key
        key: String,
    },

    /// The key holds a value of another shape
    #[error("Unexpected type at key {key}: expected {expected}, found {}", .actual.kind())]
    UnexpectedType {
        /// Requested key
        key: String,
        /// Requested shape
        expected: JsonKind,
        /// The value actually found
        actual: Json,
    },
}

impl FailedLookup {
    /// Create a missing key failure
    pub fn missing_key(key: impl Into<String>) -> Self {
        FailedLookup::MissingKey { key: key.into() }
    }

    /// Create a null value failure
    pub fn null_value(key: impl Into<String>) -> Self {
        FailedLookup::NullValue { key: key.into() }
    }

    /// Create an unexpected type failure
    pub fn unexpected_type(key: impl Into<String>, expected: JsonKind, actual: Json) -> Self {
        FailedLookup::UnexpectedType {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// The key that was looked up
    pub fn key(&self) -> &str {
        match self {
            FailedLookup::MissingKey { key }
            | FailedLookup::NullValue { key }
            | FailedLookup::UnexpectedType { key, .. } => key,
        }
    }
}

/// A lookup failure, or a correctly shaped payload that could not be
/// interpreted as the requested domain value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum JsonInterpretationFailure {
    /// Missing key, null value or unexpected type
    #[error(transparent)]
    Lookup(#[from] FailedLookup),

    /// The shape matched but the transform rejected the payload
    #[error("Failed to parse key {key}: {reason}")]
    FailedParse {
        /// Requested key
        key: String,
        /// The payload handed to the transform
        actual: Json,
        /// The transform's error message
        reason: String,
    },
}

impl JsonInterpretationFailure {
    /// Create a parse failure
    pub fn failed_parse(key: impl Into<String>, actual: impl Into<Json>, reason: impl Display) -> Self {
        JsonInterpretationFailure::FailedParse {
            key: key.into(),
            actual: actual.into(),
            reason: reason.to_string(),
        }
    }

    /// The key that was looked up
    pub fn key(&self) -> &str {
        match self {
            JsonInterpretationFailure::Lookup(lookup) => lookup.key(),
            JsonInterpretationFailure::FailedParse { key, .. } => key,
        }
    }

    /// The lookup failure, if this is one
    pub fn as_lookup(&self) -> Option<&FailedLookup> {
        match self {
            JsonInterpretationFailure::Lookup(lookup) => Some(lookup),
            JsonInterpretationFailure::FailedParse { .. } => None,
        }
    }
}
