// Copyright 2025 Cowboy AI, LLC.

//! # CIM JSON
//!
//! Typed, failure-aware JSON value model for the Composable Information Machine.
//!
//! This crate provides:
//! - **Either**: a two-variant ADT with structure-preserving transforms
//! - **Outcome**: `Either` read as Failure/Success, the only error-handling
//!   primitive used inside the crate
//! - **Json**: a closed enum over boolean, number, string, object and array
//! - **Typed Fetch**: keyed lookups that fail with `MissingKey`, `NullValue` or
//!   `UnexpectedType`, checked in that order
//! - **Lazy Field Binding**: fields computed from the object on first read and
//!   cached thereafter
//! - **Construction Helpers**: native values into JSON trees, and domain values
//!   back into objects
//!
//! ## Design Principles
//!
//! 1. **Failures are values**: structured failures propagate by being returned
//!    and combined, never by panicking
//! 2. **Immutability**: trees never change after construction; "replace" builds
//!    a new object sharing untouched children
//! 3. **Deferred validation**: a document is checked field by field, as fields
//!    are read
//! 4. **One boundary**: `or_throw` and `Required` reads are where failures
//!    become native errors
//!
//! ```rust
//! use cim_json::{json_object, FailedLookup, Outcome, NULL};
//!
//! let doc = json_object! { "name" => "Scamper", "owner" => NULL };
//!
//! assert_eq!(doc.string("name"), Outcome::success("Scamper".to_string()));
//! assert_eq!(doc.string("owner"), Outcome::failure(FailedLookup::null_value("owner")));
//! assert_eq!(doc.boolean("age"), Outcome::failure(FailedLookup::missing_key("age")));
//! ```

#![warn(missing_docs)]

mod binding;
mod either;
mod errors;
mod json;
mod outcome;

pub use binding::{
    bind, Binding, BindingMode, Checked, JsonWrapper, LazyField, Required, ToJsonObject,
};
pub use either::{Either, IntoEither};
pub use errors::{EnvironmentFatal, JsonError, JsonResult};
pub use json::{
    FailedLookup, IntoJsonEntry, Json, JsonArray, JsonInterpretationFailure, JsonKind,
    JsonObject, JsonShape, NULL,
};
pub use outcome::{catching, outcome_of, zip_with, IntoOutcome, Outcome};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

/// Re-exported so callers can name number payloads without a direct dependency
pub use serde_json::Number;
