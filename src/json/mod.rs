// Copyright 2025 Cowboy AI, LLC.

//! JSON value model
//!
//! An already-parsed JSON tree as a closed enum, and typed navigation of it.
//! Keyed access never panics and never returns a bare `None`: every accessor
//! answers with an [`Outcome`](crate::Outcome) whose failure says exactly why
//! the requested shape was not found.

mod array;
mod builders;
mod conversions;
mod failure;
mod interop;
mod object;
mod shape;
mod value;

pub use array::JsonArray;
pub use builders::{IntoJsonEntry, NULL};
pub use failure::{FailedLookup, JsonInterpretationFailure};
pub use object::JsonObject;
pub use shape::JsonShape;
pub use value::{Json, JsonKind};
