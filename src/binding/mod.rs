// Copyright 2025 Cowboy AI, LLC.

//! Lazy field bindings
//!
//! A consuming type declares "this field, read from the underlying object,
//! coerced to this type" without validating the whole document up front.
//!
//! - [`Binding`]: a reusable recipe; the key arrives at evaluation time
//! - [`LazyField`]: a recipe bound to an object and a key, cached on first read
//! - [`Checked`] / [`Required`]: whether reads keep the `Outcome` or unwrap it
//! - [`json_record!`](crate::json_record): declares a consumer whose keys come
//!   from its field names

mod field;
mod recipe;
mod record;

pub use field::{BindingMode, Checked, LazyField, Required};
pub use recipe::{bind, Binding};
pub use record::{JsonWrapper, ToJsonObject};
