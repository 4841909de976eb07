// Copyright 2025 Cowboy AI, LLC.

//! Memoized field thunks
//!
//! A [`LazyField`] is either unevaluated (holding its recipe) or evaluated
//! (holding the cached outcome). The first read runs the recipe; every later
//! read returns the cached value verbatim. `OnceLock` publishes exactly one
//! result per field, even when several threads race on the first read.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use tracing::{debug, trace};

use super::recipe::Binding;
use crate::either::Either;
use crate::errors::{JsonError, JsonResult};
use crate::json::{JsonInterpretationFailure, JsonObject};
use crate::outcome::Outcome;

/// How a field read presents its cached outcome
pub trait BindingMode {
    /// What a read returns
    type Read<'a, T: 'a>;

    /// Present the cached outcome of the field named `key`
    fn read<'a, T: 'a>(
        key: &str,
        outcome: &'a Outcome<JsonInterpretationFailure, T>,
    ) -> Self::Read<'a, T>;
}

/// Outcome-preserving mode: reads return the cached `Outcome`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checked;

/// Unwrapping mode: reads return the value, or a [`JsonError::Field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required;

impl BindingMode for Checked {
    type Read<'a, T: 'a> = &'a Outcome<JsonInterpretationFailure, T>;

    fn read<'a, T: 'a>(
        _key: &str,
        outcome: &'a Outcome<JsonInterpretationFailure, T>,
    ) -> Self::Read<'a, T> {
        outcome
    }
}

impl BindingMode for Required {
    type Read<'a, T: 'a> = JsonResult<&'a T>;

    fn read<'a, T: 'a>(
        key: &str,
        outcome: &'a Outcome<JsonInterpretationFailure, T>,
    ) -> Self::Read<'a, T> {
        match outcome {
            Either::Right(value) => Ok(value),
            Either::Left(failure) => Err(JsonError::field(key, failure.clone())),
        }
    }
}

/// A field computed from its source object on first read and cached after.
pub struct LazyField<T, M = Checked> {
    source: JsonObject,
    key: String,
    binding: Binding<JsonInterpretationFailure, T>,
    cell: OnceLock<Outcome<JsonInterpretationFailure, T>>,
    _mode: PhantomData<M>,
}

impl<T: 'static, M: BindingMode> LazyField<T, M> {
    /// Bind `key` of `source` through `binding`.
    ///
    /// Nothing is evaluated until the first read.
    pub fn new<F>(source: &JsonObject, key: impl Into<String>, binding: Binding<F, T>) -> Self
    where
        F: Into<JsonInterpretationFailure> + 'static,
    {
        Self {
            source: source.clone(),
            key: key.into(),
            binding: binding.widen(),
            cell: OnceLock::new(),
            _mode: PhantomData,
        }
    }

    /// The key this field reads
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True once the first read has happened
    pub fn is_evaluated(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The cached outcome, evaluating on first call
    pub fn outcome(&self) -> &Outcome<JsonInterpretationFailure, T> {
        self.cell.get_or_init(|| {
            trace!(key = %self.key, "evaluating lazy field binding");
            self.binding
                .evaluate(&self.source, &self.key)
                .peek_failure(|failure| debug!(key = %self.key, %failure, "field binding failed"))
        })
    }

    /// Read the field in this field's mode
    pub fn read(&self) -> M::Read<'_, T> {
        M::read(&self.key, self.outcome())
    }
}

impl<T, M> fmt::Debug for LazyField<T, M>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyField")
            .field("key", &self.key)
            .field("cached", &self.cell.get())
            .finish()
    }
}
