// Copyright 2025 Cowboy AI, LLC.

//! Outcome vocabulary over [`Either`]
//!
//! `Outcome<F, S>` is `Either<F, S>` read as Failure/Success. There is no new
//! runtime representation, only combinators named for fallible work:
//!
//! - `success` / `failure` construct
//! - `map`, `flat_map`, `peek` act on the Success side
//! - `map_failure`, `flat_map_failure`, `peek_failure` act on the Failure side
//! - `or_throw` is the single sanctioned exit into the native error channel
//!
//! Failures are values. Nothing here discards one: every combinator either
//! preserves the failure unchanged or folds it into a result on request.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use anyhow::anyhow;
use tracing::{debug, warn};

use crate::either::Either;
use crate::errors::{EnvironmentFatal, JsonError};

/// `Either` specialized to a Failure (`Left`) / Success (`Right`) convention
pub type Outcome<F, S> = Either<F, S>;

impl<F, S> Either<F, S> {
    /// Construct a Success.
    pub fn success(value: S) -> Self {
        Either::Right(value)
    }

    /// Construct a Failure.
    pub fn failure(value: F) -> Self {
        Either::Left(value)
    }

    /// True on Success.
    pub fn is_success(&self) -> bool {
        self.is_right()
    }

    /// True on Failure.
    pub fn is_failure(&self) -> bool {
        self.is_left()
    }

    /// Transform the Success value.
    pub fn map<S2, G>(self, f: G) -> Outcome<F, S2>
    where
        G: FnOnce(S) -> S2,
    {
        self.map_right(f)
    }

    /// Transform the Failure value.
    pub fn map_failure<F2, G>(self, f: G) -> Outcome<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        self.map_left(f)
    }

    /// Sequence a dependent fallible step; a Failure skips it.
    pub fn flat_map<F2, S2, G>(self, f: G) -> Outcome<F2, S2>
    where
        G: FnOnce(S) -> Outcome<F2, S2>,
        F: Into<F2>,
    {
        self.flat_map_right(f)
    }

    /// Attempt recovery from a Failure; a Success skips it.
    pub fn flat_map_failure<F2, S2, G>(self, f: G) -> Outcome<F2, S2>
    where
        G: FnOnce(F) -> Outcome<F2, S2>,
        S: Into<S2>,
    {
        self.flat_map_left(f)
    }

    /// The Success value, or `None`.
    pub fn or_none(self) -> Option<S> {
        self.right()
    }

    /// The Success value, or one derived from the Failure.
    pub fn or_else<G>(self, f: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        self.map_failure(f).join()
    }

    /// The Success value, or `default`.
    pub fn unwrap_or(self, default: S) -> S {
        self.or_else(|_| default)
    }

    /// Observe the Success value.
    pub fn peek<G>(self, f: G) -> Self
    where
        G: FnOnce(&S),
    {
        self.peek_right(f)
    }

    /// Observe the Failure value.
    pub fn peek_failure<G>(self, f: G) -> Self
    where
        G: FnOnce(&F),
    {
        self.peek_left(f)
    }

    /// Convert into a std `Result`.
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }

    /// Leave the Outcome world: a Failure becomes a native error.
    pub fn or_throw(self) -> anyhow::Result<S>
    where
        F: std::error::Error + Send + Sync + 'static,
    {
        self.or_throw_with(anyhow::Error::new)
    }

    /// Leave the Outcome world, converting the Failure with `f` first.
    pub fn or_throw_with<E, G>(self, f: G) -> anyhow::Result<S>
    where
        G: FnOnce(F) -> E,
        E: Into<anyhow::Error>,
    {
        match self {
            Either::Left(failure) => Err(f(failure).into()),
            Either::Right(success) => Ok(success),
        }
    }

    /// Leave the Outcome world for a Failure that is not itself an error.
    ///
    /// The Failure is kept by its display form as [`JsonError::Failure`].
    pub fn or_throw_display(self) -> anyhow::Result<S>
    where
        F: std::fmt::Display,
    {
        self.or_throw_with(|failure| JsonError::Failure(failure.to_string()))
    }
}

impl<F1, F2, S> Either<F1, Either<F2, S>> {
    /// Collapse a nested Outcome, widening both failure types into `F`.
    pub fn flatten<F>(self) -> Outcome<F, S>
    where
        F1: Into<F>,
        F2: Into<F>,
    {
        self.flatten_left()
    }
}

/// Lift any value into an Outcome.
pub trait IntoOutcome: Sized {
    /// Wrap `self` as a Success.
    fn success<F>(self) -> Outcome<F, Self> {
        Either::Right(self)
    }

    /// Wrap `self` as a Failure.
    fn failure<S>(self) -> Outcome<Self, S> {
        Either::Left(self)
    }
}

impl<T> IntoOutcome for T {}

/// Run `action`, turning an error of kind `F` into a Failure.
///
/// Errors of any other kind come back in the outer `Err`; they are never
/// masked as a Failure.
pub fn catching<F, S, A>(action: A) -> anyhow::Result<Outcome<F, S>>
where
    A: FnOnce() -> anyhow::Result<S>,
    F: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    match action() {
        Ok(value) => Ok(Either::Right(value)),
        Err(err) => match err.downcast::<F>() {
            Ok(expected) => Ok(Either::Left(expected)),
            Err(other) => {
                debug!(error = %other, "re-raising error outside the caught kind");
                Err(other)
            }
        },
    }
}

/// Run `action`, turning any error or panic into a Failure.
///
/// [`EnvironmentFatal`] conditions are the exception: an error carrying one is
/// returned in the outer `Err`, and a panic carrying one is resumed.
pub fn outcome_of<S, A>(action: A) -> Result<Outcome<anyhow::Error, S>, EnvironmentFatal>
where
    A: FnOnce() -> anyhow::Result<S> + UnwindSafe,
{
    match panic::catch_unwind(action) {
        Ok(Ok(value)) => Ok(Either::Right(value)),
        Ok(Err(err)) => match err.downcast_ref::<EnvironmentFatal>() {
            Some(fatal) => Err(*fatal),
            None => Ok(Either::Left(err)),
        },
        Err(payload) => {
            if payload.is::<EnvironmentFatal>() {
                panic::resume_unwind(payload);
            }
            let message = panic_message(&*payload);
            warn!(%message, "computation panicked; converted to failure");
            Ok(Either::Left(anyhow!("computation panicked: {message}")))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Combine two Outcomes when both succeed; otherwise the first Failure.
pub fn zip_with<F, S, S1, S2, G>(
    first: Outcome<F, S1>,
    second: Outcome<F, S2>,
    f: G,
) -> Outcome<F, S>
where
    G: FnOnce(S1, S2) -> Outcome<F, S>,
{
    match (first, second) {
        (Either::Right(a), Either::Right(b)) => f(a, b),
        (Either::Left(failure), _) | (_, Either::Left(failure)) => Either::Left(failure),
    }
}
