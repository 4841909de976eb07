// Copyright 2025 Cowboy AI, LLC.

//! The `Either` ADT: a value that is exactly one of two alternatives.
//!
//! Every fallible operation in this crate returns an `Either` (usually under
//! its [`Outcome`](crate::Outcome) alias). By convention `Left` holds the
//! failure or "first" alternative and `Right` holds the success value.
//!
//! # Laws
//!
//! 1. Identity: `e.map_right(|x| x) == e`
//! 2. Composition: `e.map_right(f).map_right(g) == e.map_right(|x| g(f(x)))`
//! 3. Left Identity: `Right(a).flat_map_right(f) == f(a)`
//! 4. Right Identity: `e.flat_map_right(Either::Right) == e`
//! 5. Associativity: `e.flat_map_right(f).flat_map_right(g) == e.flat_map_right(|x| f(x).flat_map_right(g))`
//!
//! The same laws hold on the left side.

use serde::{Deserialize, Serialize};

/// A standard Either ADT: Left(L) or Right(R).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Left branch
    Left(L),
    /// Right branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True when the left side is populated.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True when the right side is populated.
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Map over the Left value.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Map over the Right value.
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// The Left value, or `None` on a Right.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The Right value, or `None` on a Left.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Apply whichever function matches the populated side.
    ///
    /// This is the only way out of an `Either` that does not lose a branch.
    pub fn fold<C, FL, FR>(self, if_left: FL, if_right: FR) -> C
    where
        FL: FnOnce(L) -> C,
        FR: FnOnce(R) -> C,
    {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => if_right(r),
        }
    }

    /// bind on the Left side: `Either<L, R> -> (L -> Either<L2, R2>) -> Either<L2, R2>`
    ///
    /// A Right passes through unchanged, widened into `R2`.
    pub fn flat_map_left<L2, R2, F>(self, f: F) -> Either<L2, R2>
    where
        F: FnOnce(L) -> Either<L2, R2>,
        R: Into<R2>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r.into()),
        }
    }

    /// bind on the Right side: `Either<L, R> -> (R -> Either<L2, R2>) -> Either<L2, R2>`
    ///
    /// A Left short-circuits, widened into `L2`. Chaining lookups through this
    /// skips every step after the first failure.
    pub fn flat_map_right<L2, R2, F>(self, f: F) -> Either<L2, R2>
    where
        F: FnOnce(R) -> Either<L2, R2>,
        L: Into<L2>,
    {
        match self {
            Either::Left(l) => Either::Left(l.into()),
            Either::Right(r) => f(r),
        }
    }

    /// Observe the Left value and hand `self` back.
    pub fn peek_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Observe the Right value and hand `self` back.
    pub fn peek_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            f(r);
        }
        self
    }

    /// Exchange the two sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}

impl<A> Either<A, A> {
    /// Collapse to the contained value regardless of side.
    pub fn join(self) -> A {
        match self {
            Either::Left(a) | Either::Right(a) => a,
        }
    }
}

impl<L1, L2, R> Either<L1, Either<L2, R>> {
    /// Collapse a nested Right, widening both left types into `L`.
    pub fn flatten_left<L>(self) -> Either<L, R>
    where
        L1: Into<L>,
        L2: Into<L>,
    {
        match self {
            Either::Left(l) => Either::Left(l.into()),
            Either::Right(inner) => inner.map_left(Into::into),
        }
    }
}

impl<L, R1, R2> Either<Either<L, R1>, R2> {
    /// Collapse a nested Left, widening both right types into `R`.
    pub fn flatten_right<R>(self) -> Either<L, R>
    where
        R1: Into<R>,
        R2: Into<R>,
    {
        match self {
            Either::Left(inner) => inner.map_right(Into::into),
            Either::Right(r) => Either::Right(r.into()),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

/// Lift any value into one side of an `Either`.
pub trait IntoEither: Sized {
    /// Wrap `self` as a Left.
    fn into_left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    /// Wrap `self` as a Right.
    fn into_right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

impl<T> IntoEither for T {}
