// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cache key resolution.
//!
//! A [`Resolver`] maps the arguments of one call to the key its result is
//! cached under. Calls resolving to the same key share a cache entry, even if
//! their arguments differ.

use callwrap_core::{CallwrapError, Result};
use core::hash::Hash;
use serde::Serialize;

/// Maps call arguments to a cache key.
///
/// Any closure `Fn(&A) -> K` is a resolver:
///
/// ```
/// use callwrap_memoize::Resolver;
///
/// let sum = |args: &(i32, i32)| args.0 + args.1;
/// assert_eq!(sum.resolve(&(1, 2)).unwrap(), sum.resolve(&(2, 1)).unwrap());
/// ```
pub trait Resolver<A: ?Sized> {
    /// Key type stored in the cache.
    type Key: Eq + Hash;

    /// Derives the cache key for `args`.
    ///
    /// # Errors
    /// Returns `CallwrapError::KeyResolution` when no key can be derived.
    fn resolve(&self, args: &A) -> Result<Self::Key>;
}

impl<A, K, F> Resolver<A> for F
where
    A: ?Sized,
    K: Eq + Hash,
    F: Fn(&A) -> K,
{
    type Key = K;

    fn resolve(&self, args: &A) -> Result<K> {
        Ok(self(args))
    }
}

/// Default resolver: the JSON serialisation of the whole argument value.
///
/// Keys are structural, so they tell apart both values and types as well as
/// argument order. A single argument keys as its own JSON value (`0` becomes
/// `0`, `"0"` becomes `"0"`). Multi-argument calls pass a tuple, which
/// serialises as a JSON array (`(0, "0")` becomes `[0,"0"]`); a one-element
/// tuple `(0,)` becomes `[0]`.
///
/// Arguments without a `Serialize` impl (closures, raw pointers) are rejected
/// at compile time; use a custom resolver for them. Non-finite floats all
/// serialise as `null` and therefore share a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResolver;

impl<A> Resolver<A> for JsonResolver
where
    A: Serialize + ?Sized,
{
    type Key = String;

    fn resolve(&self, args: &A) -> Result<String> {
        serde_json::to_string(args).map_err(|err| CallwrapError::key_resolution(err.to_string()))
    }
}
