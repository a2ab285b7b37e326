// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cache_stats::CacheStats;
use crate::resolver::{JsonResolver, Resolver};
use callwrap_core::{debug, IntoCallwrapError, Result};
use core::fmt;
use core::marker::PhantomData;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Memoizes `func` with the default [`JsonResolver`].
///
/// # Example
///
/// ```
/// use callwrap_memoize::memoize;
///
/// let add = memoize(|(x, y): (i32, i32)| x + y);
///
/// assert_eq!(add.call((1, 2)).unwrap(), 3);
/// assert_eq!(add.call((1, 2)).unwrap(), 3); // answered from the cache
/// assert_eq!(add.stats().hits(), 1);
/// ```
pub fn memoize<A, V, F>(func: F) -> Memoized<A, V, F>
where
    A: Serialize,
    F: Fn(A) -> V,
{
    Memoized::new(func, JsonResolver)
}

/// Memoizes `func`, keying the cache by `resolver`.
///
/// # Example
///
/// ```
/// use callwrap_memoize::memoize_with;
///
/// let sum = memoize_with(
///     |args: (i32, i32)| vec![args.0, args.1],
///     |args: &(i32, i32)| args.0 + args.1,
/// );
///
/// assert_eq!(sum.call((1, 2)).unwrap(), vec![1, 2]);
/// assert_eq!(sum.call((2, 1)).unwrap(), vec![1, 2]); // same key: 3
/// ```
pub fn memoize_with<A, V, F, R>(func: F, resolver: R) -> Memoized<A, V, F, R>
where
    F: Fn(A) -> V,
    R: Resolver<A>,
{
    Memoized::new(func, resolver)
}

/// Memoizes a fallible `func` with the default [`JsonResolver`].
///
/// Only `Ok` results are cached; see [`Memoized::try_call`].
pub fn try_memoize<A, V, E, F>(func: F) -> Memoized<A, V, F>
where
    A: Serialize,
    F: Fn(A) -> core::result::Result<V, E>,
{
    Memoized::new(func, JsonResolver)
}

/// Memoizes a fallible `func`, keying the cache by `resolver`.
pub fn try_memoize_with<A, V, E, F, R>(func: F, resolver: R) -> Memoized<A, V, F, R>
where
    F: Fn(A) -> core::result::Result<V, E>,
    R: Resolver<A>,
{
    Memoized::new(func, resolver)
}

/// A function wrapped with a result cache.
///
/// Every instance owns its cache: two `Memoized` around the same function do
/// not share entries. Entries are written once per key and only removed by
/// [`delete`](Self::delete) or [`clear`](Self::clear). There is no eviction,
/// so the cache grows with the number of distinct keys.
///
/// The cache lock is released while the wrapped function runs, so the function
/// may call back into its own memoized wrapper. Two threads missing the same
/// key at once may both compute it; the first stored value is kept and
/// returned to both.
pub struct Memoized<A, V, F, R = JsonResolver>
where
    R: Resolver<A>,
{
    func: F,
    resolver: R,
    cache: Mutex<HashMap<R::Key, V>>,
    stats: CacheStats,
    _args: PhantomData<fn(A)>,
}

impl<A, V, F, R> Memoized<A, V, F, R>
where
    R: Resolver<A>,
{
    pub fn new(func: F, resolver: R) -> Self {
        Self {
            func,
            resolver,
            cache: Mutex::new(HashMap::new()),
            stats: CacheStats::new(),
            _args: PhantomData,
        }
    }

    /// Returns the cached result for `args`, computing and storing it on the
    /// first call for its key.
    ///
    /// A panic in the wrapped function unwinds through this call and leaves
    /// the cache untouched.
    ///
    /// # Errors
    /// Returns `CallwrapError::KeyResolution` when the resolver fails.
    pub fn call(&self, args: A) -> Result<V>
    where
        F: Fn(A) -> V,
        V: Clone,
    {
        let key = self.resolver.resolve(&args)?;
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        let value = (self.func)(args);
        Ok(self.store(key, value))
    }

    /// Like [`call`](Self::call) for a fallible function.
    ///
    /// `Ok` values are cached. An `Err` is returned as
    /// `CallwrapError::UserError` and nothing is cached, so the next call with
    /// the same key runs the function again.
    ///
    /// # Errors
    /// Returns `CallwrapError::KeyResolution` when the resolver fails and
    /// `CallwrapError::UserError` when the wrapped function fails.
    pub fn try_call<E>(&self, args: A) -> Result<V>
    where
        F: Fn(A) -> core::result::Result<V, E>,
        E: std::error::Error + Send + Sync + 'static,
        V: Clone,
    {
        let key = self.resolver.resolve(&args)?;
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        let value = (self.func)(args).map_err(IntoCallwrapError::into_callwrap)?;
        Ok(self.store(key, value))
    }

    /// Whether a result for `args` is cached. Never runs the wrapped function.
    ///
    /// # Errors
    /// Returns `CallwrapError::KeyResolution` when the resolver fails.
    pub fn has(&self, args: &A) -> Result<bool> {
        let key = self.resolver.resolve(args)?;
        Ok(self.cache.lock().contains_key(&key))
    }

    /// Removes the cached result for `args`, returning whether one existed.
    ///
    /// # Errors
    /// Returns `CallwrapError::KeyResolution` when the resolver fails.
    pub fn delete(&self, args: &A) -> Result<bool> {
        let key = self.resolver.resolve(args)?;
        Ok(self.cache.lock().remove(&key).is_some())
    }

    /// Removes every cached result.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        debug!("memoize: clearing {} cached entries", cache.len());
        cache.clear();
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    fn lookup(&self, key: &R::Key) -> Option<V>
    where
        V: Clone,
    {
        let cached = self.cache.lock().get(key).cloned();
        match cached {
            Some(_) => self.stats.record_hit(),
            None => {
                self.stats.record_miss();
                debug!("memoize: cache miss");
            }
        }
        cached
    }

    fn store(&self, key: R::Key, value: V) -> V
    where
        V: Clone,
    {
        let mut cache = self.cache.lock();
        let entries = cache.len();
        match cache.entry(key) {
            // A concurrent caller stored this key first
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => {
                self.stats.record_insert();
                debug!("memoize: cached new entry ({} total)", entries + 1);
                slot.insert(value).clone()
            }
        }
    }
}

impl<A, V, F, R> fmt::Debug for Memoized<A, V, F, R>
where
    R: Resolver<A> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("resolver", &self.resolver)
            .field("entries", &self.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
