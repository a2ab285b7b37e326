// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Memoizer: wraps a function with a result cache keyed by a resolver over
//! its arguments.
//!
//! # Overview
//!
//! - **[`memoize`]** / **[`memoize_with`]** - wrap an infallible function
//! - **[`try_memoize`]** / **[`try_memoize_with`]** - wrap a function returning
//!   `Result`; errors are never cached
//! - **[`Resolver`]** - maps arguments to a cache key; any `Fn(&A) -> K` qualifies
//! - **[`JsonResolver`]** - default resolver, structural JSON keys
//! - **[`CacheStats`]** - hit / miss / insert counters per memoized function
//!
//! Arguments are passed as one value. Use a tuple for several arguments and
//! `()` for none. A function that needs a receiver takes it as part of that
//! value, e.g. `(Arc<Service>, id)`, and a custom resolver can leave the
//! receiver out of the key.
//!
//! # Example
//!
//! ```
//! use callwrap_memoize::memoize;
//!
//! let square = memoize(|x: u64| x * x);
//!
//! assert!(!square.has(&4).unwrap());
//! assert_eq!(square.call(4).unwrap(), 16);
//! assert!(square.has(&4).unwrap());
//!
//! square.delete(&4).unwrap();
//! assert!(!square.has(&4).unwrap());
//! ```

mod cache_stats;
mod memoized;
mod resolver;

pub use cache_stats::CacheStats;
pub use memoized::{memoize, memoize_with, try_memoize, try_memoize_with, Memoized};
pub use resolver::{JsonResolver, Resolver};
