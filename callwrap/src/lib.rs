// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Callwrap
//!
//! Three higher-order function wrappers, each in its own crate and
//! re-exported here:
//!
//! - **memoize** ([`callwrap_memoize`]) - caches results per resolved key
//! - **debounce** ([`callwrap_debounce`]) - collapses bursts of calls into one
//!   deferred (trailing) or immediate (leading) invocation
//! - **promisify** ([`callwrap_promisify`]) - turns a function reporting
//!   through a completion handle into one returning a future
//!
//! The three share nothing but the error type and the logging shim from
//! `callwrap-core`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use callwrap::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> callwrap::Result<()> {
//!     let square = memoize(|x: u64| x * x);
//!     assert_eq!(square.call(12)?, 144);
//!
//!     let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(200))?;
//!     save.call("draft".to_string());
//!
//!     let double = promisify(|x: u64, done: Completion<u64, String>| done.resolve(x * 2));
//!     assert_eq!(double.call(21).await, Ok(42));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `runtime-tokio` (default) - debounce timers on the current tokio runtime
//! - `runtime-smol` - debounce timers on smol
//! - `tracing` (default) - log through `tracing` instead of stderr

pub use callwrap_core::{CallwrapError, IntoCallwrapError, Result};

pub use callwrap_debounce::{debounce, debounce_immediate, DebounceConfig, Debounced};
pub use callwrap_memoize::{
    memoize, memoize_with, try_memoize, try_memoize_with, CacheStats, JsonResolver, Memoized,
    Resolver,
};
pub use callwrap_promisify::{promisify, Completion, Promise, Promisified, Rejection};

/// Prelude module for convenient imports
pub mod prelude {
    pub use callwrap_core::{CallwrapError, Result};
    pub use callwrap_debounce::{debounce, debounce_immediate, DebounceConfig, Debounced};
    pub use callwrap_memoize::{memoize, memoize_with, try_memoize, Memoized, Resolver};
    pub use callwrap_promisify::{promisify, Completion, Promise, Rejection};
}
