// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback-to-future adapter.
//!
//! [`promisify`] turns a function of the shape `Fn(A, Completion<T, E>)` into
//! one returning a [`Promise<T, E>`], a future resolving to
//! `Result<T, Rejection<E>>`.
//!
//! The wrapped function runs synchronously inside
//! [`Promisified::call`]. It may settle the [`Completion`] right away, or move
//! it to another task or thread and settle it later:
//!
//! ```
//! use callwrap_promisify::{promisify, Completion, Rejection};
//!
//! let parse = promisify(|text: &str, done: Completion<u32, String>| {
//!     done.complete(text.parse().map_err(|_| format!("{text} is not a number")));
//! });
//!
//! futures::executor::block_on(async {
//!     assert_eq!(parse.call("42").await, Ok(42));
//!     assert_eq!(
//!         parse.call("x").await,
//!         Err(Rejection::Error("x is not a number".to_string()))
//!     );
//! });
//! ```
//!
//! A receiver, when the wrapped function needs one, travels inside `A`.

mod completion;
mod promise;
mod promisified;
mod rejection;

pub use completion::Completion;
pub use promise::Promise;
pub use promisified::{promisify, Promisified};
pub use rejection::Rejection;
