// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the callwrap workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallSpy<A>`
//!
//! Records every invocation of a wrapped function together with its
//! arguments:
//!
//! ```rust
//! use callwrap_test_utils::CallSpy;
//!
//! let spy = CallSpy::new();
//! let record = spy.recorder();
//!
//! record((1, "a"));
//! record((2, "b"));
//!
//! assert_eq!(spy.call_count(), 2);
//! assert_eq!(spy.last_call(), Some((2, "b")));
//! ```
//!
//! ## `TestReceiver`
//!
//! A receiver object threaded through wrapped calls as an explicit call
//! target.
//!
//! ## Helpers
//!
//! `settle` and `advance_and_settle` drive a tokio clock paused with
//! `#[tokio::test(start_paused = true)]` and let
//! spawned timer tasks run before assertions.

pub mod call_spy;
pub mod helpers;
pub mod test_receiver;

pub use call_spy::CallSpy;
pub use test_receiver::TestReceiver;
