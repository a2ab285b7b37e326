// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debouncer: wraps a function so that bursts of calls collapse into a single
//! invocation.
//!
//! # Overview
//!
//! - **[`debounce`]** - trailing edge: runs once, `wait` after the last call,
//!   with the last call's arguments
//! - **[`debounce_immediate`]** - leading edge: the first call of a burst runs
//!   synchronously; further calls within `wait` only extend the cooldown
//! - **[`Debounced::with_config`]** - either mode from a [`DebounceConfig`], on
//!   any [`Runtime`](callwrap_runtime::runtime::Runtime)
//!
//! Arguments are passed as one value (a tuple for several). A function that
//! needs a receiver takes it inside that value; the receiver of the call that
//! ends up invoking the function is the one it sees.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - timers and tasks on the current tokio runtime
//! - `runtime-smol` - timers from `async-io`, tasks on smol's global executor

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("callwrap-debounce needs a runtime: enable `runtime-tokio` or `runtime-smol`");

mod debounce_config;
mod debounced;

pub use debounce_config::DebounceConfig;
pub use debounced::{debounce, debounce_immediate, Debounced};
