// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared building blocks for the callwrap utilities.
//!
//! - [`CallwrapError`] and the [`Result`] alias used across the workspace
//! - [`CancellationToken`] for retiring scheduled work
//! - `warn!` and `debug!` logging macros that route to `tracing`
//!   when the `tracing` feature is enabled

pub mod callwrap_error;
pub mod cancellation_token;
#[macro_use]
pub mod logging;

pub use self::callwrap_error::{CallwrapError, IntoCallwrapError, Result};
pub use self::cancellation_token::{Cancelled, CancellationToken};
