// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the callwrap utilities.
//!
//! The debouncer needs three things from its host: a timer, a way to spawn
//! detached tasks, and a lock for its shared state. [`runtime::Runtime`]
//! bundles them so the utility code stays executor-agnostic.
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - [`impls::tokio::TokioRuntime`]
//! - `runtime-smol` - [`impls::smol::SmolRuntime`]

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod spawner;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = impls::smol::SmolRuntime;
