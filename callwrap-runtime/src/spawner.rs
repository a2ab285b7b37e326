// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;

/// Spawns detached background tasks on a specific runtime.
///
/// Obtained once from [`Runtime::spawner`](crate::runtime::Runtime::spawner)
/// and kept by the caller, so later spawns do not depend on being inside the
/// runtime's context.
pub trait Spawner: Clone + Send + Sync + Debug + 'static {
    /// Runs `future` to completion in the background. The task is not joined.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
