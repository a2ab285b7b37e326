// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, spawner::Spawner, timer::Timer};
use callwrap_core::Result;

pub trait Runtime: 'static {
    type Mutex<T: ?Sized + Send>: MutexLike<T> + Send + Sync;
    type Timer: Timer + Default;
    type Spawner: Spawner;

    /// Returns a spawner bound to the runtime driving the current context.
    ///
    /// # Errors
    /// Returns `CallwrapError::RuntimeUnavailable` when no runtime is active.
    fn spawner() -> Result<Self::Spawner>;
}
