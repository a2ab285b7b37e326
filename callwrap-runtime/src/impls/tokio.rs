// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! tokio: timers and tasks on the runtime current at construction time.

use crate::{runtime::Runtime, spawner::Spawner, timer::Timer};
use callwrap_core::{CallwrapError, Result};
use core::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{Instant, Sleep};

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized + Send> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Spawner = TokioSpawner;

    fn spawner() -> Result<Self::Spawner> {
        Handle::try_current()
            .map(|handle| TokioSpawner { handle })
            .map_err(|err| CallwrapError::runtime_unavailable(err.to_string()))
    }
}

/// Reads `tokio::time::Instant`, so a paused test clock applies.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = Sleep;
    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Spawns onto the runtime captured by [`TokioRuntime::spawner`], from any
/// thread.
#[derive(Clone, Debug)]
pub struct TokioSpawner {
    handle: Handle,
}

impl Spawner for TokioSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Detached
        drop(self.handle.spawn(future));
    }
}
