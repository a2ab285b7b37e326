// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! smol: timers from `async-io`, tasks on smol's global executor.

use crate::{runtime::Runtime, spawner::Spawner, timer::Timer};
use callwrap_core::Result;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Mutex<T: ?Sized + Send> = Arc<parking_lot::Mutex<T>>;
    type Timer = SmolTimer;
    type Spawner = SmolSpawner;

    fn spawner() -> Result<Self::Spawner> {
        // The global executor starts on first use
        Ok(SmolSpawner)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

impl Timer for SmolTimer {
    type Sleep = SmolSleep;
    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> SmolSleep {
        SmolSleep(async_io::Timer::after(duration))
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// `async_io::Timer` yields the instant it fired at; debouncing only needs
/// the wake-up.
#[derive(Debug)]
pub struct SmolSleep(async_io::Timer);

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.0).poll(cx).map(drop)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolSpawner;

impl Spawner for SmolSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        smol::spawn(future).detach();
    }
}
