// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use callwrap_core::CallwrapError;
use callwrap_runtime::impls::tokio::{TokioRuntime, TokioTimer};
use callwrap_runtime::mutex::MutexLike;
use callwrap_runtime::runtime::Runtime;
use callwrap_runtime::spawner::Spawner;
use callwrap_runtime::timer::Timer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

#[test]
fn test_spawner_outside_runtime_is_unavailable() {
    let result = TokioRuntime::spawner();
    assert!(matches!(
        result,
        Err(CallwrapError::RuntimeUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_spawner_runs_detached_task() -> anyhow::Result<()> {
    // Arrange
    let spawner = TokioRuntime::spawner()?;
    let counter = Arc::new(AtomicUsize::new(0));
    let task_counter = counter.clone();

    // Act
    spawner.spawn(async move {
        task_counter.fetch_add(1, Ordering::SeqCst);
    });
    yield_now().await;

    // Assert
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_timer_sleep_follows_paused_clock() -> anyhow::Result<()> {
    // Arrange
    let timer = TokioTimer;
    let spawner = TokioRuntime::spawner()?;
    let fired = Arc::new(AtomicUsize::new(0));
    let task_fired = fired.clone();
    let sleep = timer.sleep_future(Duration::from_millis(1000));
    let start = timer.now();

    spawner.spawn(async move {
        sleep.await;
        task_fired.fetch_add(1, Ordering::SeqCst);
    });

    // Act & Assert
    advance(Duration::from_millis(999)).await;
    yield_now().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    advance(Duration::from_millis(1)).await;
    yield_now().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(timer.now() - start >= Duration::from_millis(1000));

    Ok(())
}

#[test]
fn test_runtime_mutex_is_shared_between_clones() {
    let mutex: <TokioRuntime as Runtime>::Mutex<Vec<u32>> = MutexLike::new(Vec::new());
    let clone = mutex.clone();

    clone.lock().push(7);
    mutex.lock().push(8);

    assert_eq!(*mutex.lock(), vec![7, 8]);
}
