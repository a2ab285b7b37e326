// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use callwrap_debounce::debounce_immediate;
use callwrap_test_utils::helpers::{advance_and_settle, settle};
use callwrap_test_utils::{CallSpy, TestReceiver};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_immediate_fires_synchronously() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(1000))?;

    // Act
    debounced.call(1);

    // Assert
    assert_eq!(spy.calls(), vec![1]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_suppresses_calls_within_wait() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(1000))?;

    // Act
    debounced.call(1);
    debounced.call(2);
    debounced.call(3);
    settle().await;
    advance_and_settle(1000).await;

    // Assert
    assert_eq!(spy.calls(), vec![1]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_calls_extend_the_cooldown() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(1000))?;

    // Act & Assert
    debounced.call("t0");
    settle().await;
    assert_eq!(spy.call_count(), 1);

    advance_and_settle(500).await;
    debounced.call("t500");
    settle().await;
    assert_eq!(spy.call_count(), 1);

    advance_and_settle(500).await;
    debounced.call("t1000");
    settle().await;
    assert_eq!(spy.call_count(), 1);

    advance_and_settle(999).await;
    assert!(debounced.is_pending());

    advance_and_settle(1).await;
    assert!(!debounced.is_pending());
    assert_eq!(spy.calls(), vec!["t0"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_fires_again_after_silence() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(1000))?;

    // Act
    debounced.call("first");
    settle().await;
    advance_and_settle(1000).await;
    debounced.call("second");

    // Assert
    assert_eq!(spy.calls(), vec!["first", "second"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_cooldown_ends_exactly_at_wait() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(1000))?;

    // Act & Assert
    debounced.call("first");
    settle().await;

    advance_and_settle(999).await;
    assert!(debounced.is_pending());

    advance_and_settle(1).await;
    assert!(!debounced.is_pending());

    debounced.call("second");
    assert_eq!(spy.calls(), vec!["first", "second"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_nothing_fires_at_end_of_cooldown() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let debounced = debounce_immediate(spy.recorder(), Duration::from_millis(100))?;

    // Act
    debounced.call(1);
    debounced.call(2);
    settle().await;
    advance_and_settle(500).await;

    // Assert
    assert_eq!(spy.calls(), vec![1]);
    assert!(!debounced.is_pending());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_threads_receiver_of_first_call() -> anyhow::Result<()> {
    // Arrange
    let first = Arc::new(TestReceiver::new("first"));
    let second = Arc::new(TestReceiver::new("second"));
    let debounced = debounce_immediate(
        |(receiver, tag): (Arc<TestReceiver>, &'static str)| receiver.hit(tag),
        Duration::from_millis(1000),
    )?;

    // Act
    debounced.call((first.clone(), "one"));
    debounced.call((second.clone(), "two"));
    settle().await;
    advance_and_settle(1000).await;

    // Assert
    assert_eq!(first.hits.calls(), vec!["first:one".to_string()]);
    assert!(!second.hits.was_called());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediate_config_is_reported() -> anyhow::Result<()> {
    // Arrange
    let debounced = debounce_immediate(|_: ()| {}, Duration::from_millis(250))?;

    // Act
    let config = debounced.config();

    // Assert
    assert!(config.immediate);
    assert_eq!(config.wait, Duration::from_millis(250));

    Ok(())
}
