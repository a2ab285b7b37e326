// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

/// Yields a few times so tasks woken by the clock get to run.
pub async fn settle() {
    for _ in 0..4 {
        yield_now().await;
    }
}

/// Advances a paused tokio clock by `millis` and settles.
pub async fn advance_and_settle(millis: u64) {
    advance(Duration::from_millis(millis)).await;
    settle().await;
}
