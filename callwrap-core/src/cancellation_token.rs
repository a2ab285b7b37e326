// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot cancellation signal shared between a scheduler and the task it
//! spawned.
//!
//! The debouncer hands a token to every timer task and cancels it when a newer
//! call replaces that timer. [`CancellationToken::cancelled`] returns an owned
//! future, so it can be raced against a sleep inside a `'static` task on any
//! executor.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Shared cancellation flag. Clones observe the same flag.
///
/// ```
/// use callwrap_core::CancellationToken;
///
/// let scheduler = CancellationToken::new();
/// let task = scheduler.clone();
///
/// assert!(scheduler.cancel());
/// assert!(!scheduler.cancel()); // already cancelled
/// assert!(task.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

#[derive(Debug)]
struct Signal {
    raised: AtomicBool,
    waiters: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            signal: Arc::new(Signal {
                raised: AtomicBool::new(false),
                waiters: Event::new(),
            }),
        }
    }

    /// Raises the flag and wakes every pending [`Cancelled`] future.
    ///
    /// Returns `true` for the call that actually cancelled the token, `false`
    /// if it was cancelled before.
    pub fn cancel(&self) -> bool {
        if self.signal.raised.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.signal.waiters.notify(usize::MAX);
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.raised.load(Ordering::Acquire)
    }

    /// Future completing once the token is cancelled; ready at once if it
    /// already is.
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            signal: Arc::clone(&self.signal),
            listener: None,
        }
    }
}

/// Owned future returned by [`CancellationToken::cancelled`].
#[must_use = "futures do nothing unless polled"]
pub struct Cancelled {
    signal: Arc<Signal>,
    listener: Option<EventListener>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cancelled")
            .field("raised", &self.signal.raised.load(Ordering::Acquire))
            .field("listening", &self.listener.is_some())
            .finish()
    }
}

impl Future for Cancelled {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if this.signal.raised.load(Ordering::Acquire) {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Registered before the re-check above, so no wake-up is lost
                None => this.listener = Some(this.signal.waiters.listen()),
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    this.listener = None;
                }
            }
        }
    }
}
