// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Rejection;
use core::fmt;
use futures::channel::oneshot;

pub(crate) type Outcome<T, E> = Result<T, Rejection<E>>;

/// Single-use handle through which a wrapped function settles its promise.
///
/// Every method consumes the handle, so a promise settles at most once.
/// Dropping the handle without calling it rejects the promise with
/// [`Rejection::Abandoned`]. The handle is `Send` when `T` and `E` are, and
/// may be completed later from another task or thread.
pub struct Completion<T, E> {
    sender: oneshot::Sender<Outcome<T, E>>,
}

impl<T, E> Completion<T, E> {
    pub(crate) fn new(sender: oneshot::Sender<Outcome<T, E>>) -> Self {
        Self { sender }
    }

    /// Error-first completion: rejects with `err` when present, resolves with
    /// `result` otherwise.
    ///
    /// Unlike a plain error-first callback, `call(None, None)` does not
    /// resolve with an empty value: it rejects with
    /// [`Rejection::MissingResult`], even when `T` is `()`. A completion that
    /// carries no value settles with [`resolve(())`](Self::resolve) instead.
    pub fn call(self, err: Option<E>, result: Option<T>) {
        let outcome = match (err, result) {
            (Some(err), _) => Err(Rejection::Error(err)),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(Rejection::MissingResult),
        };
        self.settle(outcome);
    }

    pub fn resolve(self, result: T) {
        self.settle(Ok(result));
    }

    pub fn reject(self, err: E) {
        self.settle(Err(Rejection::Error(err)));
    }

    /// Settles from a `Result`: `Ok` resolves, `Err` rejects.
    pub fn complete(self, result: Result<T, E>) {
        self.settle(result.map_err(Rejection::Error));
    }

    /// Whether the caller still waits on the promise.
    pub fn is_awaited(&self) -> bool {
        !self.sender.is_canceled()
    }

    fn settle(self, outcome: Outcome<T, E>) {
        // The promise was dropped; nobody is left to notify
        let _ = self.sender.send(outcome);
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("awaited", &self.is_awaited())
            .finish()
    }
}
