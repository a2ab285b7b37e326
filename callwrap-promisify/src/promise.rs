// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::completion::Outcome;
use crate::Rejection;
use callwrap_core::warn;
use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::oneshot;
use futures::future::FusedFuture;

/// Future of one promisified call.
///
/// Resolves to `Ok(T)` once the completion resolves, or to `Err(Rejection)`
/// otherwise. The wrapped function has already run by the time a `Promise`
/// exists; dropping the promise does not undo it.
#[must_use = "a promise does nothing unless awaited"]
pub struct Promise<T, E> {
    state: State<T, E>,
}

enum State<T, E> {
    Waiting(oneshot::Receiver<Outcome<T, E>>),
    Settled(Outcome<T, E>),
    Done,
}

impl<T, E> Promise<T, E> {
    pub(crate) fn waiting(receiver: oneshot::Receiver<Outcome<T, E>>) -> Self {
        Self {
            state: State::Waiting(receiver),
        }
    }

    pub(crate) fn settled(outcome: Outcome<T, E>) -> Self {
        Self {
            state: State::Settled(outcome),
        }
    }
}

// No field is ever pinned
impl<T, E> Unpin for Promise<T, E> {}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, Rejection<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        match mem::replace(&mut this.state, State::Done) {
            State::Waiting(mut receiver) => match Pin::new(&mut receiver).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(oneshot::Canceled)) => {
                    warn!("promisify: completion dropped without being called");
                    Poll::Ready(Err(Rejection::Abandoned))
                }
                Poll::Pending => {
                    this.state = State::Waiting(receiver);
                    Poll::Pending
                }
            },
            State::Settled(outcome) => Poll::Ready(outcome),
            State::Done => Poll::Pending,
        }
    }
}

impl<T, E> FusedFuture for Promise<T, E> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Waiting(_) => "waiting",
            State::Settled(_) => "settled",
            State::Done => "done",
        };
        f.debug_struct("Promise").field("state", &state).finish()
    }
}
