// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Completion, Promise, Rejection};
use callwrap_core::warn;
use core::fmt;
use core::marker::PhantomData;
use futures::channel::oneshot;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Adapts a function that reports through a trailing [`Completion`] into one
/// that returns a [`Promise`].
///
/// # Example
///
/// ```
/// use callwrap_promisify::{promisify, Completion};
///
/// let add = promisify(|(x, y): (i32, i32), done: Completion<i32, String>| {
///     done.call(None, Some(x + y));
/// });
///
/// let sum = futures::executor::block_on(add.call((1, 2)));
/// assert_eq!(sum, Ok(3));
/// ```
pub fn promisify<A, T, E, F>(func: F) -> Promisified<A, T, E, F>
where
    F: Fn(A, Completion<T, E>),
{
    Promisified {
        func,
        _signature: PhantomData,
    }
}

/// A function adapted by [`promisify`].
pub struct Promisified<A, T, E, F> {
    func: F,
    _signature: PhantomData<fn(A) -> (T, E)>,
}

impl<A, T, E, F> Promisified<A, T, E, F>
where
    F: Fn(A, Completion<T, E>),
{
    /// Runs the wrapped function with `args` and a fresh completion, before
    /// returning.
    ///
    /// A panic in the wrapped function does not reach the caller; the promise
    /// rejects with [`Rejection::Panicked`] instead, unless the function had
    /// already settled it.
    pub fn call(&self, args: A) -> Promise<T, E> {
        let (sender, mut receiver) = oneshot::channel();
        let completion = Completion::new(sender);

        match catch_unwind(AssertUnwindSafe(|| (self.func)(args, completion))) {
            Ok(()) => Promise::waiting(receiver),
            Err(payload) => match receiver.try_recv() {
                Ok(Some(outcome)) => Promise::settled(outcome),
                _ => {
                    let message = panic_message(payload.as_ref());
                    warn!("promisify: wrapped function panicked: {}", message);
                    Promise::settled(Err(Rejection::Panicked(message)))
                }
            },
        }
    }
}

impl<A, T, E, F: Clone> Clone for Promisified<A, T, E, F> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _signature: PhantomData,
        }
    }
}

impl<A, T, E, F> fmt::Debug for Promisified<A, T, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promisified").finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let from_str = catch_unwind(|| panic!("static")).unwrap_err();
        let from_string = catch_unwind(|| panic!("{}-{}", "formatted", 1)).unwrap_err();
        let from_other = catch_unwind(|| std::panic::panic_any(42_u8)).unwrap_err();

        assert_eq!(panic_message(from_str.as_ref()), "static");
        assert_eq!(panic_message(from_string.as_ref()), "formatted-1");
        assert_eq!(panic_message(from_other.as_ref()), "non-string panic payload");
    }
}
