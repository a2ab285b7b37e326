// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Shared recorder of function invocations.
///
/// Clones share the same call log, so a clone can be moved into the wrapped
/// closure while the test keeps another one for assertions.
pub struct CallSpy<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> CallSpy<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Records one invocation with `args`.
    pub fn record(&self, args: A) {
        self.calls.lock().push(args);
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Forgets all recorded invocations.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl<A: Clone> CallSpy<A> {
    /// Every recorded argument value, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn last_call(&self) -> Option<A> {
        self.calls.lock().last().cloned()
    }
}

impl<A: PartialEq> CallSpy<A> {
    #[must_use]
    pub fn was_called_with(&self, args: &A) -> bool {
        self.calls.lock().iter().any(|call| call == args)
    }
}

impl<A: Send + 'static> CallSpy<A> {
    /// A closure that records its argument on this spy.
    pub fn recorder(&self) -> impl Fn(A) + Clone + Send + Sync + 'static {
        let spy = self.clone();
        move |args| spy.record(args)
    }
}

impl<A> Clone for CallSpy<A> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<A> Default for CallSpy<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Debug> Debug for CallSpy<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallSpy")
            .field("calls", &*self.calls.lock())
            .finish()
    }
}
