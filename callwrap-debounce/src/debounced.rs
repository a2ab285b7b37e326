// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DebounceConfig;
use callwrap_core::{debug, CancellationToken, Result};
use callwrap_runtime::mutex::MutexLike;
use callwrap_runtime::runtime::Runtime;
use callwrap_runtime::spawner::Spawner;
use callwrap_runtime::timer::Timer;
use callwrap_runtime::DefaultRuntime;
use core::fmt;
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use std::sync::Arc;

/// Debounces `func` on the trailing edge: it runs once, `wait` after the last
/// call of a burst, with that last call's arguments.
///
/// # Errors
/// Returns `CallwrapError::RuntimeUnavailable` when called outside a runtime.
///
/// # Example
///
/// ```rust,no_run
/// use callwrap_debounce::debounce;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> callwrap_core::Result<()> {
/// let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(300))?;
///
/// save.call("h".into());
/// save.call("he".into());
/// save.call("hello".into()); // only this one is saved, 300ms from now
/// # Ok(())
/// # }
/// ```
pub fn debounce<A, F>(func: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::with_config(func, DebounceConfig::new(wait))
}

/// Debounces `func` on the leading edge: the first call of a burst runs it
/// synchronously, later calls only extend the `wait` cooldown.
///
/// # Errors
/// Returns `CallwrapError::RuntimeUnavailable` when called outside a runtime.
pub fn debounce_immediate<A, F>(func: F, wait: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::with_config(func, DebounceConfig::new(wait).with_immediate(true))
}

/// A debounced function.
///
/// Each instance is either idle or has exactly one armed timer. Every call
/// replaces the armed timer; the replaced one is cancelled and can no longer
/// fire. Clones share the same timer and state.
///
/// A panic inside the wrapped function during a deferred invocation is not
/// caught; it unwinds the timer task and is reported by the runtime.
pub struct Debounced<A, R = DefaultRuntime>
where
    R: Runtime,
{
    shared: Arc<Shared<A, R>>,
}

struct Shared<A, R: Runtime> {
    func: Box<dyn Fn(A) + Send + Sync>,
    config: DebounceConfig,
    state: R::Mutex<Slot>,
    spawner: R::Spawner,
    timer: R::Timer,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    armed: Option<CancellationToken>,
}

impl<A, R> Debounced<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Wraps `func` according to `config`, on runtime `R`.
    ///
    /// # Errors
    /// Returns `CallwrapError::RuntimeUnavailable` when `R` has no active
    /// runtime to schedule timers on.
    pub fn with_config<F>(func: F, config: DebounceConfig) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let spawner = R::spawner()?;
        Ok(Self {
            shared: Arc::new(Shared {
                func: Box::new(func),
                config,
                state: MutexLike::new(Slot::default()),
                spawner,
                timer: R::Timer::default(),
            }),
        })
    }

    /// Registers a call.
    ///
    /// Trailing mode: schedules `func(args)` for `wait` from now, replacing any
    /// pending invocation. Immediate mode: runs `func(args)` before returning
    /// if no cooldown is armed, then (re)arms the cooldown.
    pub fn call(&self, args: A) {
        let immediate = self.shared.config.immediate;
        let (generation, token, run_now) = self.rearm();

        let (deferred, now) = if immediate {
            (None, run_now.then_some(args))
        } else {
            (Some(args), None)
        };

        self.schedule(generation, token, deferred);

        if let Some(args) = now {
            (self.shared.func)(args);
        }
    }

    /// Whether a timer is currently armed.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().armed.is_some()
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.shared.config
    }

    fn rearm(&self) -> (u64, CancellationToken, bool) {
        let mut slot = self.shared.state.lock();
        let was_idle = slot.armed.is_none();

        if slot.armed.take().is_some_and(|previous| previous.cancel()) {
            debug!("debounce: replaced timer of generation {}", slot.generation);
        }

        slot.generation = slot.generation.wrapping_add(1);
        let token = CancellationToken::new();
        slot.armed = Some(token.clone());

        (slot.generation, token, was_idle)
    }

    fn schedule(&self, generation: u64, token: CancellationToken, deferred: Option<A>) {
        let shared = self.shared.clone();
        let scheduled_at = shared.timer.now();

        self.shared.spawner.spawn(async move {
            let elapsed = shared.timer.now() - scheduled_at;
            let sleep = pin!(shared
                .timer
                .sleep_future(shared.config.wait.saturating_sub(elapsed)));
            let cancelled = pin!(token.cancelled());

            if let Either::Left(_) = select(sleep, cancelled).await {
                shared.fire(generation, deferred, scheduled_at);
            }
        });

        debug!(
            "debounce: armed {:?} timer (generation {})",
            self.shared.config.wait, generation
        );
    }
}

impl<A, R: Runtime> Shared<A, R> {
    fn fire(
        &self,
        generation: u64,
        deferred: Option<A>,
        scheduled_at: <R::Timer as Timer>::Instant,
    ) {
        {
            let mut slot = self.state.lock();
            // Replaced after this timer elapsed but before it got the lock
            if slot.generation != generation {
                return;
            }
            slot.armed = None;
        }

        debug!(
            "debounce: timer of generation {} elapsed after {:?}",
            generation,
            self.timer.now() - scheduled_at
        );

        if let Some(args) = deferred {
            (self.func)(args);
        }
    }
}

impl<A, R: Runtime> Clone for Debounced<A, R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<A, R: Runtime> fmt::Debug for Debounced<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("config", &self.shared.config)
            .field("pending", &self.shared.state.lock().armed.is_some())
            .finish_non_exhaustive()
    }
}
