// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use callwrap_memoize::{memoize, Memoized};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;

#[test]
fn test_shared_across_threads_returns_one_value_per_key() -> anyhow::Result<()> {
    // Arrange
    let memoized = Arc::new(memoize(|x: u64| x * x));

    // Act
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let memoized = memoized.clone();
            thread::spawn(move || (0..32).map(|x| memoized.call(x)).collect::<Vec<_>>())
        })
        .collect();

    // Assert
    for handle in handles {
        let results = handle.join().expect("worker panicked");
        for (x, result) in results.into_iter().enumerate() {
            assert_eq!(result?, (x * x) as u64);
        }
    }
    assert_eq!(memoized.len(), 32);
    assert_eq!(memoized.stats().inserts(), 32);

    Ok(())
}

type Fib = Memoized<u64, u64, fn(u64) -> u64>;

static FIB: OnceLock<Fib> = OnceLock::new();
static FIB_CALLS: AtomicUsize = AtomicUsize::new(0);

fn fib_uncached(n: u64) -> u64 {
    FIB_CALLS.fetch_add(1, Ordering::SeqCst);
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

fn fib(n: u64) -> u64 {
    FIB.get_or_init(|| memoize(fib_uncached as fn(u64) -> u64))
        .call(n)
        .unwrap_or_default()
}

#[test]
fn test_recursive_function_can_reenter_its_own_wrapper() {
    assert_eq!(fib(50), 12_586_269_025);
    assert_eq!(FIB_CALLS.load(Ordering::SeqCst), 51);
}
