// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use callwrap_core::CallwrapError;
use callwrap_memoize::{try_memoize, try_memoize_with};
use callwrap_test_utils::CallSpy;

#[derive(Debug, thiserror::Error)]
#[error("Not a number: {0}")]
struct NotANumber(String);

#[test]
fn test_ok_results_are_cached() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let record = spy.recorder();
    let parse = try_memoize(move |raw: String| {
        record(raw.clone());
        raw.parse::<i64>().map_err(|_| NotANumber(raw))
    });

    // Act
    let first = parse.try_call("42".into())?;
    let second = parse.try_call("42".into())?;

    // Assert
    assert_eq!((first, second), (42, 42));
    assert_eq!(spy.call_count(), 1);

    Ok(())
}

#[test]
fn test_errors_propagate_and_are_never_cached() -> anyhow::Result<()> {
    // Arrange
    let spy = CallSpy::new();
    let record = spy.recorder();
    let parse = try_memoize(move |raw: String| {
        record(raw.clone());
        raw.parse::<i64>().map_err(|_| NotANumber(raw))
    });

    // Act
    let first = parse.try_call("abc".into());
    let second = parse.try_call("abc".into());

    // Assert
    let err = first.unwrap_err();
    assert!(matches!(err, CallwrapError::UserError(_)));
    assert_eq!(err.to_string(), "User error: Not a number: abc");
    assert!(second.is_err());
    assert_eq!(spy.call_count(), 2);
    assert!(!parse.has(&"abc".to_string())?);
    assert_eq!(parse.stats().inserts(), 0);

    Ok(())
}

#[test]
fn test_failure_does_not_disturb_other_keys() -> anyhow::Result<()> {
    // Arrange
    let attempts = CallSpy::new();
    let record = attempts.recorder();
    let halve = try_memoize_with(
        move |x: u32| {
            record(x);
            if x % 2 == 0 {
                Ok(x / 2)
            } else {
                Err(NotANumber(format!("{x} is odd")))
            }
        },
        |x: &u32| *x,
    );

    // Act
    assert_eq!(halve.try_call(8)?, 4);
    assert!(halve.try_call(3).is_err());
    assert_eq!(halve.try_call(8)?, 4);

    // Assert
    assert_eq!(attempts.calls(), vec![8, 3]);
    assert_eq!(halve.len(), 1);

    Ok(())
}
