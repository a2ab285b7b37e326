// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use callwrap_test_utils::{CallSpy, TestReceiver};

#[test]
fn test_spy_starts_empty() {
    let spy: CallSpy<u32> = CallSpy::new();
    assert_eq!(spy.call_count(), 0);
    assert!(!spy.was_called());
    assert_eq!(spy.last_call(), None);
}

#[test]
fn test_recorder_shares_log_with_spy() {
    let spy = CallSpy::new();
    let record = spy.recorder();

    record("foo".to_string());
    record("bar".to_string());

    assert_eq!(spy.calls(), vec!["foo".to_string(), "bar".to_string()]);
    assert!(spy.was_called_with(&"foo".to_string()));
    assert!(!spy.was_called_with(&"baz".to_string()));
}

#[test]
fn test_reset_forgets_calls() {
    let spy = CallSpy::new();
    spy.record(1);
    spy.reset();
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn test_receiver_tags_hits_with_name() {
    let receiver = TestReceiver::new("object");
    receiver.hit("debounced");

    assert_eq!(receiver.hits.last_call(), Some("object:debounced".to_string()));
    assert_eq!(receiver.to_string(), "TestReceiver[name=object]");
}
