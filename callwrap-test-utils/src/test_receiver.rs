// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CallSpy;
use std::fmt::{self, Display};

/// Receiver object passed as the explicit call target of a wrapped function.
#[derive(Debug, Clone)]
pub struct TestReceiver {
    pub name: String,
    pub hits: CallSpy<String>,
}

impl TestReceiver {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hits: CallSpy::new(),
        }
    }

    /// Records a hit tagged with this receiver's name.
    pub fn hit(&self, tag: &str) {
        self.hits.record(format!("{}:{tag}", self.name));
    }
}

impl Display for TestReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestReceiver[name={}]", self.name)
    }
}
