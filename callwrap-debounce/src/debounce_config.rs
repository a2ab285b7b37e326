// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Settings of one debounced function.
///
/// With the `serde` feature the config reads from documents such as
/// `{ "wait_ms": 250, "immediate": true }`; `immediate` defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DebounceConfig {
    /// Quiet period that must pass after the last call.
    #[cfg_attr(feature = "serde", serde(rename = "wait_ms", with = "duration_millis"))]
    pub wait: Duration,

    /// Invoke on the leading edge of a burst instead of the trailing edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub immediate: bool,
}

impl DebounceConfig {
    /// Trailing-edge config with the given quiet period.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
        }
    }

    #[must_use]
    pub const fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_millis {
    use core::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(wait: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(wait.as_millis()).map_err(serde::ser::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
