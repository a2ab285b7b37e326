// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Why a [`Promise`](crate::Promise) did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection<E> {
    /// The wrapped function reported an error through its completion.
    #[error("Rejected: {0}")]
    Error(E),

    /// The wrapped function panicked before completing.
    #[error("Panicked: {0}")]
    Panicked(String),

    /// The completion was dropped without being called.
    #[error("Completion dropped without a result")]
    Abandoned,

    /// The completion reported success but carried no result.
    #[error("Completion called without an error or a result")]
    MissingResult,
}

impl<E> Rejection<E> {
    /// The error reported by the wrapped function, if this is
    /// [`Rejection::Error`].
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
