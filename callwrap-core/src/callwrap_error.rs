// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types shared by the callwrap utilities.
//!
//! # Examples
//!
//! ```
//! use callwrap_core::{CallwrapError, Result};
//!
//! fn resolve_key() -> Result<String> {
//!     Err(CallwrapError::key_resolution("key must be a string"))
//! }
//!
//! assert!(resolve_key().is_err());
//! ```

/// Root error type for all callwrap operations.
#[derive(Debug, thiserror::Error)]
pub enum CallwrapError {
    /// A cache key could not be derived from the call arguments.
    ///
    /// Raised by the default memoizer resolver when the argument value
    /// cannot be serialised into a structural key.
    #[error("Key resolution error: {context}")]
    KeyResolution {
        /// Description of what made the arguments unresolvable
        context: String,
    },

    /// No async runtime was available to schedule deferred work on.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Details reported by the runtime lookup
        context: String,
    },

    /// Error returned by a wrapped user function.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CallwrapError {
    /// Create a key resolution error with the given context
    pub fn key_resolution(context: impl Into<String>) -> Self {
        Self::KeyResolution {
            context: context.into(),
        }
    }

    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns the wrapped user error, if this is a [`CallwrapError::UserError`].
    #[must_use]
    pub fn as_user_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::UserError(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Specialized Result type for callwrap operations.
pub type Result<T> = std::result::Result<T, CallwrapError>;

/// Extension trait for converting errors into `CallwrapError`.
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoCallwrapError {
    /// Convert this error into a `CallwrapError::UserError`
    fn into_callwrap(self) -> CallwrapError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoCallwrapError for E {
    fn into_callwrap(self) -> CallwrapError {
        CallwrapError::user_error(self)
    }
}
