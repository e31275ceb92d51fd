//! Error types for the call-verification engine.
//!
//! This module provides error types using `thiserror` for ergonomic error
//! handling. Configuration errors and verification failures are distinct
//! kinds: the former indicates a broken test setup, the latter is the
//! intended negative-test-result signal.

use crate::call::Ordering;
use thiserror::Error;

/// Errors raised by the verification session state machine.
///
/// These indicate the orchestrator was driven from the wrong phase, which
/// is a broken test setup rather than a failed assertion. The session is
/// rolled back before any of these propagate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Verification was requested while the session was not recording.
    #[error("verification requires a recording session (state: {state})")]
    NotRecording {
        /// The state the session was actually in.
        state: &'static str,
    },

    /// Recording was requested while the session was not idle.
    #[error("recording can only begin from an idle session (state: {state})")]
    NotIdle {
        /// The state the session was actually in.
        state: &'static str,
    },

    /// An expectation was recorded outside a recording phase.
    #[error("expectations can only be recorded while recording (state: {state})")]
    NotAcceptingExpectations {
        /// The state the session was actually in.
        state: &'static str,
    },
}

/// Errors raised by the verification orchestrator.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Count bounds were supplied together with a non-unordered ordering.
    /// Raised before any matching occurs.
    #[error("invalid bounds for {ordering} verification: {detail}")]
    InvalidBounds {
        /// The ordering the bounds were combined with.
        ordering: Ordering,
        /// Why the bounds are invalid.
        detail: String,
    },

    /// The computed verdict did not satisfy the pass condition.
    #[error("verification failed: {message}")]
    VerificationFailed {
        /// The full diagnostic from the matching strategy.
        message: String,
    },

    /// Inverse verification was requested, but the calls matched.
    #[error("inverse verification failed: {message}")]
    InverseVerificationFailed {
        /// Why the inverse expectation was not met.
        message: String,
    },

    /// The session could not enter the verification phase.
    #[error("verification session error: {0}")]
    Session(#[from] SessionError),
}

impl VerifyError {
    /// Creates a new invalid-bounds configuration error.
    pub fn invalid_bounds(ordering: Ordering, detail: impl Into<String>) -> Self {
        Self::InvalidBounds {
            ordering,
            detail: detail.into(),
        }
    }

    /// Creates a new verification failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            message: message.into(),
        }
    }

    /// Creates a new inverse verification failure.
    pub fn inverse(message: impl Into<String>) -> Self {
        Self::InverseVerificationFailed {
            message: message.into(),
        }
    }

    /// Returns true if this is the configuration-error kind.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. })
    }

    /// Returns true if this is an assertion-failure kind (plain or
    /// inverse).
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            Self::VerificationFailed { .. } | Self::InverseVerificationFailed { .. }
        )
    }
}
