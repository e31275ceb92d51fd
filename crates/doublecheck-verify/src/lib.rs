//! doublecheck-verify - Call-verification engine for test doubles
//!
//! Given the chronological log of invocations recorded against mock
//! instances and a list of expected-call matchers, this crate decides
//! whether the history satisfies the expectation and produces a precise
//! pass/fail diagnostic. Three ordering disciplines are supported:
//!
//! - **Unordered**: each expectation is counted independently against a
//!   `[min, max]` range, with any interleaving.
//! - **Ordered**: the expectations must appear in the log as a
//!   subsequence (gaps allowed).
//! - **Sequence**: the relevant calls must exactly equal the expectation
//!   list, position by position.
//!
//! # Example
//!
//! ```rust,ignore
//! use doublecheck_verify::{VerificationParams, VerificationSession, Verifier};
//!
//! let mut session = VerificationSession::new();
//! session.begin_recording()?;
//! // ... record expectations against the dummy scope ...
//! Verifier::new(VerificationParams::default().exactly(1))
//!     .verify(&mut session, &log, &expected_calls)?;
//! ```

pub mod format;
pub mod ordered;
pub mod orchestrate;
pub mod result;
pub mod sequence;
pub mod session;
pub mod unordered;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types
pub use orchestrate::{VerificationParams, Verifier};
pub use ordered::OrderedCallVerifier;
pub use result::VerificationResult;
pub use sequence::SequenceCallVerifier;
pub use session::{SessionState, VerificationSession, VerifyingGuard};
pub use unordered::UnorderedCallVerifier;
pub use verifier::{verifier_for, CallVerifier};

// Re-export core types for convenience
pub use doublecheck_core::{
    CallHistory, ExpectedCall, InstanceId, Invocation, MethodSignature, Ordering, RecordedCalls,
    SessionError, Timestamp, VerifyError,
};
