//! doublecheck-core - Data model for the call-verification engine
//!
//! This crate defines the types shared between the recording side of a
//! mocking framework and the verification engine:
//! - Invocation records with process-monotonic timestamps
//! - Argument and invocation matchers (opaque predicates with
//!   human-readable descriptions)
//! - Expectation descriptors and the ordering discipline
//! - The read-only call-history accessor and an in-memory recorder
//!
//! # Example
//!
//! ```rust,ignore
//! use doublecheck_core::{ExpectedCall, InvocationMatcher, RecordedCalls};
//!
//! let mut log = RecordedCalls::new();
//! log.record(invocation);
//! let expected = ExpectedCall::new(matcher, representative);
//! ```

pub mod call;
pub mod error;
pub mod history;
pub mod invocation;
pub mod matcher;

// Re-export main types
pub use call::{ExpectedCall, Ordering};
pub use error::{SessionError, VerifyError};
pub use history::{CallHistory, RecordedCalls};
pub use invocation::{InstanceId, Invocation, MethodSignature, Timestamp};
pub use matcher::{any, eq, ArgumentMatcher, InvocationMatcher};
