//! Expectation descriptors and the ordering discipline.
//!
//! An [`ExpectedCall`] pairs the matcher for one expected invocation with
//! a representative invocation recorded while the verification block was
//! replayed against a dummy scope. The representative is used only to
//! resolve which instance and method the expectation targets.

use crate::invocation::{InstanceId, Invocation, MethodSignature};
use crate::matcher::InvocationMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the expected calls relate to the recorded log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// Each expectation is verified independently against its own count
    /// range; any interleaving of other calls is permitted.
    #[default]
    Unordered,
    /// The expectations must appear in the log as a subsequence: in
    /// order, gaps allowed, other calls may interleave.
    Ordered,
    /// The relevant calls must exactly equal the expectation list in
    /// length and position; no gaps and no extra calls.
    Sequence,
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordering::Unordered => write!(f, "unordered"),
            Ordering::Ordered => write!(f, "ordered"),
            Ordering::Sequence => write!(f, "sequence"),
        }
    }
}

/// One expected call in a verification block.
///
/// The order of a slice of expected calls is significant for the ordered
/// and sequence disciplines and irrelevant for unordered verification.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The full matcher for this expectation.
    pub matcher: InvocationMatcher,
    /// The invocation recorded against the dummy scope while the
    /// expectation was being described.
    pub representative: Invocation,
}

impl ExpectedCall {
    /// Creates a new expected call.
    pub fn new(matcher: InvocationMatcher, representative: Invocation) -> Self {
        Self {
            matcher,
            representative,
        }
    }

    /// The test-double instance this expectation targets.
    pub fn instance(&self) -> InstanceId {
        self.representative.instance
    }

    /// The method this expectation targets.
    pub fn method(&self) -> &MethodSignature {
        &self.representative.method
    }

    /// Returns true if the invocation fully matches this expectation.
    pub fn matches(&self, invocation: &Invocation) -> bool {
        self.matcher.matches(invocation)
    }

    /// Returns true if the invocation targets the same instance and method.
    pub fn same_method(&self, invocation: &Invocation) -> bool {
        self.matcher.same_method(invocation)
    }
}

impl fmt::Display for ExpectedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matcher)
    }
}
