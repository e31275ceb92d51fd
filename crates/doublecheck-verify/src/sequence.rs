//! Strict sequence matching.
//!
//! Strictly stronger than ordered matching: the relevant calls must equal
//! the expectation list in length and position. No gaps, no extra
//! interleaved calls to the referenced instances; every relevant call
//! must be explicitly expected and vice versa. The length check runs
//! before any content comparison.

use crate::format::{format_invocations, format_matchers};
use crate::result::VerificationResult;
use crate::verifier::{chronological_union, CallVerifier};
use doublecheck_core::{CallHistory, ExpectedCall};

/// Verifies that the relevant calls exactly match the expectation list,
/// position by position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceCallVerifier;

impl CallVerifier for SequenceCallVerifier {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn verify(&self, history: &dyn CallHistory, calls: &[ExpectedCall]) -> VerificationResult {
        let all = chronological_union(history, calls);

        if all.len() != calls.len() {
            return VerificationResult::failure(format!(
                "number of calls ({}) does not match the verification sequence ({})\
                 \nmatchers:\n{}recorded calls:\n{}",
                all.len(),
                calls.len(),
                format_matchers(calls),
                format_invocations(&all)
            ));
        }

        for (call, invocation) in calls.iter().zip(all.iter()) {
            if !call.matches(invocation) {
                return VerificationResult::failure(format!(
                    "calls are not exactly matching verification sequence\
                     \nmatchers:\n{}recorded calls:\n{}",
                    format_matchers(calls),
                    format_invocations(&all)
                ));
            }
        }

        VerificationResult::ok()
    }
}
