//! Ordered subsequence matching.
//!
//! All expectations must appear in the log in the given order, with
//! arbitrary gaps: other calls (to the same or unrelated methods) may
//! interleave freely. This is the standard longest-common-subsequence
//! dynamic program with matcher predicates standing in for character
//! equality; a single invocation can satisfy at most one expectation
//! slot.

use crate::format::{format_invocations, format_matchers};
use crate::result::VerificationResult;
use crate::verifier::{chronological_union, CallVerifier};
use doublecheck_core::{CallHistory, ExpectedCall};
use tracing::trace;

/// Verifies that the expectations form a subsequence of the relevant
/// recorded calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedCallVerifier;

impl CallVerifier for OrderedCallVerifier {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn verify(&self, history: &dyn CallHistory, calls: &[ExpectedCall]) -> VerificationResult {
        if calls.is_empty() {
            return VerificationResult::ok();
        }

        let all = chronological_union(history, calls);
        if all.len() < calls.len() {
            return VerificationResult::failure(format!(
                "fewer calls happened than demanded by the verification order \
                 ({} recorded, {} expected)\nmatchers:\n{}recorded calls:\n{}",
                all.len(),
                calls.len(),
                format_matchers(calls),
                format_invocations(&all)
            ));
        }

        // Rolling-array LCS over (invocations x expectations). prev holds
        // the row for the previously processed invocation.
        let n = calls.len();
        let mut prev = vec![0usize; n];
        let mut curr = vec![0usize; n];

        for invocation in &all {
            for j in 0..n {
                curr[j] = if calls[j].matches(invocation) {
                    if j == 0 {
                        1
                    } else {
                        prev[j - 1] + 1
                    }
                } else {
                    prev[j].max(if j == 0 { 0 } else { curr[j - 1] })
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        let consumed = prev[n - 1];
        trace!(consumed, expected = n, "ordered subsequence match finished");
        if consumed == n {
            VerificationResult::ok()
        } else {
            VerificationResult::failure(format!(
                "calls are not in verification order\nmatchers:\n{}recorded calls:\n{}",
                format_matchers(calls),
                format_invocations(&all)
            ))
        }
    }
}
