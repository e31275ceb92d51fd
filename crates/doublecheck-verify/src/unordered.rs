//! Unordered counted matching.
//!
//! Each expectation is verified independently against its own count
//! range; interleaving of unrelated calls is irrelevant. The failure
//! diagnostics distinguish four situations so the report is actionable:
//! the mock was never touched, it was only called on other methods, the
//! right method was called with the wrong arguments, or the right calls
//! happened the wrong number of times.

use crate::format::{format_argument_report, format_invocations};
use crate::result::VerificationResult;
use crate::verifier::CallVerifier;
use doublecheck_core::{CallHistory, ExpectedCall, Invocation};
use tracing::trace;

/// Verifies each expectation's match count against a `[min, max]` range,
/// in any order relative to other calls.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedCallVerifier {
    min: usize,
    max: usize,
}

impl UnorderedCallVerifier {
    /// Creates a verifier with the given effective bounds.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn in_range(&self, n: usize) -> bool {
        n >= self.min && n <= self.max
    }

    /// Renders the required count range for failure messages.
    fn range_phrase(&self) -> String {
        if self.max == usize::MAX {
            format!("at least {}", self.min)
        } else {
            format!("at least {} and at most {}", self.min, self.max)
        }
    }

    fn match_call(
        &self,
        history: &dyn CallHistory,
        call: &ExpectedCall,
        position: usize,
        total: usize,
    ) -> VerificationResult {
        let all_calls = history.all_recorded_calls(call.instance());
        let same_method: Vec<&Invocation> = all_calls
            .iter()
            .filter(|invocation| call.same_method(invocation))
            .collect();

        // Descriptor order carries no semantics here; the position only
        // labels which expectation of the block failed.
        let label = if total > 1 {
            format!("{} of {}: ", position, total)
        } else {
            String::new()
        };

        match same_method.len() {
            0 => {
                if self.min == 0 {
                    return VerificationResult::ok();
                }
                let mut message = format!(
                    "{}no calls for Mock({}).{}",
                    label,
                    call.instance().short(),
                    call.method()
                );
                // An untouched mock and a mock used on other methods are
                // different failures; list the other calls when present.
                if !all_calls.is_empty() {
                    message.push_str("\ncalls recorded for this mock:\n");
                    message.push_str(&format_invocations(&all_calls));
                }
                VerificationResult::failure(message)
            }
            1 => {
                let only = same_method[0];
                let matched = call.matches(only);
                let n = usize::from(matched);
                if self.in_range(n) {
                    VerificationResult::ok()
                } else if matched {
                    VerificationResult::failure(format!(
                        "{}1 matching call found for {}, but needs {} calls",
                        label,
                        call.matcher,
                        self.range_phrase()
                    ))
                } else {
                    VerificationResult::failure(format!(
                        "{}{} was not called with matching arguments\nonly call was {} at {}\n{}",
                        label,
                        call.matcher,
                        only,
                        only.timestamp,
                        format_argument_report(&call.matcher, only)
                    ))
                }
            }
            _ => {
                let n = same_method
                    .iter()
                    .filter(|invocation| call.matches(invocation))
                    .count();
                if self.in_range(n) {
                    VerificationResult::ok()
                } else if n == 0 {
                    VerificationResult::failure(format!(
                        "{}no matching calls for {}\ncalls to the same method:\n{}",
                        label,
                        call.matcher,
                        format_invocations(same_method.iter().copied())
                    ))
                } else {
                    VerificationResult::failure(format!(
                        "{}{} matching calls found, but needs {} calls",
                        label,
                        n,
                        self.range_phrase()
                    ))
                }
            }
        }
    }
}

impl CallVerifier for UnorderedCallVerifier {
    fn name(&self) -> &'static str {
        "unordered"
    }

    fn verify(&self, history: &dyn CallHistory, calls: &[ExpectedCall]) -> VerificationResult {
        for (idx, call) in calls.iter().enumerate() {
            let result = self.match_call(history, call, idx + 1, calls.len());
            if !result.is_match() {
                trace!(expectation = idx + 1, "unordered verification failed");
                return result;
            }
        }
        VerificationResult::ok()
    }
}
