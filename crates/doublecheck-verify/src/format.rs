//! Rendering of invocations and matcher comparisons for diagnostics.
//!
//! All of these are used only on failing paths; nothing here runs when a
//! verification passes.

use doublecheck_core::{ExpectedCall, Invocation, InvocationMatcher};
use std::fmt::Write;

/// Renders a numbered listing of invocations, one per line.
pub fn format_invocations<'a, I>(calls: I) -> String
where
    I: IntoIterator<Item = &'a Invocation>,
{
    let mut out = String::new();
    for (i, call) in calls.into_iter().enumerate() {
        let _ = writeln!(out, "  {}) {} at {}", i + 1, call, call.timestamp);
    }
    out
}

/// Renders a numbered listing of expected-call matchers, one per line.
pub fn format_matchers(calls: &[ExpectedCall]) -> String {
    let mut out = String::new();
    for (i, call) in calls.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, call.matcher);
    }
    out
}

/// Renders the per-argument comparison between a matcher and one
/// invocation: index, actual value, matcher description, and a `+`/`-`
/// outcome marker per argument.
pub fn format_argument_report(matcher: &InvocationMatcher, invocation: &Invocation) -> String {
    let mut out = String::new();

    if matcher.args.len() != invocation.args.len() {
        let _ = writeln!(
            out,
            "  argument count mismatch: expected {}, got {}",
            matcher.args.len(),
            invocation.args.len()
        );
        return out;
    }

    for (i, (arg_matcher, value)) in matcher.args.iter().zip(invocation.args.iter()).enumerate() {
        let sign = if arg_matcher.matches(value) { '+' } else { '-' };
        let _ = writeln!(
            out,
            "  [{}] {} argument: {}, matcher: {}",
            i, sign, value, arg_matcher
        );
    }
    out
}
