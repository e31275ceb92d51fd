//! Test helpers shared by the strategy and orchestrator tests.

use doublecheck_core::invocation::{InstanceId, Invocation, MethodSignature, Timestamp};
use doublecheck_core::matcher::{eq, ArgumentMatcher, InvocationMatcher};
use doublecheck_core::{ExpectedCall, RecordedCalls};
use serde_json::json;

/// A stand-in for a test-double instance: just an identity plus
/// convenience constructors for invocations against it.
pub(crate) struct Mock {
    pub id: InstanceId,
}

impl Mock {
    pub fn new() -> Self {
        Self {
            id: InstanceId::new(),
        }
    }

    /// Builds an invocation of `name(args...)` at an explicit timestamp.
    pub fn call_at(&self, name: &str, args: &[&str], ts: u64) -> Invocation {
        Invocation::new(
            self.id,
            MethodSignature::new(name, args.len()),
            args.iter().map(|a| json!(*a)).collect(),
            Timestamp::new(ts),
        )
    }
}

/// Builds an expectation that `name` was called with exactly `args`
/// (equality matchers, representative derived from the same values).
pub(crate) fn expect_call(mock: &Mock, name: &str, args: &[&str]) -> ExpectedCall {
    let matchers = args.iter().map(|a| eq(*a)).collect();
    expect_with(mock, name, args.len(), matchers, args)
}

/// Builds an expectation with explicit argument matchers. The
/// representative invocation carries `rep_args` so target resolution can
/// differ from what the matchers accept.
pub(crate) fn expect_with(
    mock: &Mock,
    name: &str,
    arity: usize,
    matchers: Vec<Box<dyn ArgumentMatcher>>,
    rep_args: &[&str],
) -> ExpectedCall {
    let method = MethodSignature::new(name, arity);
    let matcher = InvocationMatcher::new(mock.id, method.clone(), matchers);
    let representative = Invocation::new(
        mock.id,
        method,
        rep_args.iter().map(|a| json!(*a)).collect(),
        Timestamp::new(0),
    );
    ExpectedCall::new(matcher, representative)
}

/// Builds a log pre-populated with the given invocations.
pub(crate) fn record(calls: &[Invocation]) -> RecordedCalls {
    let mut log = RecordedCalls::new();
    for call in calls {
        log.record(call.clone());
    }
    log
}
