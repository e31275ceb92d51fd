//! The strategy seam shared by the three matching disciplines.

use crate::ordered::OrderedCallVerifier;
use crate::result::VerificationResult;
use crate::sequence::SequenceCallVerifier;
use crate::unordered::UnorderedCallVerifier;
use doublecheck_core::{CallHistory, ExpectedCall, InstanceId, Invocation, Ordering};
use std::collections::HashSet;

/// A matching strategy: consumes the call history and the expectation
/// list and produces a verdict.
///
/// Count bounds deliberately do not appear in this contract. The
/// unordered strategy is constructed with its bounds; the ordered and
/// sequence strategies have none.
pub trait CallVerifier {
    /// Returns the name of this strategy for logging and debugging.
    fn name(&self) -> &'static str;

    /// Decides whether the recorded history satisfies the expectations.
    fn verify(&self, history: &dyn CallHistory, calls: &[ExpectedCall]) -> VerificationResult;
}

/// Selects the strategy for the given ordering discipline.
///
/// `min`/`max` are the effective bounds for unordered verification; the
/// other disciplines take no bounds (the orchestrator rejects non-default
/// bounds for them before this point).
pub fn verifier_for(ordering: Ordering, min: usize, max: usize) -> Box<dyn CallVerifier> {
    match ordering {
        Ordering::Unordered => Box::new(UnorderedCallVerifier::new(min, max)),
        Ordering::Ordered => Box::new(OrderedCallVerifier),
        Ordering::Sequence => Box::new(SequenceCallVerifier),
    }
}

/// Collects the chronological union of every call recorded against any
/// instance referenced by the expectations, deduplicated by instance
/// identity and sorted by timestamp ascending.
pub(crate) fn chronological_union(
    history: &dyn CallHistory,
    calls: &[ExpectedCall],
) -> Vec<Invocation> {
    let mut seen: HashSet<InstanceId> = HashSet::new();
    let mut union = Vec::new();
    for call in calls {
        if seen.insert(call.instance()) {
            union.extend(history.all_recorded_calls(call.instance()));
        }
    }
    union.sort_by_key(|invocation| invocation.timestamp);
    union
}
