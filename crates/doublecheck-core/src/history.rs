//! Access to recorded call histories.
//!
//! The verification engine consumes the log through the [`CallHistory`]
//! trait: a read-only, per-instance snapshot accessor. [`RecordedCalls`]
//! is the in-memory implementation used by the recording side and by
//! tests; real recorders may keep the log wherever they like as long as
//! snapshots come back in timestamp order.

use crate::invocation::{InstanceId, Invocation};
use std::collections::HashMap;

/// Read-only access to the recorded call log of test-double instances.
///
/// Implementations must return calls in ascending timestamp order. The
/// engine takes one snapshot per instance at verification time and never
/// mutates it; the surrounding session model guarantees that recording
/// has quiesced before verification begins.
pub trait CallHistory {
    /// Returns a snapshot of every call recorded against the given
    /// instance, oldest first. Unknown instances yield an empty log.
    fn all_recorded_calls(&self, instance: InstanceId) -> Vec<Invocation>;
}

/// An in-memory call log keyed by instance.
#[derive(Debug, Default)]
pub struct RecordedCalls {
    calls: HashMap<InstanceId, Vec<Invocation>>,
}

impl RecordedCalls {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an invocation to its instance's history.
    ///
    /// Timestamps must be recorded in ascending order per instance; the
    /// process-wide sequencer guarantees this for recorders that stamp
    /// at call time.
    pub fn record(&mut self, invocation: Invocation) {
        let history = self.calls.entry(invocation.instance).or_default();
        debug_assert!(
            history
                .last()
                .map(|prev| prev.timestamp < invocation.timestamp)
                .unwrap_or(true),
            "invocation recorded out of timestamp order"
        );
        history.push(invocation);
    }

    /// Returns the total number of recorded calls across all instances.
    pub fn len(&self) -> usize {
        self.calls.values().map(Vec::len).sum()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.values().all(Vec::is_empty)
    }
}

impl CallHistory for RecordedCalls {
    fn all_recorded_calls(&self, instance: InstanceId) -> Vec<Invocation> {
        self.calls.get(&instance).cloned().unwrap_or_default()
    }
}
