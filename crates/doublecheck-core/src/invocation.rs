//! Invocation records for the call-verification engine.
//!
//! This module defines the types used to represent calls recorded against
//! test-double instances. Invocations form the log that the verification
//! strategies consume; they are created by the (external) recorder at call
//! time and are never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use uuid::Uuid;

/// Identity of a test-double instance.
///
/// Every mock created by the surrounding framework carries a unique
/// `InstanceId`. The verification engine uses it to select which recorded
/// call history an expectation targets.
///
/// # Examples
///
/// ```
/// use doublecheck_core::invocation::InstanceId;
///
/// let id = InstanceId::new();
/// assert_ne!(id, InstanceId::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Creates a new unique instance identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an InstanceId from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns an eight-character prefix of the identity, used when
    /// rendering invocations in diagnostics.
    pub fn short(&self) -> String {
        let full = self.0.as_simple().to_string();
        full[..8].to_string()
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InstanceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// The method a call was made against.
///
/// Two invocations belong to the same method when their signatures are
/// equal; the arity is part of the signature so that overloads with
/// different argument counts are kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// The method name.
    pub name: String,
    /// The number of declared parameters.
    pub arity: usize,
}

impl MethodSignature {
    /// Creates a new method signature.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

static SEQUENCER: AtomicU64 = AtomicU64::new(0);

/// A process-wide monotonic timestamp.
///
/// Timestamps order the invocation log across all test-double instances.
/// [`Timestamp::next`] draws from a process-wide sequencer, so every
/// recorded invocation gets a value that is strictly greater than all
/// previously drawn ones, regardless of which thread recorded it.
///
/// # Examples
///
/// ```
/// use doublecheck_core::invocation::Timestamp;
///
/// let a = Timestamp::next();
/// let b = Timestamp::next();
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Draws the next timestamp from the process-wide sequencer.
    pub fn next() -> Self {
        Self(SEQUENCER.fetch_add(1, AtomicOrdering::Relaxed) + 1)
    }

    /// Creates a timestamp with an explicit value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A single recorded call against a test-double instance.
///
/// Immutable once created. The verification engine only reads invocations;
/// ownership of the log stays with the recording side.
///
/// # Examples
///
/// ```
/// use doublecheck_core::invocation::{InstanceId, Invocation, MethodSignature, Timestamp};
/// use serde_json::json;
///
/// let inv = Invocation::new(
///     InstanceId::new(),
///     MethodSignature::new("drive", 1),
///     vec![json!("north")],
///     Timestamp::new(1),
/// );
/// assert_eq!(inv.method.name, "drive");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// The test-double instance the call was made on.
    pub instance: InstanceId,

    /// The method that was called.
    pub method: MethodSignature,

    /// The argument values, in declaration order.
    pub args: Vec<serde_json::Value>,

    /// When the call was recorded, unique within the process.
    pub timestamp: Timestamp,
}

impl Invocation {
    /// Creates a new invocation record.
    pub fn new(
        instance: InstanceId,
        method: MethodSignature,
        args: Vec<serde_json::Value>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            instance,
            method,
            args,
            timestamp,
        }
    }

    /// Creates an invocation stamped by the process-wide sequencer.
    pub fn recorded_now(
        instance: InstanceId,
        method: MethodSignature,
        args: Vec<serde_json::Value>,
    ) -> Self {
        Self::new(instance, method, args, Timestamp::next())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mock({}).{}(", self.instance.short(), self.method.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_id_unique() {
        assert_ne!(InstanceId::new(), InstanceId::new());
    }

    #[test]
    fn test_instance_id_short() {
        let id = InstanceId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.0.as_simple().to_string().starts_with(&id.short()));
    }

    #[test]
    fn test_instance_id_conversion() {
        let uuid = Uuid::new_v4();
        let id = InstanceId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);

        let id2: InstanceId = uuid.into();
        assert_eq!(id, id2);
    }

    #[test]
    fn test_method_signature_equality() {
        assert_eq!(
            MethodSignature::new("drive", 1),
            MethodSignature::new("drive", 1)
        );
        assert_ne!(
            MethodSignature::new("drive", 1),
            MethodSignature::new("drive", 2)
        );
        assert_ne!(
            MethodSignature::new("drive", 1),
            MethodSignature::new("park", 1)
        );
    }

    #[test]
    fn test_method_signature_display() {
        assert_eq!(format!("{}", MethodSignature::new("drive", 2)), "drive/2");
    }

    #[test]
    fn test_timestamp_sequencer_monotonic() {
        let a = Timestamp::next();
        let b = Timestamp::next();
        let c = Timestamp::next();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(format!("{}", Timestamp::new(42)), "t42");
    }

    #[test]
    fn test_invocation_display() {
        let inv = Invocation::new(
            InstanceId::new(),
            MethodSignature::new("drive", 2),
            vec![json!("north"), json!(5)],
            Timestamp::new(1),
        );
        let rendered = format!("{}", inv);
        assert!(rendered.starts_with("Mock("));
        assert!(rendered.contains(".drive(\"north\", 5)"));
    }

    #[test]
    fn test_invocation_recorded_now_stamps_in_order() {
        let instance = InstanceId::new();
        let a = Invocation::recorded_now(instance, MethodSignature::new("a", 0), vec![]);
        let b = Invocation::recorded_now(instance, MethodSignature::new("b", 0), vec![]);
        assert!(a.timestamp < b.timestamp);
    }

    #[test]
    fn test_invocation_serialization() {
        let inv = Invocation::new(
            InstanceId::new(),
            MethodSignature::new("drive", 1),
            vec![json!({"direction": "north"})],
            Timestamp::new(7),
        );

        let encoded = serde_json::to_string(&inv).unwrap();
        let decoded: Invocation = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.instance, inv.instance);
        assert_eq!(decoded.method, inv.method);
        assert_eq!(decoded.args, inv.args);
        assert_eq!(decoded.timestamp, inv.timestamp);
    }
}
