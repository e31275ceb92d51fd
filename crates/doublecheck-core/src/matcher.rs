//! Matchers over recorded invocations.
//!
//! Argument matchers are opaque predicates supplied by the surrounding
//! framework; the engine only evaluates them and renders their
//! descriptions in diagnostics. `eq` and `any` are provided so the engine
//! and its tests have concrete collaborators, not as a matcher library.

use crate::invocation::{InstanceId, Invocation, MethodSignature};
use std::fmt;

/// A predicate over a single argument value.
///
/// The `Display` implementation is the matcher's human-readable
/// description, used only when rendering a failure diagnostic.
pub trait ArgumentMatcher: fmt::Display + Send + Sync {
    /// Returns true if the matcher accepts the given argument value.
    fn matches(&self, value: &serde_json::Value) -> bool;
}

/// Matches a value by equality.
struct ValueEq(serde_json::Value);

impl ArgumentMatcher for ValueEq {
    fn matches(&self, value: &serde_json::Value) -> bool {
        &self.0 == value
    }
}

impl fmt::Display for ValueEq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eq({})", self.0)
    }
}

/// Matches any value.
struct AnyArg;

impl ArgumentMatcher for AnyArg {
    fn matches(&self, _value: &serde_json::Value) -> bool {
        true
    }
}

impl fmt::Display for AnyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "any()")
    }
}

/// Creates a matcher that accepts exactly the given value.
pub fn eq(value: impl Into<serde_json::Value>) -> Box<dyn ArgumentMatcher> {
    Box::new(ValueEq(value.into()))
}

/// Creates a matcher that accepts any value.
pub fn any() -> Box<dyn ArgumentMatcher> {
    Box::new(AnyArg)
}

/// The full matcher for one expected call: target instance, method
/// signature, and one argument matcher per declared parameter.
///
/// # Examples
///
/// ```
/// use doublecheck_core::invocation::{InstanceId, Invocation, MethodSignature, Timestamp};
/// use doublecheck_core::matcher::{eq, InvocationMatcher};
/// use serde_json::json;
///
/// let instance = InstanceId::new();
/// let matcher = InvocationMatcher::new(
///     instance,
///     MethodSignature::new("drive", 1),
///     vec![eq("north")],
/// );
/// let call = Invocation::new(
///     instance,
///     MethodSignature::new("drive", 1),
///     vec![json!("north")],
///     Timestamp::new(1),
/// );
/// assert!(matcher.matches(&call));
/// ```
pub struct InvocationMatcher {
    /// The targeted test-double instance.
    pub instance: InstanceId,
    /// The targeted method.
    pub method: MethodSignature,
    /// One matcher per argument, in declaration order.
    pub args: Vec<Box<dyn ArgumentMatcher>>,
}

impl InvocationMatcher {
    /// Creates a new invocation matcher.
    pub fn new(
        instance: InstanceId,
        method: MethodSignature,
        args: Vec<Box<dyn ArgumentMatcher>>,
    ) -> Self {
        Self {
            instance,
            method,
            args,
        }
    }

    /// Returns true if the invocation targets the same instance and method.
    pub fn same_method(&self, invocation: &Invocation) -> bool {
        self.instance == invocation.instance && self.method == invocation.method
    }

    /// Returns true if the invocation fully matches: same instance and
    /// method, agreeing arity, and every argument matcher accepting its
    /// argument.
    pub fn matches(&self, invocation: &Invocation) -> bool {
        self.same_method(invocation)
            && self.args.len() == invocation.args.len()
            && self
                .args
                .iter()
                .zip(invocation.args.iter())
                .all(|(matcher, value)| matcher.matches(value))
    }
}

impl fmt::Display for InvocationMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mock({}).{}(", self.instance.short(), self.method.name)?;
        for (i, matcher) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", matcher)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for InvocationMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvocationMatcher({})", self)
    }
}
