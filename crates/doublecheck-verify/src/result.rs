//! Verdict type produced by the matching strategies.

use std::fmt;

/// The result of running one matching strategy.
///
/// Terminal value: created once by the strategy and never mutated.
/// Failure messages are assembled eagerly, but only on the failing path,
/// so the success path pays no formatting cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    matches: bool,
    message: Option<String>,
}

impl VerificationResult {
    /// Create a matching verdict.
    pub fn ok() -> Self {
        Self {
            matches: true,
            message: None,
        }
    }

    /// Create a non-matching verdict with a diagnostic message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            matches: false,
            message: Some(message.into()),
        }
    }

    /// Check if the call history satisfied the expectation.
    pub fn is_match(&self) -> bool {
        self.matches
    }

    /// The diagnostic explanation, present on non-matching verdicts.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consume the verdict, returning its message or a fallback.
    pub fn into_message(self) -> String {
        self.message
            .unwrap_or_else(|| "verification did not match".to_string())
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches {
            write!(f, "MATCH")
        } else {
            write!(f, "NO MATCH: {}", self.message.as_deref().unwrap_or(""))
        }
    }
}
