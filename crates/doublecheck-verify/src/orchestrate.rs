//! The verification orchestrator.
//!
//! Validates count bounds against the ordering discipline, drives the
//! selected matching strategy inside a session guard, and converts the
//! verdict into a pass (`Ok`) or a typed failure, honouring inverse
//! verification.

use crate::format::format_matchers;
use crate::session::VerificationSession;
use crate::verifier::verifier_for;
use doublecheck_core::{CallHistory, ExpectedCall, Ordering, VerifyError};
use tracing::debug;

/// Parameters of one verification call.
///
/// `at_least`/`at_most`/`exactly` are only meaningful for unordered
/// verification; supplying any non-default bound with another ordering
/// is a configuration error.
#[derive(Debug, Clone, Copy)]
pub struct VerificationParams {
    /// The ordering discipline.
    pub ordering: Ordering,
    /// When true, the verification is expected to fail.
    pub inverse: bool,
    /// Minimum number of matching calls per expectation.
    pub at_least: usize,
    /// Maximum number of matching calls per expectation.
    pub at_most: usize,
    /// Exact number of matching calls; overrides `at_least`/`at_most`.
    pub exactly: Option<usize>,
}

impl Default for VerificationParams {
    fn default() -> Self {
        Self {
            ordering: Ordering::Unordered,
            inverse: false,
            at_least: 1,
            at_most: usize::MAX,
            exactly: None,
        }
    }
}

impl VerificationParams {
    /// Creates default parameters for the given ordering.
    pub fn for_ordering(ordering: Ordering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    /// Sets inverse verification.
    pub fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Sets the minimum match count.
    pub fn at_least(mut self, min: usize) -> Self {
        self.at_least = min;
        self
    }

    /// Sets the maximum match count.
    pub fn at_most(mut self, max: usize) -> Self {
        self.at_most = max;
        self
    }

    /// Sets an exact match count.
    pub fn exactly(mut self, count: usize) -> Self {
        self.exactly = Some(count);
        self
    }

    fn has_non_default_bounds(&self) -> bool {
        self.at_least != 1 || self.at_most != usize::MAX || self.exactly.is_some()
    }

    /// The effective `[min, max]` range.
    fn effective_bounds(&self) -> (usize, usize) {
        match self.exactly {
            Some(count) => (count, count),
            None => (self.at_least, self.at_most),
        }
    }
}

/// Drives one verification call end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    params: VerificationParams,
}

impl Verifier {
    /// Creates a verifier with the given parameters.
    pub fn new(params: VerificationParams) -> Self {
        Self { params }
    }

    /// Verifies the expectations against the recorded history.
    ///
    /// The session must be in its recording phase; it returns to idle on
    /// every exit path. Verification failure completes the session
    /// normally (it is the intended negative-test signal); only setup
    /// errors cancel it.
    ///
    /// # Errors
    ///
    /// - [`VerifyError::InvalidBounds`] if count bounds are combined with
    ///   a non-unordered ordering, or `min > max`; raised before any
    ///   matching occurs.
    /// - [`VerifyError::Session`] if the session is in the wrong phase.
    /// - [`VerifyError::VerificationFailed`] /
    ///   [`VerifyError::InverseVerificationFailed`] for the assertion
    ///   outcomes.
    pub fn verify(
        &self,
        session: &mut VerificationSession,
        history: &dyn CallHistory,
        calls: &[ExpectedCall],
    ) -> Result<(), VerifyError> {
        let params = &self.params;
        let (min, max) = self.validated_bounds()?;

        let guard = session.enter_verifying()?;
        let strategy = verifier_for(params.ordering, min, max);
        debug!(
            strategy = strategy.name(),
            expectations = calls.len(),
            inverse = params.inverse,
            "running verification"
        );
        let outcome = strategy.verify(history, calls);
        guard.complete();

        match (params.inverse, outcome.is_match()) {
            (false, true) | (true, false) => Ok(()),
            (false, false) => Err(VerifyError::failed(outcome.into_message())),
            (true, true) => Err(VerifyError::inverse(format!(
                "expected no matching calls, but {} verification passed for:\n{}",
                params.ordering,
                format_matchers(calls)
            ))),
        }
    }

    /// Verifies the expectations recorded into the session's current
    /// block.
    ///
    /// Drains the block via
    /// [`VerificationSession::take_expectations`] and runs
    /// [`verify`](Self::verify) on it, so the block that was recorded is
    /// the block that gets verified. Configuration errors are raised
    /// before the block is drained.
    pub fn verify_recorded(
        &self,
        session: &mut VerificationSession,
        history: &dyn CallHistory,
    ) -> Result<(), VerifyError> {
        self.validated_bounds()?;
        let calls = session.take_expectations()?;
        self.verify(session, history, &calls)
    }

    /// Checks the count bounds against the ordering discipline and
    /// returns the effective `[min, max]` range.
    fn validated_bounds(&self) -> Result<(usize, usize), VerifyError> {
        let params = &self.params;

        if params.ordering != Ordering::Unordered && params.has_non_default_bounds() {
            return Err(VerifyError::invalid_bounds(
                params.ordering,
                "atLeast, atMost and exactly are only allowed for unordered verification",
            ));
        }

        let (min, max) = params.effective_bounds();
        if min > max {
            return Err(VerifyError::invalid_bounds(
                params.ordering,
                format!("atLeast ({}) must not exceed atMost ({})", min, max),
            ));
        }

        Ok((min, max))
    }
}
