//! Verification session lifecycle.
//!
//! A session scopes one verification block: expectations accumulate while
//! the session is recording, verification runs while it is verifying, and
//! the session returns to idle afterwards. The phase transition into
//! verifying hands back a [`VerifyingGuard`]; dropping the guard without
//! completing it cancels the session, discarding the accumulated
//! expectations, so an errored verification never contaminates the next
//! one.

use doublecheck_core::{ExpectedCall, SessionError};
use std::fmt;
use tracing::debug;

/// The phase a verification session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No verification block is active.
    #[default]
    Idle,
    /// Expectations are being recorded against the dummy scope.
    Recording,
    /// A verification is running against the recorded log.
    Verifying,
}

impl SessionState {
    fn as_str(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Recording => "recording",
            SessionState::Verifying => "verifying",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State for one logical test session.
///
/// Owned by the caller and passed explicitly; there is no ambient
/// thread-local state. A session is single-threaded by contract: the
/// surrounding framework keeps recording and verification mutually
/// exclusive per logical test.
#[derive(Debug, Default)]
pub struct VerificationSession {
    state: SessionState,
    expectations: Vec<ExpectedCall>,
}

impl VerificationSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Starts recording a verification block.
    pub fn begin_recording(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Recording;
                Ok(())
            }
            other => Err(SessionError::NotIdle {
                state: other.as_str(),
            }),
        }
    }

    /// Adds an expectation to the current block.
    pub fn record_expectation(&mut self, call: ExpectedCall) -> Result<(), SessionError> {
        match self.state {
            SessionState::Recording => {
                self.expectations.push(call);
                Ok(())
            }
            other => Err(SessionError::NotAcceptingExpectations {
                state: other.as_str(),
            }),
        }
    }

    /// The expectations accumulated in the current block.
    pub fn expectations(&self) -> &[ExpectedCall] {
        &self.expectations
    }

    /// Drains the expectations of the current block, leaving the session
    /// recording with an empty block.
    pub fn take_expectations(&mut self) -> Result<Vec<ExpectedCall>, SessionError> {
        match self.state {
            SessionState::Recording => Ok(std::mem::take(&mut self.expectations)),
            other => Err(SessionError::NotRecording {
                state: other.as_str(),
            }),
        }
    }

    /// Transitions from recording to verifying.
    ///
    /// The returned guard must be completed on the successful path;
    /// dropping it cancels the session instead.
    pub fn enter_verifying(&mut self) -> Result<VerifyingGuard<'_>, SessionError> {
        match self.state {
            SessionState::Recording => {
                self.state = SessionState::Verifying;
                Ok(VerifyingGuard {
                    session: self,
                    completed: false,
                })
            }
            other => Err(SessionError::NotRecording {
                state: other.as_str(),
            }),
        }
    }

    /// Rolls the session back to idle, discarding accumulated
    /// expectations.
    fn cancel(&mut self) {
        debug!(state = %self.state, "verification session cancelled, rolling back");
        self.expectations.clear();
        self.state = SessionState::Idle;
    }

    fn finish(&mut self) {
        self.expectations.clear();
        self.state = SessionState::Idle;
    }
}

/// Scoped handle for the verifying phase.
///
/// Guarantees release on every exit path: `complete` returns the session
/// to idle normally, while dropping an uncompleted guard cancels it.
#[derive(Debug)]
pub struct VerifyingGuard<'a> {
    session: &'a mut VerificationSession,
    completed: bool,
}

impl VerifyingGuard<'_> {
    /// The expectations of the block being verified.
    pub fn expectations(&self) -> &[ExpectedCall] {
        self.session.expectations()
    }

    /// Finishes the verification block, returning the session to idle.
    pub fn complete(mut self) {
        self.completed = true;
        self.session.finish();
    }
}

impl Drop for VerifyingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.session.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{expect_call, Mock};

    #[test]
    fn test_recording_accumulates_expectations() {
        let car = Mock::new();
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        session
            .record_expectation(expect_call(&car, "drive", &["north"]))
            .unwrap();

        assert_eq!(session.state(), SessionState::Recording);
        assert_eq!(session.expectations().len(), 1);
    }

    #[test]
    fn test_complete_returns_to_idle_and_clears() {
        let car = Mock::new();
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        session
            .record_expectation(expect_call(&car, "drive", &["north"]))
            .unwrap();

        let guard = session.enter_verifying().unwrap();
        assert_eq!(guard.expectations().len(), 1);
        guard.complete();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.expectations().is_empty());
    }

    #[test]
    fn test_dropped_guard_cancels_session() {
        let car = Mock::new();
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        session
            .record_expectation(expect_call(&car, "drive", &["north"]))
            .unwrap();

        {
            let _guard = session.enter_verifying().unwrap();
            // Simulated error path: guard dropped without completion.
        }

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.expectations().is_empty());
    }

    #[test]
    fn test_take_expectations_drains_block() {
        let car = Mock::new();
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        session
            .record_expectation(expect_call(&car, "drive", &["north"]))
            .unwrap();
        session
            .record_expectation(expect_call(&car, "park", &[]))
            .unwrap();

        let block = session.take_expectations().unwrap();
        assert_eq!(block.len(), 2);
        // The session keeps recording with an empty block.
        assert_eq!(session.state(), SessionState::Recording);
        assert!(session.expectations().is_empty());
        assert!(session.take_expectations().unwrap().is_empty());
    }

    #[test]
    fn test_take_expectations_requires_recording() {
        let mut session = VerificationSession::new();
        let err = session.take_expectations().unwrap_err();
        assert_eq!(err, SessionError::NotRecording { state: "idle" });
    }

    #[test]
    fn test_enter_verifying_requires_recording() {
        let mut session = VerificationSession::new();
        let err = session.enter_verifying().unwrap_err();
        assert_eq!(err, SessionError::NotRecording { state: "idle" });
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_record_expectation_requires_recording() {
        let car = Mock::new();
        let mut session = VerificationSession::new();
        let err = session
            .record_expectation(expect_call(&car, "drive", &["north"]))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::NotAcceptingExpectations { state: "idle" }
        );
    }

    #[test]
    fn test_begin_recording_requires_idle() {
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        let err = session.begin_recording().unwrap_err();
        assert_eq!(err, SessionError::NotIdle { state: "recording" });
    }

    #[test]
    fn test_session_reusable_after_cancel() {
        let mut session = VerificationSession::new();
        session.begin_recording().unwrap();
        {
            let _guard = session.enter_verifying().unwrap();
        }

        // A cancelled session starts the next block cleanly.
        session.begin_recording().unwrap();
        assert_eq!(session.state(), SessionState::Recording);
        assert!(session.expectations().is_empty());
    }
}
