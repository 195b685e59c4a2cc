//! The submit/resolve state machine shared by every flow in the demo.
//!
//! Each page embeds one `Phase` per simulated operation: upload verification,
//! id lookup, admin sign-in, roster import. A submission moves the phase to
//! `Submitting`, a deferred task later moves it to `Resolved`, and an explicit
//! reset (where the page offers one) returns it to `Idle`. Failure is a value
//! carried inside [`Resolution`], never an error path.

use serde::{Deserialize, Serialize};

use crate::notify::Notification;

/// Terminal disposition of a resolved operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

/// The value a deferred task produces when it completes.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<P> {
    pub outcome: Outcome,
    /// Inline result text rendered next to the outcome.
    pub message: String,
    /// Structured payload, when the operation produced one.
    pub payload: Option<P>,
    /// Toast raised when the resolution lands.
    pub notice: Notification,
}

impl<P> Resolution<P> {
    pub fn success(
        message: impl Into<String>,
        payload: Option<P>,
        notice: Notification,
    ) -> Self {
        Self {
            outcome: Outcome::Success,
            message: message.into(),
            payload,
            notice,
        }
    }

    pub fn failure(
        message: impl Into<String>,
        payload: Option<P>,
        notice: Notification,
    ) -> Self {
        Self {
            outcome: Outcome::Failure,
            message: message.into(),
            payload,
            notice,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Where a workflow instance currently is.
///
/// Transitions are unconditional writes, matching the page semantics: a new
/// submission may start from any state (only the disabled control prevents
/// it while in flight) and the latest resolution always wins.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase<P> {
    Idle,
    Submitting,
    Resolved(Resolution<P>),
}

// Hand-written so `Phase<P>: Default` does not demand `P: Default`; the
// payload types have no meaningful default.
impl<P> Default for Phase<P> {
    fn default() -> Self {
        Phase::Idle
    }
}

impl<P> Phase<P> {
    /// A submission was accepted; deferred work is now pending.
    pub fn begin(&mut self) {
        *self = Phase::Submitting;
    }

    /// The deferred work completed.
    pub fn resolve(&mut self, resolution: Resolution<P>) {
        *self = Phase::Resolved(resolution);
    }

    /// Explicit reset back to the initial state.
    pub fn reset(&mut self) {
        *self = Phase::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting)
    }

    /// The current resolution, if the phase is `Resolved`.
    pub fn resolution(&self) -> Option<&Resolution<P>> {
        match self {
            Phase::Resolved(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Resolution<u32> {
        Resolution::success("done", Some(1), Notification::info("Done", "All good."))
    }

    fn bad() -> Resolution<u32> {
        Resolution::failure("nope", None, Notification::error("Failed", "Not good."))
    }

    #[test]
    fn happy_path_transitions() {
        let mut phase = Phase::<u32>::default();
        assert_eq!(phase, Phase::Idle);

        phase.begin();
        assert!(phase.is_submitting());
        assert!(phase.resolution().is_none());

        phase.resolve(ok());
        let resolution = phase.resolution().unwrap();
        assert!(resolution.is_success());
        assert_eq!(resolution.payload, Some(1));
    }

    #[test]
    fn resubmission_from_resolved() {
        let mut phase = Phase::<u32>::Idle;
        phase.begin();
        phase.resolve(bad());
        assert!(!phase.resolution().unwrap().is_success());

        // A fresh attempt goes straight back to Submitting and its resolution
        // overwrites the stale one.
        phase.begin();
        assert!(phase.is_submitting());
        phase.resolve(ok());
        assert!(phase.resolution().unwrap().is_success());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut phase = Phase::<u32>::Idle;
        phase.begin();
        phase.resolve(ok());
        phase.reset();
        assert_eq!(phase, Phase::Idle);
    }
}
