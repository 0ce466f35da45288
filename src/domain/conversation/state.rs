//! Session request state machine.
//!
//! A session is either idle or waiting on exactly one analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Whether an analysis request is in flight.
///
/// - `Idle`: accepts submissions and selection changes
/// - `Awaiting`: one submission outstanding; only completion is legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Awaiting,
}

impl SessionState {
    /// Returns true if a new submission may start.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while an analysis is outstanding.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => f.write_str("idle"),
            SessionState::Awaiting => f.write_str("awaiting"),
        }
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        matches!((self, target), (Idle, Awaiting) | (Awaiting, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Idle => vec![Awaiting],
            Awaiting => vec![Idle],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn only_idle_accepts_submission() {
        assert!(SessionState::Idle.accepts_submission());
        assert!(!SessionState::Awaiting.accepts_submission());
    }

    #[test]
    fn states_alternate() {
        assert!(SessionState::Idle.can_transition_to(&SessionState::Awaiting));
        assert!(SessionState::Awaiting.can_transition_to(&SessionState::Idle));
        assert!(SessionState::Idle.transition_to(SessionState::Idle).is_err());
        assert!(SessionState::Awaiting.transition_to(SessionState::Awaiting).is_err());
    }

    #[test]
    fn no_state_is_terminal() {
        assert!(!SessionState::Idle.is_terminal());
        assert!(!SessionState::Awaiting.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&SessionState::Awaiting).unwrap(), "\"awaiting\"");
    }
}
