//! Session protocol errors.

use thiserror::Error;

use super::SessionState;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::staff::StaffFunction;

/// Caller contract violations on the session protocol.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Operation not legal in the current state, e.g. `complete` while idle
    /// or `submit` while an analysis is outstanding.
    #[error("Cannot {operation} while session is {state}")]
    InvalidSessionState {
        operation: &'static str,
        state: SessionState,
    },

    /// Completion carried an analysis for a different staff function than
    /// the pending request.
    #[error("Analysis for {actual} cannot complete a {expected} request")]
    AnalysisMismatch {
        expected: StaffFunction,
        actual: StaffFunction,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SessionError {
    pub fn invalid_state(operation: &'static str, state: SessionState) -> Self {
        SessionError::InvalidSessionState { operation, state }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InvalidSessionState { .. } => ErrorCode::InvalidStateTransition,
            SessionError::AnalysisMismatch { .. } => ErrorCode::AnalysisMismatch,
            SessionError::Domain(err) => err.code,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Domain(inner) => inner,
            SessionError::InvalidSessionState { operation, state } => DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot {} while session is {}", operation, state),
            )
            .with_detail("operation", operation)
            .with_detail("state", state.to_string()),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
