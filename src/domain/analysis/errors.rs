//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while classifying operator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The requested staff function is not one of the five known tags.
    #[error("Unknown staff function '{0}'")]
    InvalidFunction(String),

    /// A replacement engine behind the analysis port failed.
    #[error("Analysis engine failed: {0}")]
    EngineFailed(String),
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InvalidFunction(_) => ErrorCode::InvalidFunction,
            AnalysisError::EngineFailed(_) => ErrorCode::InternalError,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::InvalidFunction(tag) => domain.with_detail("staff_function", tag),
            AnalysisError::EngineFailed(_) => domain,
        }
    }
}
