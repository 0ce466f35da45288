//! AnalysisEngine port - Interface for producing staff analyses.
//!
//! The session controller hands each accepted submission to an engine and
//! completes the session with whatever it returns. Engines may take a while
//! (simulated or real), so the call is async.
//!
//! # Example
//!
//! ```ignore
//! struct FixedEngine(Analysis);
//!
//! #[async_trait]
//! impl AnalysisEngine for FixedEngine {
//!     async fn analyze(&self, _text: &str, _function: StaffFunction)
//!         -> Result<Analysis, AnalysisError>
//!     {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "FixedEngine"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::analysis::{Analysis, AnalysisError};
use crate::domain::staff::StaffFunction;

/// Port for turning operator text into a structured analysis.
///
/// Implementations must return an analysis whose variant matches
/// `function`; the session rejects mismatched completions.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Analyze `text` as a request to the given staff section.
    async fn analyze(&self, text: &str, function: StaffFunction) -> Result<Analysis, AnalysisError>;

    /// Engine name for logging.
    fn name(&self) -> &'static str;
}
