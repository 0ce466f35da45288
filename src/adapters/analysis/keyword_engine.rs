//! Keyword analysis engine.
//!
//! Runs the rule-based [`StaffAnalyzer`] against a fixed reference snapshot,
//! after an optional simulated thinking delay.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::analysis::{Analysis, AnalysisError, StaffAnalyzer};
use crate::domain::reference::ReferenceData;
use crate::domain::staff::StaffFunction;
use crate::ports::AnalysisEngine;

/// Rule-based engine over an immutable reference snapshot.
///
/// # Example
///
/// ```ignore
/// let engine = KeywordAnalysisEngine::new(Arc::new(ReferenceData::sample()))
///     .with_latency(Duration::from_millis(1500));
///
/// let analysis = engine.analyze("0600시 정찰", StaffFunction::Operations).await?;
/// ```
#[derive(Debug, Clone)]
pub struct KeywordAnalysisEngine {
    reference: Arc<ReferenceData>,
    latency: Duration,
}

impl KeywordAnalysisEngine {
    /// Creates an engine that answers immediately.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated delay applied before every analysis.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}

#[async_trait]
impl AnalysisEngine for KeywordAnalysisEngine {
    async fn analyze(&self, text: &str, function: StaffFunction) -> Result<Analysis, AnalysisError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        let analysis = StaffAnalyzer::analyze(text, function, &self.reference);
        tracing::debug!(
            staff_function = function.tag(),
            doctrine_ref = analysis.doctrine_ref(),
            "Keyword analysis produced"
        );
        Ok(analysis)
    }

    fn name(&self) -> &'static str {
        "KeywordAnalysisEngine"
    }
}
