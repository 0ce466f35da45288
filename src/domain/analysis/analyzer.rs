//! Staff-function analyzer - routes input to the per-function classifier.

use super::errors::AnalysisError;
use super::payload::Analysis;
use super::rules::Cues;
use super::{admin, intelligence, logistics, operations, personnel};
use crate::domain::reference::ReferenceData;
use crate::domain::staff::StaffFunction;

/// Pure classifier over (text, staff function, reference snapshot).
///
/// No randomness, no hidden state, no I/O: the same inputs always produce
/// the same [`Analysis`].
pub struct StaffAnalyzer;

impl StaffAnalyzer {
    /// Produces the analysis variant for `function`.
    ///
    /// Any string is accepted, including empty or whitespace-only text;
    /// keyword fields then take their defaults.
    pub fn analyze(text: &str, function: StaffFunction, reference: &ReferenceData) -> Analysis {
        let cues = Cues::new(text);
        match function {
            StaffFunction::Operations => Analysis::Operations(operations::analyze(&cues)),
            StaffFunction::Logistics => Analysis::Logistics(logistics::analyze(&reference.logistics)),
            StaffFunction::Personnel => Analysis::Personnel(personnel::analyze(&reference.personnel)),
            StaffFunction::Admin => Analysis::Admin(admin::analyze()),
            StaffFunction::Intelligence => Analysis::Intelligence(intelligence::analyze()),
        }
    }

    /// Like [`StaffAnalyzer::analyze`], but takes an untrusted function tag.
    ///
    /// # Errors
    ///
    /// - `InvalidFunction` if `tag` does not name one of the five functions
    pub fn analyze_tagged(
        text: &str,
        tag: &str,
        reference: &ReferenceData,
    ) -> Result<Analysis, AnalysisError> {
        let function: StaffFunction = tag.parse()?;
        Ok(Self::analyze(text, function, reference))
    }

    /// The fixed doctrine citation for a function.
    pub fn doctrine_ref(function: StaffFunction) -> &'static str {
        match function {
            StaffFunction::Operations => operations::DOCTRINE_REF,
            StaffFunction::Logistics => logistics::DOCTRINE_REF,
            StaffFunction::Personnel => personnel::DOCTRINE_REF,
            StaffFunction::Admin => admin::DOCTRINE_REF,
            StaffFunction::Intelligence => intelligence::DOCTRINE_REF,
        }
    }
}
