//! Staff functions - the five fixed domains an analysis is routed to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::analysis::AnalysisError;

/// One of the five staff sections the advisor supports.
///
/// Selects both the classifier rules and the presentation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaffFunction {
    #[default]
    Operations,
    Logistics,
    Personnel,
    Admin,
    Intelligence,
}

impl StaffFunction {
    /// All functions in menu order.
    pub const ALL: [StaffFunction; 5] = [
        StaffFunction::Operations,
        StaffFunction::Logistics,
        StaffFunction::Personnel,
        StaffFunction::Admin,
        StaffFunction::Intelligence,
    ];

    /// Canonical lowercase tag.
    pub fn tag(&self) -> &'static str {
        match self {
            StaffFunction::Operations => "operations",
            StaffFunction::Logistics => "logistics",
            StaffFunction::Personnel => "personnel",
            StaffFunction::Admin => "admin",
            StaffFunction::Intelligence => "intelligence",
        }
    }

    /// Name of the staff section as shown to the operator.
    pub fn display_name(&self) -> &'static str {
        match self {
            StaffFunction::Operations => "작전과",
            StaffFunction::Logistics => "군수과",
            StaffFunction::Personnel => "인사과",
            StaffFunction::Admin => "행정과",
            StaffFunction::Intelligence => "정보과",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            StaffFunction::Operations => &["ops", "operation", "작전", "작전과"],
            StaffFunction::Logistics => &["log", "logistic", "군수", "군수과"],
            StaffFunction::Personnel => &["per", "pers", "인사", "인사과"],
            StaffFunction::Admin => &["adm", "administration", "행정", "행정과"],
            StaffFunction::Intelligence => &["int", "intel", "정보", "정보과"],
        }
    }
}

impl fmt::Display for StaffFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for StaffFunction {
    type Err = AnalysisError;

    /// Parses a tag or alias, case-insensitively.
    ///
    /// Anything outside the five functions is rejected rather than
    /// defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        StaffFunction::ALL
            .into_iter()
            .find(|function| function.tag() == needle || function.aliases().contains(&needle.as_str()))
            .ok_or_else(|| AnalysisError::InvalidFunction(s.to_string()))
    }
}
