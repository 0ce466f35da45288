//! Analysis result types - one concrete record per staff function.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;
use crate::domain::reference::FuelType;
use crate::domain::staff::StaffFunction;

/// Structured assessment attached to an assistant reply.
///
/// The variant always matches the staff function the request was routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Analysis {
    #[serde(rename = "operational")]
    Operations(OperationsAnalysis),
    Logistics(LogisticsAnalysis),
    Personnel(PersonnelAnalysis),
    #[serde(rename = "administrative")]
    Admin(AdminAnalysis),
    Intelligence(IntelligenceAnalysis),
}

impl Analysis {
    /// The staff function this analysis belongs to.
    pub fn staff_function(&self) -> StaffFunction {
        match self {
            Analysis::Operations(_) => StaffFunction::Operations,
            Analysis::Logistics(_) => StaffFunction::Logistics,
            Analysis::Personnel(_) => StaffFunction::Personnel,
            Analysis::Admin(_) => StaffFunction::Admin,
            Analysis::Intelligence(_) => StaffFunction::Intelligence,
        }
    }

    /// Doctrine citation for display and traceability.
    pub fn doctrine_ref(&self) -> &str {
        match self {
            Analysis::Operations(a) => &a.doctrine_ref,
            Analysis::Logistics(a) => &a.doctrine_ref,
            Analysis::Personnel(a) => &a.doctrine_ref,
            Analysis::Admin(a) => &a.doctrine_ref,
            Analysis::Intelligence(a) => &a.doctrine_ref,
        }
    }

    /// The canonical guidance list: suggestions, recommendations, actions,
    /// or priorities depending on the variant.
    pub fn guidance(&self) -> &[String] {
        match self {
            Analysis::Operations(a) => &a.suggestions,
            Analysis::Logistics(a) => &a.recommendations,
            Analysis::Personnel(a) => &a.actions,
            Analysis::Admin(a) => &a.priorities,
            Analysis::Intelligence(a) => &a.recommendations,
        }
    }

    /// Labelled summary fields in display order.
    pub fn summary_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Analysis::Operations(a) => vec![
                ("목표", a.summary.objective.clone()),
                ("부대규모", a.summary.unit_size.clone()),
                ("시간계획", a.summary.timeline.clone()),
                ("위치", a.summary.location.clone()),
            ],
            Analysis::Logistics(a) => vec![
                ("보급현황", a.assessment.supply_status.clone()),
                ("수송능력", a.assessment.transport_capacity.to_string()),
                ("연료현황", a.assessment.fuel_status.to_string()),
                ("정비우선순위", a.assessment.maintenance_priority.to_string()),
            ],
            Analysis::Personnel(a) => vec![
                ("병력현황", a.strength.current_strength.to_string()),
                ("손실현황", a.strength.casualties.clone()),
                ("훈련현황", a.strength.training_status.clone()),
            ],
            Analysis::Admin(a) => vec![
                ("보고서", a.tasks.reports.clone()),
                ("공문처리", a.tasks.correspondence.clone()),
                ("기록관리", a.tasks.records.clone()),
                ("규정준수", a.tasks.compliance.clone()),
            ],
            Analysis::Intelligence(a) => vec![
                ("위협수준", a.assessment.threat_level.clone()),
                ("기상", a.assessment.weather.clone()),
                ("지형", a.assessment.terrain.clone()),
                ("적 활동", a.assessment.enemy.clone()),
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSummary {
    pub objective: String,
    pub unit_size: String,
    pub timeline: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationsAnalysis {
    pub summary: MissionSummary,
    pub risks: Vec<String>,
    pub suggestions: Vec<String>,
    pub doctrine_ref: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Logistics
// ─────────────────────────────────────────────────────────────────────────────

/// Operational vehicles out of the whole fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportCapacity {
    pub operational: usize,
    pub total: usize,
}

impl fmt::Display for TransportCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}대 중 {}대 가동", self.total, self.operational)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelReading {
    pub fuel: FuelType,
    pub fill: Percentage,
}

impl fmt::Display for FuelReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} 보유", self.fuel.label(), self.fill)
    }
}

/// Open maintenance jobs at critical and urgent priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceBacklog {
    pub critical: usize,
    pub urgent: usize,
}

impl fmt::Display for MaintenanceBacklog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "긴급정비 {}건, 우선정비 {}건", self.critical, self.urgent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsAssessment {
    pub supply_status: String,
    pub transport_capacity: TransportCapacity,
    pub fuel_status: FuelReading,
    pub maintenance_priority: MaintenanceBacklog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsAnalysis {
    pub assessment: LogisticsAssessment,
    pub recommendations: Vec<String>,
    pub doctrine_ref: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Personnel
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReading {
    pub authorized: u32,
    pub available: u32,
    pub availability: Percentage,
}

impl fmt::Display for StrengthReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "편제 {}명 중 {}명 가용 ({})",
            self.authorized, self.available, self.availability
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelStrength {
    pub current_strength: StrengthReading,
    pub casualties: String,
    pub training_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelAnalysis {
    pub strength: PersonnelStrength,
    pub actions: Vec<String>,
    pub doctrine_ref: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Administration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTasks {
    pub reports: String,
    pub correspondence: String,
    pub records: String,
    pub compliance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAnalysis {
    pub tasks: AdminTasks,
    pub priorities: Vec<String>,
    pub doctrine_ref: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Intelligence
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceAssessment {
    pub threat_level: String,
    pub weather: String,
    pub terrain: String,
    pub enemy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceAnalysis {
    pub assessment: IntelligenceAssessment,
    pub recommendations: Vec<String>,
    pub doctrine_ref: String,
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
