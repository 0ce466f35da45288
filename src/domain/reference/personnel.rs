//! Personnel reference records: strength, casualties, training, awards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// Head counts for the unit.
///
/// # Invariants
///
/// `authorized >= assigned >= present >= available`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStrength {
    pub authorized: u32,
    pub assigned: u32,
    pub present: u32,
    pub available: u32,
}

impl UnitStrength {
    /// Available personnel as a share of authorized strength.
    pub fn availability(&self) -> Percentage {
        Percentage::of(u64::from(self.available), u64::from(self.authorized))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let chain = [
            ("strength.assigned", self.assigned, self.authorized),
            ("strength.present", self.present, self.assigned),
            ("strength.available", self.available, self.present),
        ];
        for (field, value, ceiling) in chain {
            if value > ceiling {
                return Err(ValidationError::out_of_range(
                    field,
                    0,
                    i64::from(ceiling),
                    i64::from(value),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasualtyType {
    #[serde(rename = "KIA")]
    Kia,
    #[serde(rename = "WIA")]
    Wia,
    #[serde(rename = "MIA")]
    Mia,
    #[serde(rename = "RTD")]
    Rtd,
}

impl CasualtyType {
    pub fn label(&self) -> &'static str {
        match self {
            CasualtyType::Kia => "전사",
            CasualtyType::Wia => "부상",
            CasualtyType::Mia => "실종",
            CasualtyType::Rtd => "복귀",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyReport {
    pub id: String,
    pub name: String,
    pub rank: String,
    #[serde(rename = "type")]
    pub casualty_type: CasualtyType,
    pub date: NaiveDate,
    /// Free-text condition, e.g. "안정".
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStatus {
    pub id: String,
    pub training: String,
    pub completed: u32,
    pub total: u32,
    pub due_date: NaiveDate,
}

impl TrainingStatus {
    pub fn completion(&self) -> Percentage {
        Percentage::of(u64::from(self.completed), u64::from(self.total))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardStatus {
    Pending,
    Approved,
    Submitted,
}

impl AwardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AwardStatus::Pending => "대기",
            AwardStatus::Approved => "승인",
            AwardStatus::Submitted => "제출",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecommendation {
    pub id: String,
    pub name: String,
    pub rank: String,
    pub award: String,
    pub status: AwardStatus,
}

/// Personnel snapshot as maintained by the S1 section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelData {
    pub strength: UnitStrength,
    pub casualties: Vec<CasualtyReport>,
    pub training: Vec<TrainingStatus>,
    pub awards: Vec<AwardRecommendation>,
}

impl PersonnelData {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        self.strength.validate()?;
        for record in &self.training {
            if record.completed > record.total {
                return Err(ValidationError::out_of_range(
                    format!("training.{}.completed", record.id),
                    0,
                    i64::from(record.total),
                    i64::from(record.completed),
                ));
            }
        }
        Ok(())
    }
}
