//! Reference data store - read-only snapshots the analyzer queries.
//!
//! The snapshot is supplied once at construction and is never mutated
//! afterwards, so it is shared behind an `Arc` without locking.

mod logistics;
mod personnel;
mod sample;

pub use logistics::{
    FuelLevel, FuelStatus, FuelType, LogisticsData, MaintenanceItem, MaintenancePriority,
    SupplyItem, SupplyStatus, Vehicle, VehicleStatus,
};
pub use personnel::{
    AwardRecommendation, AwardStatus, CasualtyReport, CasualtyType, PersonnelData,
    TrainingStatus, UnitStrength,
};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while loading a reference snapshot.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed YAML reference data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed JSON reference data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reference data violates an invariant: {0}")]
    Invalid(#[from] ValidationError),
}

impl ReferenceDataError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReferenceDataError::Io { .. } => ErrorCode::ReferenceDataUnavailable,
            ReferenceDataError::Yaml(_) | ReferenceDataError::Json(_) => ErrorCode::InvalidFormat,
            ReferenceDataError::Invalid(err) => ErrorCode::from(err),
        }
    }
}

impl From<ReferenceDataError> for DomainError {
    fn from(err: ReferenceDataError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Complete reference snapshot, keyed by staff domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub logistics: LogisticsData,
    pub personnel: PersonnelData,
}

impl ReferenceData {
    /// The unit's demonstration dataset.
    pub fn sample() -> Self {
        sample::sample()
    }

    /// Parses and validates a YAML snapshot.
    pub fn from_yaml_str(input: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = serde_yaml::from_str(input)?;
        data.validate()?;
        Ok(data)
    }

    /// Parses and validates a JSON snapshot.
    pub fn from_json_str(input: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = serde_json::from_str(input)?;
        data.validate()?;
        Ok(data)
    }

    /// Loads a snapshot from disk. `.json` files are read as JSON,
    /// everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Checks every cross-field invariant of the snapshot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logistics.validate()?;
        self.personnel.validate()?;
        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::sample()
    }
}
