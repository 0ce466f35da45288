//! Advisor configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::staff::StaffFunction;

/// Upper bound for the simulated thinking delay.
pub const MAX_LATENCY_MS: u64 = 30_000;

/// Advisor behaviour configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// Delay before each analysis is returned, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,

    /// YAML or JSON reference dataset; the built-in sample when unset
    #[serde(default)]
    pub reference_data_path: Option<PathBuf>,

    /// Staff function selected when the session starts
    #[serde(default)]
    pub initial_staff_function: StaffFunction,
}

impl AdvisorConfig {
    /// Get simulated latency as Duration
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn reference_data_path(&self) -> Option<&Path> {
        self.reference_data_path.as_deref()
    }

    /// Validate advisor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_latency_ms > MAX_LATENCY_MS {
            return Err(ValidationError::LatencyTooLarge {
                actual: self.simulated_latency_ms,
                max: MAX_LATENCY_MS,
            });
        }

        if let Some(path) = &self.reference_data_path {
            if !path.is_file() {
                return Err(ValidationError::ReferenceDataNotFound(
                    path.display().to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency_ms(),
            reference_data_path: None,
            initial_staff_function: StaffFunction::default(),
        }
    }
}

fn default_latency_ms() -> u64 {
    1500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_config_defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.simulated_latency_ms, 1500);
        assert_eq!(config.simulated_latency(), Duration::from_millis(1500));
        assert_eq!(config.initial_staff_function, StaffFunction::Operations);
        assert!(config.reference_data_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_latency_upper_bound() {
        let config = AdvisorConfig {
            simulated_latency_ms: MAX_LATENCY_MS + 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::LatencyTooLarge {
                actual: MAX_LATENCY_MS + 1,
                max: MAX_LATENCY_MS
            })
        );
    }

    #[test]
    fn test_zero_latency_is_valid() {
        let config = AdvisorConfig {
            simulated_latency_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_reference_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = AdvisorConfig {
            reference_data_path: Some(dir.path().join("missing.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ReferenceDataNotFound(_))
        ));
    }

    #[test]
    fn test_existing_reference_file_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = AdvisorConfig {
            reference_data_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
