//! Analysis Module - Staff-function classification of operator input.
//!
//! # Components
//!
//! - `StaffAnalyzer` - Routes (text, function, reference data) to a classifier
//! - `Analysis` - Closed tagged union, one payload shape per staff function
//! - Per-function classifiers: keyword cues for operations, reference-data
//!   aggregates for logistics and personnel, standing tasks for admin and
//!   intelligence
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Guidance lists (risks,
//! recommendations, actions, priorities) are canonical doctrine lists and
//! never depend on the input text.

pub mod admin;
mod analyzer;
mod errors;
pub mod intelligence;
pub mod logistics;
pub mod operations;
mod payload;
pub mod personnel;
mod rules;

pub use analyzer::StaffAnalyzer;
pub use errors::AnalysisError;
pub use payload::{
    AdminAnalysis, AdminTasks, Analysis, FuelReading, IntelligenceAnalysis,
    IntelligenceAssessment, LogisticsAnalysis, LogisticsAssessment, MaintenanceBacklog,
    MissionSummary, OperationsAnalysis, PersonnelAnalysis, PersonnelStrength, StrengthReading,
    TransportCapacity,
};
