//! Staff Advisor - Interactive staff-function advisory assistant
//!
//! Routes operator requests to one of five military staff sections and
//! answers each with a structured, rule-based analysis grounded in a static
//! reference dataset. A conversation session keeps the transcript and allows
//! at most one analysis in flight at a time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
