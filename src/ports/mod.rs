//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalysisEngine` - Produces a staff analysis for a submission
//! - `SessionListener` - Observes session events (messages, selection, awaiting flag)

mod analysis_engine;
mod session_listener;

pub use analysis_engine::AnalysisEngine;
pub use session_listener::SessionListener;
