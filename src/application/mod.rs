//! Application layer - orchestrates the session, engine and listeners.

mod session_controller;

pub use session_controller::{PendingAnalysis, SessionController, SubmitOutcome};
