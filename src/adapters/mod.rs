//! Adapters - Implementations of port interfaces.
//!
//! - `analysis` - Analysis engines (rule-based keyword engine)
//! - `events` - In-process listener registry for session events
//! - `terminal` - Text transcript renderer

pub mod analysis;
pub mod events;
pub mod terminal;

pub use analysis::KeywordAnalysisEngine;
pub use events::{ListenerRegistry, Subscription};
pub use terminal::TerminalRenderer;
