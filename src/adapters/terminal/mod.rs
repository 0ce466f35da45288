//! Terminal presentation adapter.

mod renderer;

pub use renderer::{render_analysis, render_message, TerminalRenderer, THINKING};
