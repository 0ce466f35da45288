//! Analysis engine adapters.

mod keyword_engine;

pub use keyword_engine::KeywordAnalysisEngine;
