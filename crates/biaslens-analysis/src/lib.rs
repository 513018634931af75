//! Bias analysis pipeline for BiasLens.
//!
//! Delegates scoring, neutral rewriting, and redlining of an article to an
//! external text-analysis oracle, parses the oracle's semi-structured replies
//! with defensive fallbacks, and explains the rewrite as a word-level diff.

pub mod error;
pub mod highlight;
pub mod oracle;
pub mod parse;
pub mod pipeline;
pub mod types;

pub use error::AnalysisError;
pub use highlight::highlight_changes;
pub use oracle::{OpenAiOracle, Oracle, OracleError};
pub use parse::{extract_score, parse_redline};
pub use pipeline::BiasAnalyzer;
pub use types::{AnalysisRequest, BiasResult, RedlineResult};
