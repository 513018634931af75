use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbound analysis request: raw article text, a URL to extract, or both.
/// At least one must be non-blank; when both are present the text wins and no
/// fetch is attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Biased words paired (by index, advisorily) with neutral alternatives.
///
/// Both sequences hold the sentinel `["None"]` when the oracle reported
/// nothing, and an oracle error string when the redline call failed outright.
/// The two sides are not guaranteed equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedlineResult {
    pub biased_words: Vec<String>,
    pub neutral_alternatives: Vec<String>,
}

/// The terminal artifact of one pipeline run. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasResult {
    pub title: String,
    pub original_article: String,
    pub published_date: String,
    /// In `[0, 100]`, rounded to two decimals. Higher means more biased.
    pub bias_score: f64,
    pub rewritten: String,
    pub redlined_text: RedlineResult,
    /// Word-level diff between original and rewritten text; never empty.
    pub changes: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
