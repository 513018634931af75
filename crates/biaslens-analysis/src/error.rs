use thiserror::Error;

/// Suggestion surfaced alongside extraction failures.
pub const PASTE_TEXT_SUGGESTION: &str =
    "Try pasting the article text directly instead of a URL.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing or malformed input; user-correctable before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Content unreachable or too sparse; the caller should paste raw text.
    #[error("extraction failed: {reason}")]
    Extraction { reason: String },

    /// The oracle's scoring reply contained no number. Fatal for the request:
    /// a bias result without a score is meaningless.
    #[error("bias score could not be determined")]
    ScoreUnparseable,
}
