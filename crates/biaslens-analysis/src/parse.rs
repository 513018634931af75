//! Format-tolerant parsing of the oracle's free-text replies.
//!
//! The oracle's exact phrasing is the real contract here: the parsers pull
//! out what matches and fall back to sentinels, never guessing intent when
//! the format is violated.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RedlineResult;

/// Sentinel meaning "parsed successfully, nothing found".
pub const NONE_SENTINEL: &str = "None";

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid number regex"));

static BIASED_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Biased words:\s*\[(.*?)\]").expect("valid biased-words regex")
});

static NEUTRAL_ALTERNATIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Neutral alternatives:\s*\[(.*?)\]").expect("valid alternatives regex")
});

/// Extracts the first decimal number from a scoring reply.
///
/// `"Bias score: 73.5 out of 100"` yields `73.5`. Returns `None` when the
/// reply contains no digits — a hard failure for the pipeline, since a bias
/// result without a score is meaningless.
#[must_use]
pub fn extract_score(text: &str) -> Option<f64> {
    NUMBER.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Parses the tagged-bracket redline format:
///
/// ```text
/// Biased words: [word1, word2]
/// Neutral alternatives: [alt1, alt2]
/// ```
///
/// Labels are matched case-insensitively; entries are comma-split and
/// trimmed. A missing label or empty bracket yields `["None"]` for that
/// field. No word is ever fabricated: every returned entry is a substring of
/// the oracle's reply.
#[must_use]
pub fn parse_redline(text: &str) -> RedlineResult {
    RedlineResult {
        biased_words: bracket_list(&BIASED_WORDS, text),
        neutral_alternatives: bracket_list(&NEUTRAL_ALTERNATIVES, text),
    }
}

fn bracket_list(re: &Regex, text: &str) -> Vec<String> {
    let entries: Vec<String> = re
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    if entries.is_empty() {
        vec![NONE_SENTINEL.to_string()]
    } else {
        entries
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
