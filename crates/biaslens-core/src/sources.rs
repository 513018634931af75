//! Source-credibility lookup against a fixed reputation table.

use serde::{Deserialize, Serialize};

/// Static reputation table. Keys are reduced domains as produced by
/// [`extract_domain`]; lookup is a case-sensitive exact match.
const TRUSTED_SOURCES: &[(&str, CredibilityRating)] = &[
    ("bbc.com", CredibilityRating::High),
    ("nytimes.com", CredibilityRating::High),
    ("foxnews.com", CredibilityRating::Medium),
    ("indianexpress.com", CredibilityRating::High),
    ("reuters.com", CredibilityRating::High),
    ("theguardian.com", CredibilityRating::High),
    ("breitbart.com", CredibilityRating::Low),
    ("oann.com", CredibilityRating::Low),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredibilityRating {
    High,
    Medium,
    Low,
    Unknown,
}

/// A domain paired with its reputation-table rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCredibility {
    pub source: String,
    pub credibility: CredibilityRating,
}

/// Extracts the registrable domain from a URL for credibility lookup.
///
/// Parses the URL, takes the host, strips a leading `www.`, and reduces the
/// result to its last two dot-separated labels
/// (`https://www.bbc.com/news/x` → `bbc.com`).
///
/// Known limitation: multi-part public suffixes reduce wrongly
/// (`example.co.uk` → `co.uk`). Fixing this would change observable
/// credibility lookups, so the behavior is kept.
///
/// Returns `None` if the URL does not parse or has no host.
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        Some(host.to_string())
    } else {
        Some(labels[labels.len() - 2..].join("."))
    }
}

/// Rates a URL's source against the fixed reputation table.
///
/// Unknown or unparseable domains rate as `Unknown`. Pure function of the
/// static table: identical inputs always yield identical results.
#[must_use]
pub fn source_rating(url: &str) -> SourceCredibility {
    let Some(domain) = extract_domain(url) else {
        return SourceCredibility {
            source: "Unknown".to_string(),
            credibility: CredibilityRating::Unknown,
        };
    };

    let credibility = TRUSTED_SOURCES
        .iter()
        .find(|(d, _)| *d == domain)
        .map_or(CredibilityRating::Unknown, |(_, r)| *r);

    SourceCredibility {
        source: domain,
        credibility,
    }
}

#[cfg(test)]
#[path = "sources_test.rs"]
mod tests;
