//! Publication-date recovery from article HTML.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

static JSON_LD_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("valid json-ld script regex")
});

/// Meta-tag probes, tried in this exact order after JSON-LD.
const META_PROBES: &[&str] = &[
    r#"meta[property="article:published_time"]"#,
    r#"meta[property="og:published_time"]"#,
    r#"meta[name="datePublished"]"#,
    r#"meta[itemprop="datePublished"]"#,
];

/// Last-resort selector probes, tried after the `<time>` element.
const SELECTOR_PROBES: &[&str] = &[
    r#"meta[property="article:published"]"#,
    r#"meta[name="DC.date.issued"]"#,
    r#"meta[name="sailthru.date"]"#,
];

/// Recovers the publication timestamp exactly as the publisher wrote it.
///
/// Probes in strict order until one yields a value: JSON-LD `datePublished`
/// (first element when the payload is an array), the meta-tag list, an HTML5
/// `<time datetime=…>` element, then a handful of less common meta selectors.
/// The first hit wins; probes are never merged or cross-validated.
///
/// The returned string is the literal attribute value — no timezone
/// conversion, no reformatting. Callers wanting a normalized form should pass
/// it through [`normalize_date`], accepting that normalization may shift the
/// value to UTC. Malformed JSON-LD is treated as a non-match, not an error.
#[must_use]
pub fn resolve_raw_date(html: &str) -> Option<String> {
    if let Some(date) = json_ld_date(html) {
        return Some(date);
    }

    let document = Html::parse_document(html);

    for probe in META_PROBES {
        if let Some(date) = meta_content(&document, probe) {
            return Some(date);
        }
    }

    if let Some(date) = time_element_datetime(&document) {
        return Some(date);
    }

    for probe in SELECTOR_PROBES {
        if let Some(date) = meta_content(&document, probe) {
            return Some(date);
        }
    }

    None
}

/// Normalizes a raw date string to `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339, RFC 2822, and the common naive forms
/// (`2024-03-01T09:30:00`, `2024-03-01 09:30:00`, bare `2024-03-01`).
/// Zoned inputs are converted to UTC before formatting — this path is the
/// documented divergence from [`resolve_raw_date`], which never converts.
#[must_use]
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_utc().format("%Y-%m-%d %H:%M:%S").to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.to_utc().format("%Y-%m-%d %H:%M:%S").to_string());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.format("%Y-%m-%d %H:%M:%S").to_string());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(format!("{} 00:00:00", d.format("%Y-%m-%d")));
    }

    None
}

/// Pulls `datePublished` out of the first JSON-LD block that carries one.
///
/// Array payloads contribute their first element only. Blocks that fail to
/// parse as JSON are skipped silently.
fn json_ld_date(html: &str) -> Option<String> {
    for cap in JSON_LD_SCRIPT.captures_iter(html) {
        let raw = cap.get(1).map_or("", |m| m.as_str()).trim();
        if raw.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };

        let node = match &value {
            Value::Array(items) => items.first(),
            other => Some(other),
        };

        if let Some(date) = node
            .and_then(|n| n.get("datePublished"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return Some(date.to_string());
        }
    }
    None
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

static TIME_DATETIME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("time[datetime]").expect("valid time selector"));

fn time_element_datetime(document: &Html) -> Option<String> {
    document
        .select(&TIME_DATETIME)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
