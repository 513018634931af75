//! Two-tier article content extraction.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};

use crate::dates::normalize_date;
use crate::error::ExtractError;

/// Minimum body length, counted in characters, for an extraction to count as
/// successful. Anything at or below this is boilerplate noise, not an article.
pub const MIN_ARTICLE_CHARS: usize = 50;

/// Placeholder title when no `<title>` or heading is present.
const UNKNOWN_TITLE: &str = "Unknown Title";

/// Placeholder for an unrecoverable publication date.
const UNKNOWN_DATE: &str = "Unknown";

/// Tags whose subtrees never contribute visible article text.
const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "iframe", "header", "aside",
];

/// Class/id substrings that mark a likely main-content container.
static CONTENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)content|article|main|story|body").expect("valid class regex"));

/// Narrower class pattern for the fallback tier, where a single container is
/// taken wholesale: `story`/`body` markers also match sidebars and promos.
static FALLBACK_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)content|article|main").expect("valid fallback class regex"));

static CANDIDATE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"article, main, [itemprop="articleBody"]"#).expect("valid candidate selector")
});
static CLASSED_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class], [id]").expect("valid classed selector"));
static CLASS_ONLY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class]").expect("valid class selector"));
static PARAGRAPH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid paragraph selector"));
static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));
static OG_TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("valid og selector"));
static H1_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("valid h1"));
static ARTICLE_MAIN_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article, main").expect("valid container selector"));
static BODY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));

/// An article recovered from a fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
    /// `YYYY-MM-DD HH:MM:SS`, the publisher's literal string when it cannot
    /// be normalized, or `"Unknown"`.
    pub published_date: String,
}

/// Extracts `{title, text, published_date}` from fetched HTML.
///
/// `raw_date` is the publication timestamp already recovered from the same
/// page by [`crate::dates::resolve_raw_date`]; the caller probes the page
/// once and threads the result in. Tier 1 scores likely article containers by
/// paragraph density and takes the densest one. Tier 2 strips chrome
/// (script/style/nav/footer/iframe and friends), picks a main-content
/// container by tag or class pattern, and collects its visible text. Each
/// tier must clear [`MIN_ARTICLE_CHARS`] to win; tier 2 never carries a
/// publication date.
///
/// # Errors
///
/// Returns [`ExtractError::TooSparse`] when neither tier recovers more than
/// [`MIN_ARTICLE_CHARS`] characters of body text.
pub fn extract_article(
    html: &str,
    raw_date: Option<&str>,
) -> Result<ExtractedArticle, ExtractError> {
    let document = Html::parse_document(html);

    if let Some(article) = extract_readability(&document, raw_date) {
        return Ok(article);
    }

    let fallback = extract_generic(&document);
    let chars = fallback.text.chars().count();
    if chars > MIN_ARTICLE_CHARS {
        return Ok(fallback);
    }

    Err(ExtractError::TooSparse {
        chars,
        min: MIN_ARTICLE_CHARS,
    })
}

/// Tier 1: readability-style extraction.
///
/// Candidates are `article`/`main`/`[itemprop=articleBody]` elements plus any
/// element whose class or id matches the content pattern. Each candidate is
/// scored by the total character count of its paragraphs; the densest
/// candidate's paragraphs become the body.
fn extract_readability(document: &Html, raw_date: Option<&str>) -> Option<ExtractedArticle> {
    let mut candidates: Vec<ElementRef<'_>> = document.select(&CANDIDATE_SEL).collect();
    for element in document.select(&CLASSED_SEL) {
        let value = element.value();
        let marked = value
            .attr("class")
            .is_some_and(|c| CONTENT_CLASS.is_match(c))
            || value.attr("id").is_some_and(|i| CONTENT_CLASS.is_match(i));
        if marked {
            candidates.push(element);
        }
    }

    let best = candidates
        .into_iter()
        .map(|el| {
            let paragraphs: Vec<String> = el
                .select(&PARAGRAPH_SEL)
                .map(|p| compact_ws(&p.text().collect::<String>()))
                .filter(|t| !t.is_empty())
                .collect();
            let score: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
            (score, paragraphs)
        })
        .max_by_key(|(score, _)| *score)?;

    let (score, paragraphs) = best;
    if score <= MIN_ARTICLE_CHARS {
        return None;
    }

    let published_date = raw_date
        .map(|raw| normalize_date(raw).unwrap_or_else(|| raw.to_string()))
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    Some(ExtractedArticle {
        title: readability_title(document),
        text: paragraphs.join("\n"),
        published_date,
    })
}

/// Tier 2: generic whole-page fallback. Date recovery is out of reach here.
fn extract_generic(document: &Html) -> ExtractedArticle {
    let container = document
        .select(&ARTICLE_MAIN_SEL)
        .next()
        .or_else(|| {
            document
                .select(&CLASS_ONLY_SEL)
                .find(|el| el.value().attr("class").is_some_and(|c| FALLBACK_CLASS.is_match(c)))
        })
        .or_else(|| document.select(&BODY_SEL).next());

    let text = container.map_or_else(String::new, |el| visible_text(el));

    let title = document
        .select(&TITLE_SEL)
        .next()
        .map(|t| compact_ws(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    ExtractedArticle {
        title,
        text,
        published_date: UNKNOWN_DATE.to_string(),
    }
}

fn readability_title(document: &Html) -> String {
    document
        .select(&OG_TITLE_SEL)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(compact_ws)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            document
                .select(&TITLE_SEL)
                .next()
                .map(|t| compact_ws(&t.text().collect::<String>()))
                .filter(|t| !t.is_empty())
        })
        .or_else(|| {
            document
                .select(&H1_SEL)
                .next()
                .map(|t| compact_ws(&t.text().collect::<String>()))
                .filter(|t| !t.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Collects the container's visible text, one line per text node, skipping
/// anything under an excluded tag. Blank lines are dropped.
fn visible_text(container: ElementRef<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    for node in container.descendants() {
        if let Node::Text(text) = node.value() {
            let excluded = node.ancestors().any(|a| match a.value() {
                Node::Element(el) => EXCLUDED_TAGS.contains(&el.name()),
                _ => false,
            });
            if excluded {
                continue;
            }
            let line = compact_ws(text);
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }

    lines.join("\n")
}

fn compact_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "article_test.rs"]
mod tests;
