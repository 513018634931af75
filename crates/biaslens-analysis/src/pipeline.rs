//! Bias-analysis pipeline orchestration.

use chrono::Utc;

use biaslens_extract::{extract_article, resolve_raw_date, ExtractedArticle, PageClient};

use crate::error::AnalysisError;
use crate::highlight::highlight_changes;
use crate::oracle::Oracle;
use crate::parse::{extract_score, parse_redline};
use crate::types::{AnalysisRequest, BiasResult, RedlineResult};

const SCORE_PROMPT: &str = "Analyze the bias in this article and return ONLY a number between 0 \
                            and 100. A higher number means more bias.";

const REWRITE_PROMPT: &str = "Rewrite this article in a fully neutral way, removing any \
                              emotionally charged language or bias.";

const REDLINE_PROMPT: &str = "Identify biased words and suggest neutral alternatives. Only \
                              return data in this exact format: \nBiased words: [word1, word2]\n\
                              Neutral alternatives: [alt1, alt2]\n";

/// Title used when the caller supplies raw text instead of a URL.
const USER_TEXT_TITLE: &str = "User-provided text";

enum Input {
    Text(String),
    Url(String),
}

/// Orchestrates one bias analysis end to end.
///
/// Linear state machine: validate, extract when given a URL, then three
/// sequential oracle calls (score, rewrite, redline) in that fixed order.
/// A missing score fails the request before the rewrite and redline calls
/// are spent; a failure in either of those degrades to a sentinel string
/// inside the assembled result instead of failing it.
pub struct BiasAnalyzer {
    oracle: Box<dyn Oracle>,
    page_client: PageClient,
    temperature: f32,
}

impl BiasAnalyzer {
    #[must_use]
    pub fn new(oracle: Box<dyn Oracle>, page_client: PageClient, temperature: f32) -> Self {
        Self {
            oracle,
            page_client,
            temperature,
        }
    }

    /// Runs the pipeline for one request. Every stage is attempted exactly
    /// once; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Validation`] — neither text nor URL present, or the
    ///   URL is missing a scheme/host.
    /// - [`AnalysisError::Extraction`] — the page could not be fetched or
    ///   yielded too little text.
    /// - [`AnalysisError::ScoreUnparseable`] — the scoring reply carried no
    ///   number.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<BiasResult, AnalysisError> {
        let input = validate(request)?;

        let (title, text, published_date) = match input {
            Input::Text(text) => (USER_TEXT_TITLE.to_string(), text, "Unknown".to_string()),
            Input::Url(url) => {
                let (article, raw_date) = self.extract(&url).await?;
                let date = raw_date.unwrap_or(article.published_date);
                (article.title, article.text, date)
            }
        };

        let bias_score = self.score(&text).await?;

        let rewritten = match self
            .oracle
            .analyze(&text, REWRITE_PROMPT, self.temperature)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "rewrite call failed; embedding sentinel");
                e.sentinel().to_string()
            }
        };

        let redlined_text = match self
            .oracle
            .analyze(&text, REDLINE_PROMPT, self.temperature)
            .await
        {
            Ok(reply) => parse_redline(&reply),
            Err(e) => {
                tracing::warn!(error = %e, "redline call failed; embedding sentinel");
                RedlineResult {
                    biased_words: vec![e.sentinel().to_string()],
                    neutral_alternatives: vec![e.sentinel().to_string()],
                }
            }
        };

        let changes = highlight_changes(&text, &rewritten);

        Ok(BiasResult {
            title,
            original_article: text,
            published_date,
            bias_score,
            rewritten,
            redlined_text,
            changes,
            timestamp: Utc::now(),
        })
    }

    /// Fetches the page once; the raw-date probes run once over the fetched
    /// HTML and the result is threaded into the extractor.
    async fn extract(
        &self,
        url: &str,
    ) -> Result<(ExtractedArticle, Option<String>), AnalysisError> {
        let html = self
            .page_client
            .fetch_html(url)
            .await
            .map_err(|e| AnalysisError::Extraction {
                reason: e.to_string(),
            })?;

        let raw_date = resolve_raw_date(&html);
        let article = extract_article(&html, raw_date.as_deref()).map_err(|e| {
            AnalysisError::Extraction {
                reason: e.to_string(),
            }
        })?;

        Ok((article, raw_date))
    }

    /// Score stage. An oracle failure here surfaces as `ScoreUnparseable`:
    /// its sentinel string carries no digits, so the outcome is the same as
    /// a digit-free reply, checked before the remaining calls are made.
    async fn score(&self, text: &str) -> Result<f64, AnalysisError> {
        let reply = match self.oracle.analyze(text, SCORE_PROMPT, self.temperature).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "score call failed");
                return Err(AnalysisError::ScoreUnparseable);
            }
        };

        let score = extract_score(&reply).ok_or(AnalysisError::ScoreUnparseable)?;
        Ok((score.clamp(0.0, 100.0) * 100.0).round() / 100.0)
    }
}

/// Validation stage: trims both fields, requires at least one, and rejects
/// URLs without a scheme and host before any fetch is attempted.
fn validate(request: &AnalysisRequest) -> Result<Input, AnalysisError> {
    let text = request.text.as_deref().map(str::trim).unwrap_or_default();
    if !text.is_empty() {
        return Ok(Input::Text(text.to_string()));
    }

    let url = request.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(AnalysisError::Validation(
            "no text or URL provided".to_string(),
        ));
    }

    let parsed = reqwest::Url::parse(url)
        .map_err(|_| AnalysisError::Validation(format!("malformed URL: {url}")))?;
    if parsed.host_str().is_none() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(AnalysisError::Validation(format!("malformed URL: {url}")));
    }

    Ok(Input::Url(url.to_string()))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
