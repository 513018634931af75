use std::time::Duration;

use reqwest::Client;

use crate::error::ExtractError;

/// HTTP client for fetching article pages.
///
/// Sends a browser-like `User-Agent` and an HTML `Accept` header; many news
/// sites serve interstitials or 403s to default library agents. Every fetch is
/// a single attempt with a bounded timeout — extraction is best-effort and the
/// pipeline never retries a stage.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the configured timeout and `User-Agent`.
    ///
    /// The same value bounds both the connect phase and the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw HTML of `url`. Exactly one attempt.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::UnexpectedStatus`] — any non-2xx response.
    /// - [`ExtractError::Http`] — network failure or timeout.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        tracing::debug!(%url, "fetching article page");
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
