//! Article content extraction for BiasLens.
//!
//! Fetches a news page once, then recovers `{title, text, published_date}`
//! through a two-tier strategy: a readability-style pass over likely article
//! containers, then a generic strip-and-select fallback. A separate resolver
//! probes the same page for the publisher's literal publication timestamp.

pub mod article;
pub mod client;
pub mod dates;
pub mod error;

pub use article::{extract_article, ExtractedArticle, MIN_ARTICLE_CHARS};
pub use client::PageClient;
pub use dates::{normalize_date, resolve_raw_date};
pub use error::ExtractError;

