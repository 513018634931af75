use axum::Json;
use serde::Deserialize;

use biaslens_core::{source_rating, SourceCredibility};

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub(super) struct SourceCheckRequest {
    #[serde(default)]
    url: Option<String>,
}

/// `POST /api/source-check` — rate a URL's domain against the reputation
/// table. Pure lookup; identical URLs always yield identical responses.
pub(super) async fn source_check(
    Json(request): Json<SourceCheckRequest>,
) -> Result<Json<SourceCredibility>, ErrorResponse> {
    let url = request.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(ErrorResponse::bad_request("No URL provided"));
    }

    Ok(Json(source_rating(url)))
}
