use axum::{extract::State, Extension, Json};

use biaslens_analysis::{AnalysisRequest, BiasResult};

use crate::middleware::RequestId;

use super::{map_analysis_error, AppState, ErrorResponse};

/// `POST /api/analyze` — run the bias pipeline on text or a URL.
///
/// Successful analyses are appended to the score-history log; a failed append
/// is logged but never fails the response.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<BiasResult>, ErrorResponse> {
    let result = state.analyzer.analyze(&request).await.map_err(|e| {
        tracing::info!(request_id = %req_id.0, error = %e, "analysis rejected");
        map_analysis_error(&e)
    })?;

    if let Err(e) = state
        .history
        .append(&result.original_article, result.bias_score)
        .await
    {
        tracing::warn!(request_id = %req_id.0, error = %e, "failed to record score history");
    }

    Ok(Json(result))
}
