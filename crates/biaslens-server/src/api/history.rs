use axum::{extract::State, Extension, Json};

use crate::history::ScoreRecord;
use crate::middleware::RequestId;

use super::{AppState, ErrorResponse};

/// `GET /api/history` — all recorded bias scores, oldest first.
pub(super) async fn list_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<ScoreRecord>>, ErrorResponse> {
    let records = state.history.read().await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "failed to read score history");
        ErrorResponse::internal()
    })?;
    Ok(Json(records))
}
