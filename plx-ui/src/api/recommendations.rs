//! Recommendations endpoint
//!
//! The orchestrated fan-out behind the page: interprets the raw query
//! parameters, short-circuits when no item id was supplied, and otherwise
//! fans out one placement call per requested model.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use plx_common::api::types::RecommendationResponse;

use crate::query;
use crate::AppState;

/// Raw query parameters for the recommendations endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    /// Item identifier; absent or empty means "no item specified"
    pub item_id: Option<String>,

    /// Comma-separated model identifiers
    pub model: Option<String>,
}

/// GET /api/recommendations?item_id=abc123&model=L_prod,B_prod
///
/// Always returns one outcome per requested model, in request order, with
/// per-model failures recovered into that entry's `error` field. Without an
/// item id no outbound call is made and `results` is empty; the page
/// renders its global empty state from that.
pub async fn get_recommendations(
    State(state): State<AppState>,
    params: Result<Query<RecommendationParams>, QueryRejection>,
) -> Result<Json<RecommendationResponse>, RecommendationsError> {
    let Query(params) =
        params.map_err(|e| RecommendationsError::InvalidQuery(e.body_text()))?;

    let request = query::parse(
        params.item_id.as_deref(),
        params.model.as_deref(),
        &state.config,
    );

    if !request.item_specified {
        debug!("No item id supplied; returning empty state");
        return Ok(Json(RecommendationResponse {
            item_id: None,
            models: request.models,
            results: Vec::new(),
            error: None,
        }));
    }

    info!(
        item_id = %request.item_id,
        models = ?request.models,
        "Fetching recommendations"
    );

    let results = state.orchestrator.fetch_all(&request).await;

    Ok(Json(RecommendationResponse {
        item_id: Some(request.item_id),
        models: request.models,
        results,
        error: None,
    }))
}

/// Request-level errors: failures outside the per-model isolation boundary.
/// Per-model failures never surface here.
#[derive(Debug)]
pub enum RecommendationsError {
    InvalidQuery(String),
}

impl IntoResponse for RecommendationsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecommendationsError::InvalidQuery(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameters: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
