use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Lookup, MessageEn, Recommendation, RecommendationRequest},
    routes::{extract::JsonBody, AppState},
    services::recommendations,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    JsonBody(request): JsonBody<RecommendationRequest>,
) -> AppResult<Json<Lookup<Vec<Recommendation>, MessageEn>>> {
    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        "Processing recommendation request"
    );

    let result = recommendations::get_recommendations(
        state.store.as_ref(),
        &state.similarity,
        &request.title,
        state.recommendation_limit,
    )
    .await?;

    Ok(Json(result))
}
