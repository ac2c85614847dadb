use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    db::MovieStore,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::SimilarityIndex,
};

pub mod extract;
pub mod people;
pub mod recommendations;
pub mod releases;
pub mod titles;

/// Read-only state shared by every handler
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub similarity: Arc<SimilarityIndex>,
    pub recommendation_limit: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MovieStore>,
        similarity: Arc<SimilarityIndex>,
        recommendation_limit: usize,
    ) -> Self {
        Self {
            store,
            similarity,
            recommendation_limit,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/cantidad_filmaciones_dia/", get(releases::by_weekday))
        .route("/cantidad_filmaciones_mes/", get(releases::by_month))
        .route("/votos_titulo/", get(titles::votes))
        .route("/score_titulo/", get(titles::score))
        .route("/get_actor/", get(people::actor))
        .route("/get_director/", get(people::director))
        .route("/recommend/", post(recommendations::recommend))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
