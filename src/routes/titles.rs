use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Lookup, MessageEs, TitleScore, TitleVotes},
    routes::{extract::QueryParams, AppState},
    services::titles,
};

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    #[serde(rename = "titulo_de_la_filmación")]
    titulo: String,
}

/// Handler for the votes-by-title endpoint
pub async fn votes(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<TitleQuery>,
) -> AppResult<Json<Lookup<TitleVotes, MessageEs>>> {
    let result = titles::votes_by_title(state.store.as_ref(), &params.titulo).await?;
    Ok(Json(result))
}

/// Handler for the score-by-title endpoint
pub async fn score(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<TitleQuery>,
) -> AppResult<Json<Lookup<TitleScore, MessageEs>>> {
    let result = titles::score_by_title(state.store.as_ref(), &params.titulo).await?;
    Ok(Json(result))
}
