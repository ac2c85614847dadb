use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ActorSummary, DirectorSummary, Lookup, MessageEs, MessageEn},
    routes::{extract::QueryParams, AppState},
    services::people,
};

#[derive(Debug, Deserialize)]
pub struct ActorQuery {
    nombre_actor: String,
}

#[derive(Debug, Deserialize)]
pub struct DirectorQuery {
    nombre_director: String,
}

/// Handler for the actor aggregate endpoint
pub async fn actor(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ActorQuery>,
) -> AppResult<Json<Lookup<ActorSummary, MessageEn>>> {
    let summary = people::actor_summary(state.store.as_ref(), &params.nombre_actor).await?;
    Ok(Json(summary))
}

/// Handler for the director aggregate endpoint
pub async fn director(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<DirectorQuery>,
) -> AppResult<Json<Lookup<DirectorSummary, MessageEs>>> {
    let summary = people::director_summary(state.store.as_ref(), &params.nombre_director).await?;
    Ok(Json(summary))
}
