use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MonthCount, WeekdayCount},
    routes::{extract::QueryParams, AppState},
    services::releases,
};

#[derive(Debug, Deserialize)]
pub struct WeekdayParams {
    dia: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthParams {
    mes: String,
}

/// Handler for the releases-per-weekday endpoint
pub async fn by_weekday(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<WeekdayParams>,
) -> AppResult<Json<WeekdayCount>> {
    let count = releases::count_by_weekday(state.store.as_ref(), &params.dia).await?;
    Ok(Json(count))
}

/// Handler for the releases-per-month endpoint
pub async fn by_month(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<MonthParams>,
) -> AppResult<Json<MonthCount>> {
    let count = releases::count_by_month(state.store.as_ref(), &params.mes).await?;
    Ok(Json(count))
}
