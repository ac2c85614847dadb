use crate::{
    db::MovieStore,
    error::AppResult,
    models::{MonthCount, MonthQuery, WeekdayCount, WeekdayQuery},
};

/// Counts movies released on a weekday given by its Spanish name
///
/// Rejects unknown names before touching the store.
pub async fn count_by_weekday(store: &dyn MovieStore, dia: &str) -> AppResult<WeekdayCount> {
    let query = WeekdayQuery::parse(dia)?;
    let count = store.count_released_on_weekday(query.iso_number()).await?;

    tracing::debug!(dia = %query.name, count, "Counted releases by weekday");

    Ok(WeekdayCount {
        dia: query.name,
        cantidad_peliculas: count,
    })
}

/// Counts movies released in a month given by its Spanish name
pub async fn count_by_month(store: &dyn MovieStore, mes: &str) -> AppResult<MonthCount> {
    let query = MonthQuery::parse(mes)?;
    let count = store.count_released_in_month(query.number).await?;

    tracing::debug!(mes = %query.name, count, "Counted releases by month");

    Ok(MonthCount {
        mes: query.name,
        cantidad_peliculas: count,
    })
}
