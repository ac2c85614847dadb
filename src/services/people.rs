use crate::{
    db::MovieStore,
    error::AppResult,
    models::{
        calendar::{capitalize, normalize},
        ActorMovie, ActorSummary, DirectorMovie, DirectorSummary, FinancialTotals, Lookup,
        MessageEs, MessageEn, MovieFinancials, ACTOR_NOT_FOUND, DIRECTOR_NOT_FOUND,
    },
};

/// Revenue and ROI across an actor's movies
pub async fn actor_summary(
    store: &dyn MovieStore,
    name: &str,
) -> AppResult<Lookup<ActorSummary, MessageEn>> {
    let name = normalize(name);
    let Some(filmography) = store.actor_filmography(&name).await? else {
        return Ok(Lookup::Missing(MessageEn::new(ACTOR_NOT_FOUND)));
    };

    let financials: Vec<MovieFinancials> =
        filmography.movies.iter().map(MovieFinancials::from).collect();
    let totals = FinancialTotals::from_movies(&financials);

    tracing::debug!(
        actor_id = filmography.person.id,
        movies = financials.len(),
        "Built actor summary"
    );

    Ok(Lookup::Found(ActorSummary {
        actor: capitalize(&name),
        total_revenue: totals.revenue,
        total_roi: totals.roi,
        movies: financials.into_iter().map(ActorMovie::from).collect(),
    }))
}

/// Movie count, revenue and ROI across a director's movies
pub async fn director_summary(
    store: &dyn MovieStore,
    name: &str,
) -> AppResult<Lookup<DirectorSummary, MessageEs>> {
    let name = normalize(name);
    let Some(filmography) = store.director_filmography(&name).await? else {
        return Ok(Lookup::Missing(MessageEs::new(DIRECTOR_NOT_FOUND)));
    };

    let financials: Vec<MovieFinancials> =
        filmography.movies.iter().map(MovieFinancials::from).collect();
    let totals = FinancialTotals::from_movies(&financials);

    tracing::debug!(
        director_id = filmography.person.id,
        movies = financials.len(),
        "Built director summary"
    );

    Ok(Lookup::Found(DirectorSummary {
        director: capitalize(&name),
        cantidad_peliculas: financials.len(),
        exito_total: totals.revenue,
        roi_total: totals.roi,
        peliculas: financials.into_iter().map(DirectorMovie::from).collect(),
    }))
}
