use std::collections::HashMap;

use crate::{
    db::MovieStore,
    error::AppResult,
    models::{
        calendar::normalize, Lookup, MessageEn, Recommendation, FILM_NOT_FOUND, NO_RECOMMENDATIONS,
    },
    services::similarity::SimilarityIndex,
};

/// Titles most similar to `title` according to the TF-IDF index
///
/// The title must first match some catalog row by case-insensitive substring;
/// otherwise the index is not consulted. Ranked ids that no longer exist in
/// the catalog are skipped, so fewer than `limit` titles may come back.
pub async fn get_recommendations(
    store: &dyn MovieStore,
    index: &SimilarityIndex,
    title: &str,
    limit: usize,
) -> AppResult<Lookup<Vec<Recommendation>, MessageEn>> {
    if store.find_title_containing(&normalize(title)).await?.is_none() {
        tracing::debug!(title = %title, "No catalog title matches query");
        return Ok(Lookup::Missing(MessageEn::new(FILM_NOT_FOUND)));
    }

    let ranked = index.most_similar(title, limit);
    let ids: Vec<i64> = ranked.iter().map(|r| r.movie_id).collect();

    let titles: HashMap<i64, String> = store
        .movies_by_ids(&ids)
        .await?
        .into_iter()
        .map(|movie| (movie.id, movie.title))
        .collect();

    let recommendations: Vec<Recommendation> = ids
        .iter()
        .filter_map(|id| titles.get(id))
        .map(|title| Recommendation {
            title: title.clone(),
        })
        .collect();

    tracing::info!(
        title = %title,
        ranked = ranked.len(),
        returned = recommendations.len(),
        top_score = ranked.first().map(|r| r.score).unwrap_or(0.0),
        "Computed recommendations"
    );

    if recommendations.is_empty() {
        return Ok(Lookup::Missing(MessageEn::new(NO_RECOMMENDATIONS)));
    }

    Ok(Lookup::Found(recommendations))
}
