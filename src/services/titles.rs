use crate::{
    db::MovieStore,
    error::{AppError, AppResult},
    models::{
        calendar::{normalize, release_year},
        Lookup, MessageEs, TitleScore, TitleVotes, MIN_VOTE_COUNT, NOT_ENOUGH_VOTES,
        TITLE_NOT_FOUND,
    },
};

/// Vote statistics for a title, served only once it has enough votes
pub async fn votes_by_title(
    store: &dyn MovieStore,
    title: &str,
) -> AppResult<Lookup<TitleVotes, MessageEs>> {
    let Some(movie) = store.find_by_title(&normalize(title)).await? else {
        return Ok(Lookup::Missing(MessageEs::new(TITLE_NOT_FOUND)));
    };

    if movie.vote_count < MIN_VOTE_COUNT {
        tracing::debug!(
            title = %movie.title,
            vote_count = movie.vote_count,
            "Title below vote threshold"
        );
        return Ok(Lookup::Missing(MessageEs::new(NOT_ENOUGH_VOTES)));
    }

    let estreno = release_year(&movie.release_date).ok_or_else(|| {
        AppError::Internal(format!(
            "Formato de fecha no válido en la base de datos: {}",
            movie.release_date
        ))
    })?;

    Ok(Lookup::Found(TitleVotes {
        titulo: movie.title,
        estreno,
        cantidad_votos: movie.vote_count,
        promedio_votos: movie.vote_average,
    }))
}

/// Release date and average score for a title
pub async fn score_by_title(
    store: &dyn MovieStore,
    title: &str,
) -> AppResult<Lookup<TitleScore, MessageEs>> {
    let movie = store.find_by_title(&normalize(title)).await?;

    Ok(match movie {
        Some(movie) => Lookup::Found(TitleScore {
            titulo: movie.title,
            estreno: movie.release_date,
            score: movie.vote_average,
        }),
        None => Lookup::Missing(MessageEs::new(TITLE_NOT_FOUND)),
    })
}
