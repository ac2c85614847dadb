use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::MovieStore,
    error::AppResult,
    models::{Filmography, Movie, Person},
};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the schema migrations bundled under `migrations/`
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

const MOVIE_COLUMNS: &str = "m.id, m.title, m.release_date, m.vote_average, m.vote_count, \
     m.revenue, m.budget, m.roi, m.overview, m.director_id";

/// Movie catalog backed by PostgreSQL
#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds a `LIKE` pattern matching `fragment` anywhere, with wildcards escaped
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait::async_trait]
impl MovieStore for PgMovieStore {
    async fn count_released_on_weekday(&self, iso_weekday: i32) -> AppResult<i64> {
        // release_date_or_null is NULL for malformed dates, so those rows never match
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM movies m \
             WHERE EXTRACT(ISODOW FROM release_date_or_null(m.release_date))::int = $1",
        )
        .bind(iso_weekday)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_released_in_month(&self, month: u32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM movies m \
             WHERE EXTRACT(MONTH FROM release_date_or_null(m.release_date))::int = $1",
        )
        .bind(month as i32)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m WHERE LOWER(m.title) = $1 ORDER BY m.id LIMIT 1"
        );
        let movie = sqlx::query_as::<_, Movie>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn find_title_containing(&self, fragment: &str) -> AppResult<Option<Movie>> {
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m \
             WHERE LOWER(m.title) LIKE $1 ESCAPE '\\' ORDER BY m.id LIMIT 1"
        );
        let movie = sqlx::query_as::<_, Movie>(&sql)
            .bind(contains_pattern(fragment))
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn actor_filmography(&self, name: &str) -> AppResult<Option<Filmography>> {
        let mut conn = self.pool.acquire().await?;

        let actor = sqlx::query_as::<_, Person>(
            "SELECT id, name FROM actors WHERE LOWER(name) = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(person) = actor else {
            return Ok(None);
        };

        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m \
             JOIN actor_movie am ON am.movie_id = m.id \
             WHERE am.actor_id = $1 ORDER BY m.id"
        );
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(person.id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(Filmography { person, movies }))
    }

    async fn director_filmography(&self, name: &str) -> AppResult<Option<Filmography>> {
        let mut conn = self.pool.acquire().await?;

        let director = sqlx::query_as::<_, Person>(
            "SELECT id, name FROM directors WHERE LOWER(name) = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(person) = director else {
            return Ok(None);
        };

        let sql =
            format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.director_id = $1 ORDER BY m.id");
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(person.id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(Filmography { person, movies }))
    }

    async fn movies_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Movie>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.id = ANY($1)");
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(movies)
    }

    async fn catalog_ids(&self) -> AppResult<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM movies ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }
}
