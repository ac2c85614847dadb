use crate::{
    error::AppResult,
    models::{Filmography, Movie},
};

/// Read-only access to the movie catalog
///
/// Name and title arguments are expected to be already normalised (trimmed
/// and lowercased); implementations compare them against the lowercased
/// column value.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    /// Number of movies released on the given ISO weekday (Monday = 1)
    async fn count_released_on_weekday(&self, iso_weekday: i32) -> AppResult<i64>;

    /// Number of movies released in the given month (1-12)
    async fn count_released_in_month(&self, month: u32) -> AppResult<i64>;

    /// First movie whose title equals `title`, ignoring case
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>>;

    /// First movie whose title contains `fragment`, ignoring case
    async fn find_title_containing(&self, fragment: &str) -> AppResult<Option<Movie>>;

    /// Actor named `name` and the movies they appear in
    async fn actor_filmography(&self, name: &str) -> AppResult<Option<Filmography>>;

    /// Director named `name` and the movies they directed
    async fn director_filmography(&self, name: &str) -> AppResult<Option<Filmography>>;

    /// Movies with the given ids, in no particular order; unknown ids are skipped
    async fn movies_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Movie>>;

    /// All movie ids in ascending order
    async fn catalog_ids(&self) -> AppResult<Vec<i64>>;
}
