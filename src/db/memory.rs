use chrono::Datelike;

use crate::{
    db::MovieStore,
    error::AppResult,
    models::{calendar::parse_release_date, Filmography, Movie, Person},
};

/// Movie catalog held in memory
///
/// Serves the same queries as [`PgMovieStore`](super::PgMovieStore) over a
/// fixed set of rows. Used by the HTTP tests and for running the API against a
/// fixture without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
    actors: Vec<Person>,
    directors: Vec<Person>,
    /// (actor_id, movie_id)
    credits: Vec<(i64, i64)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.movies.push(movie);
        self
    }

    pub fn with_director(mut self, director: Person) -> Self {
        self.directors.push(director);
        self
    }

    /// Adds an actor credited on the given movie ids
    pub fn with_actor(mut self, actor: Person, movie_ids: &[i64]) -> Self {
        self.credits
            .extend(movie_ids.iter().map(|movie_id| (actor.id, *movie_id)));
        self.actors.push(actor);
        self
    }

    fn sorted(mut movies: Vec<Movie>) -> Vec<Movie> {
        movies.sort_by_key(|m| m.id);
        movies
    }

    fn find_person<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
        people
            .iter()
            .filter(|p| p.name.to_lowercase() == name)
            .min_by_key(|p| p.id)
    }
}

#[async_trait::async_trait]
impl MovieStore for InMemoryStore {
    async fn count_released_on_weekday(&self, iso_weekday: i32) -> AppResult<i64> {
        let count = self
            .movies
            .iter()
            .filter_map(|m| parse_release_date(&m.release_date))
            .filter(|date| date.weekday().number_from_monday() as i32 == iso_weekday)
            .count();
        Ok(count as i64)
    }

    async fn count_released_in_month(&self, month: u32) -> AppResult<i64> {
        let count = self
            .movies
            .iter()
            .filter_map(|m| parse_release_date(&m.release_date))
            .filter(|date| date.month() == month)
            .count();
        Ok(count as i64)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        Ok(self
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase() == title)
            .min_by_key(|m| m.id)
            .cloned())
    }

    async fn find_title_containing(&self, fragment: &str) -> AppResult<Option<Movie>> {
        let fragment = fragment.to_lowercase();
        Ok(self
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&fragment))
            .min_by_key(|m| m.id)
            .cloned())
    }

    async fn actor_filmography(&self, name: &str) -> AppResult<Option<Filmography>> {
        let Some(person) = Self::find_person(&self.actors, name) else {
            return Ok(None);
        };

        let movies = self
            .movies
            .iter()
            .filter(|m| self.credits.contains(&(person.id, m.id)))
            .cloned()
            .collect();

        Ok(Some(Filmography {
            person: person.clone(),
            movies: Self::sorted(movies),
        }))
    }

    async fn director_filmography(&self, name: &str) -> AppResult<Option<Filmography>> {
        let Some(person) = Self::find_person(&self.directors, name) else {
            return Ok(None);
        };

        let movies = self
            .movies
            .iter()
            .filter(|m| m.director_id == Some(person.id))
            .cloned()
            .collect();

        Ok(Some(Filmography {
            person: person.clone(),
            movies: Self::sorted(movies),
        }))
    }

    async fn movies_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Movie>> {
        Ok(self
            .movies
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn catalog_ids(&self) -> AppResult<Vec<i64>> {
        let mut ids: Vec<i64> = self.movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, release_date: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_date: release_date.to_string(),
            vote_average: 6.5,
            vote_count: 100,
            revenue: None,
            budget: None,
            roi: None,
            overview: None,
            director_id: None,
        }
    }

    #[tokio::test]
    async fn test_weekday_count_skips_malformed_dates() {
        // 2024-01-02 was a Tuesday
        let store = InMemoryStore::new()
            .with_movie(movie(1, "A", "2024-01-02"))
            .with_movie(movie(2, "B", "2024-01-09"))
            .with_movie(movie(3, "C", "not a date"))
            .with_movie(movie(4, "D", "2024-02-30"))
            .with_movie(movie(5, "E", "1995-00-00"));

        assert_eq!(store.count_released_on_weekday(2).await.unwrap(), 2);
        assert_eq!(store.count_released_on_weekday(3).await.unwrap(), 0);
        // 1995-01-01 would have been a Sunday
        assert_eq!(store.count_released_on_weekday(7).await.unwrap(), 0);
        assert_eq!(store.count_released_in_month(1).await.unwrap(), 2);
        assert_eq!(store.count_released_in_month(2).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_title_lookups_ignore_case() {
        let store = InMemoryStore::new()
            .with_movie(movie(2, "Toy Story 2", "1999-10-30"))
            .with_movie(movie(1, "Toy Story", "1995-10-30"));

        let exact = store.find_by_title("toy story").await.unwrap().unwrap();
        assert_eq!(exact.id, 1);

        let partial = store.find_title_containing("STORY").await.unwrap().unwrap();
        assert_eq!(partial.id, 1);

        assert!(store.find_by_title("story").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_actor_filmography_follows_credits() {
        let store = InMemoryStore::new()
            .with_movie(movie(1, "Toy Story", "1995-10-30"))
            .with_movie(movie(2, "Jumanji", "1995-12-15"))
            .with_movie(movie(3, "Big", "1988-06-03"))
            .with_actor(
                Person {
                    id: 7,
                    name: "Tom Hanks".to_string(),
                },
                &[3, 1],
            );

        let filmography = store.actor_filmography("tom hanks").await.unwrap().unwrap();
        let ids: Vec<i64> = filmography.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.actor_filmography("robin williams").await.unwrap().is_none());
    }
}
