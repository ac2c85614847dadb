use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod financials;

pub use calendar::{MonthQuery, WeekdayQuery};
pub use financials::{FinancialTotals, MovieFinancials};

/// A row of the `movies` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: i64,
    pub revenue: Option<f64>,
    pub budget: Option<f64>,
    /// Stored ROI as loaded by the ETL; responses use [`MovieFinancials::roi`]
    pub roi: Option<f64>,
    pub overview: Option<String>,
    pub director_id: Option<i64>,
}

/// A row of the `actors` or `directors` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// A person together with the movies they are credited on
#[derive(Debug, Clone, PartialEq)]
pub struct Filmography {
    pub person: Person,
    pub movies: Vec<Movie>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Either a result payload or an informational message.
///
/// Absent data is a normal outcome, not an error, so both variants are served
/// with `200 OK`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Lookup<T, M> {
    Found(T),
    Missing(M),
}

/// Informational payload keyed as `mensaje`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageEs {
    pub mensaje: String,
}

impl MessageEs {
    pub fn new(text: &str) -> Self {
        Self {
            mensaje: text.to_string(),
        }
    }
}

/// Informational payload keyed as `message`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageEn {
    pub message: String,
}

impl MessageEn {
    pub fn new(text: &str) -> Self {
        Self {
            message: text.to_string(),
        }
    }
}

pub const TITLE_NOT_FOUND: &str = "No se encontró ninguna película con ese título.";
pub const NOT_ENOUGH_VOTES: &str =
    "La película no cumple con el requisito de tener al menos 2000 valoraciones.";
pub const ACTOR_NOT_FOUND: &str = "No se encontró el actor.";
pub const DIRECTOR_NOT_FOUND: &str = "No se encontró ningún director con ese nombre.";
pub const FILM_NOT_FOUND: &str = "No se encontró el film.";
pub const NO_RECOMMENDATIONS: &str = "No encontramos recomendaciones.";

/// Minimum vote count for the votes-by-title payload
pub const MIN_VOTE_COUNT: i64 = 2000;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekdayCount {
    pub dia: String,
    pub cantidad_peliculas: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthCount {
    pub mes: String,
    pub cantidad_peliculas: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleVotes {
    pub titulo: String,
    pub estreno: i32,
    pub cantidad_votos: i64,
    pub promedio_votos: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleScore {
    pub titulo: String,
    pub estreno: String,
    pub score: f64,
}

/// Per-movie entry of the actor aggregate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActorMovie {
    pub title: String,
    pub release_date: String,
    pub revenue: Option<f64>,
    pub budget: Option<f64>,
    pub profit: Option<f64>,
    pub roi: Option<f64>,
}

impl From<MovieFinancials> for ActorMovie {
    fn from(f: MovieFinancials) -> Self {
        Self {
            title: f.title,
            release_date: f.release_date,
            revenue: f.revenue,
            budget: f.budget,
            profit: f.profit,
            roi: f.roi,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActorSummary {
    pub actor: String,
    pub total_revenue: f64,
    pub total_roi: f64,
    pub movies: Vec<ActorMovie>,
}

/// Per-movie entry of the director aggregate
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectorMovie {
    pub titulo: String,
    pub fecha_lanzamiento: String,
    pub retorno: Option<f64>,
    pub costo: Option<f64>,
    pub ganancia: Option<f64>,
    pub roi: Option<f64>,
}

impl From<MovieFinancials> for DirectorMovie {
    fn from(f: MovieFinancials) -> Self {
        Self {
            titulo: f.title,
            fecha_lanzamiento: f.release_date,
            retorno: f.revenue,
            costo: f.budget,
            ganancia: f.profit,
            roi: f.roi,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectorSummary {
    pub director: String,
    pub cantidad_peliculas: usize,
    pub exito_total: f64,
    pub roi_total: f64,
    pub peliculas: Vec<DirectorMovie>,
}

/// Body of `POST /recommend/`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_serializes_untagged() {
        let found: Lookup<WeekdayCount, MessageEs> = Lookup::Found(WeekdayCount {
            dia: "martes".to_string(),
            cantidad_peliculas: 3,
        });
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            json!({"dia": "martes", "cantidad_peliculas": 3})
        );

        let missing: Lookup<TitleScore, MessageEs> =
            Lookup::Missing(MessageEs::new(TITLE_NOT_FOUND));
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({"mensaje": TITLE_NOT_FOUND})
        );
    }

    #[test]
    fn test_director_movie_uses_spanish_keys() {
        let entry = DirectorMovie::from(MovieFinancials {
            title: "Jumanji".to_string(),
            release_date: "1995-12-15".to_string(),
            revenue: Some(262_797_249.0),
            budget: Some(65_000_000.0),
            profit: Some(197_797_249.0),
            roi: None,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["titulo"], "Jumanji");
        assert_eq!(value["fecha_lanzamiento"], "1995-12-15");
        assert_eq!(value["costo"], 65_000_000.0);
        assert!(value["roi"].is_null());
    }
}
