use super::Movie;

/// Revenue figures for one movie, with derived profit and ROI
///
/// ROI is always computed as `profit / budget`; the stored `movies.roi`
/// column is not consulted so actor and director aggregates agree.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFinancials {
    pub title: String,
    pub release_date: String,
    pub revenue: Option<f64>,
    pub budget: Option<f64>,
    pub profit: Option<f64>,
    pub roi: Option<f64>,
}

impl From<&Movie> for MovieFinancials {
    fn from(movie: &Movie) -> Self {
        let profit = match (movie.revenue, movie.budget) {
            (Some(revenue), Some(budget)) => Some(revenue - budget),
            _ => None,
        };
        let roi = match (profit, movie.budget) {
            (Some(profit), Some(budget)) if budget != 0.0 => Some(profit / budget),
            _ => None,
        };

        Self {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            revenue: movie.revenue,
            budget: movie.budget,
            profit,
            roi,
        }
    }
}

/// Totals across a person's filmography
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialTotals {
    pub revenue: f64,
    pub roi: f64,
}

impl FinancialTotals {
    /// Sums non-null revenues and ROIs, rounded to two decimals
    pub fn from_movies(movies: &[MovieFinancials]) -> Self {
        let revenue: f64 = movies.iter().filter_map(|m| m.revenue).sum();
        let roi: f64 = movies.iter().filter_map(|m| m.roi).sum();
        Self {
            revenue: round2(revenue),
            roi: round2(roi),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
