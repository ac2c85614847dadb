use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "Database query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error de conexión a la base de datos".to_string(),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while loading the similarity artifacts at startup
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Vocabulary term '{term}' maps to column {index}, but the vectorizer has {dim} columns")]
    VocabularyOutOfRange {
        term: String,
        index: usize,
        dim: usize,
    },

    #[error("Matrix row {row} references column {column}, but the matrix has {dim} columns")]
    ColumnOutOfRange { row: usize, column: usize, dim: usize },

    #[error("Vectorizer has {vectorizer} features but the matrix has {matrix}")]
    FeatureMismatch { vectorizer: usize, matrix: usize },

    #[error("Matrix has no row ids")]
    MissingRowIds,

    #[error("Matrix has {rows} rows but {ids} row ids")]
    RowCountMismatch { rows: usize, ids: usize },

    #[error("Matrix has {rows} rows but the catalog holds {catalog} movies")]
    CatalogDrift { rows: usize, catalog: usize },

    #[error("Failed to read catalog ids: {0}")]
    Catalog(#[source] AppError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("Día no válido".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_maps_to_internal_error() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_maps_to_internal_error() {
        let response = AppError::Internal("bad date".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
