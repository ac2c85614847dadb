//! Content-based similarity over a precomputed TF-IDF index
//!
//! The vectorizer and the document-term matrix are produced offline and loaded
//! once at startup. Queries are projected into the same space and ranked
//! against every catalog row by cosine similarity.

use std::cmp::Ordering;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{db::MovieStore, error::ModelError};

pub mod matrix;
pub mod vectorizer;

use matrix::{l2_norm, IndexedRow};
pub use matrix::TermMatrix;
pub use vectorizer::{Norm, SparseVector, TfidfVectorizer};

/// A scored matrix row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie {
    pub position: usize,
    pub movie_id: i64,
    pub score: f64,
}

/// Immutable vectorizer + matrix pair with the row position -> movie id mapping
#[derive(Debug)]
pub struct SimilarityIndex {
    vectorizer: TfidfVectorizer,
    rows: Vec<IndexedRow>,
    row_ids: Vec<i64>,
}

impl SimilarityIndex {
    /// Builds an index from artifacts that carry their own row ids
    pub fn new(vectorizer: TfidfVectorizer, matrix: TermMatrix) -> Result<Self, ModelError> {
        let row_ids = matrix.row_ids.clone().ok_or(ModelError::MissingRowIds)?;
        Self::with_row_ids(vectorizer, matrix, row_ids)
    }

    /// Builds an index with an explicit row position -> movie id mapping
    pub fn with_row_ids(
        vectorizer: TfidfVectorizer,
        mut matrix: TermMatrix,
        row_ids: Vec<i64>,
    ) -> Result<Self, ModelError> {
        vectorizer.validate()?;

        if matrix.n_features != vectorizer.dimension() {
            return Err(ModelError::FeatureMismatch {
                vectorizer: vectorizer.dimension(),
                matrix: matrix.n_features,
            });
        }
        if row_ids.len() != matrix.rows.len() {
            return Err(ModelError::RowCountMismatch {
                rows: matrix.rows.len(),
                ids: row_ids.len(),
            });
        }
        matrix.normalize_rows()?;

        let rows = matrix.rows.into_iter().map(IndexedRow::new).collect();

        Ok(Self {
            vectorizer,
            rows,
            row_ids,
        })
    }

    /// Loads both artifacts from disk
    ///
    /// When the matrix has no `row_ids`, rows are assumed to follow the
    /// catalog's ascending primary key order and the mapping is read from
    /// `store`; a row count different from the catalog size is rejected.
    pub async fn load(
        vectorizer_path: &Path,
        matrix_path: &Path,
        store: &dyn MovieStore,
    ) -> Result<Self, ModelError> {
        let vectorizer: TfidfVectorizer = read_artifact(vectorizer_path).await?;
        let matrix: TermMatrix = read_artifact(matrix_path).await?;

        let row_ids = match matrix.row_ids.clone() {
            Some(ids) => ids,
            None => {
                tracing::warn!(
                    path = %matrix_path.display(),
                    "Matrix has no row ids, mapping rows to catalog ids in ascending order"
                );
                let ids = store.catalog_ids().await.map_err(ModelError::Catalog)?;
                if ids.len() != matrix.rows.len() {
                    return Err(ModelError::CatalogDrift {
                        rows: matrix.rows.len(),
                        catalog: ids.len(),
                    });
                }
                ids
            }
        };

        let index = Self::with_row_ids(vectorizer, matrix, row_ids)?;

        tracing::info!(
            rows = index.len(),
            features = index.vectorizer.dimension(),
            "Loaded similarity index"
        );

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cosine similarity of `query` against every row, in row order
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let vector = self.vectorizer.transform(query);
        let norm = l2_norm(&vector);
        self.rows.iter().map(|row| row.cosine(&vector, norm)).collect()
    }

    /// The `limit` rows most similar to `query`, best first
    pub fn most_similar(&self, query: &str, limit: usize) -> Vec<ScoredMovie> {
        let scores = self.scores(query);
        rank_top_n(&scores, limit)
            .into_iter()
            .map(|position| ScoredMovie {
                position,
                movie_id: self.row_ids[position],
                score: scores[position],
            })
            .collect()
    }
}

/// Positions of the `n` highest scores in descending order
///
/// Equal scores keep ascending position order.
pub fn rank_top_n(scores: &[f64], n: usize) -> Vec<usize> {
    let by_rank = |a: &usize, b: &usize| -> Ordering {
        scores[*b].total_cmp(&scores[*a]).then_with(|| a.cmp(b))
    };

    let mut positions: Vec<usize> = (0..scores.len()).collect();
    if n < positions.len() {
        positions.select_nth_unstable_by(n, by_rank);
        positions.truncate(n);
    }
    positions.sort_unstable_by(by_rank);
    positions
}

async fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ModelError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
