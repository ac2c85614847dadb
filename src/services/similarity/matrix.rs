use serde::{Deserialize, Serialize};

use super::vectorizer::{SparseVector, TfidfVectorizer};
use crate::error::ModelError;

/// Precomputed document-term matrix, one row per catalog movie
///
/// `row_ids[i]` is the movie id of row `i`. Older artifacts may omit it, in
/// which case the mapping is rebuilt from the catalog when the index loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermMatrix {
    pub n_features: usize,
    #[serde(default)]
    pub row_ids: Option<Vec<i64>>,
    pub rows: Vec<SparseVector>,
}

impl TermMatrix {
    /// Projects each document with an already fitted vectorizer
    pub fn from_documents<'a, I>(vectorizer: &TfidfVectorizer, documents: I) -> Self
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let (row_ids, rows): (Vec<i64>, Vec<SparseVector>) = documents
            .into_iter()
            .map(|(id, text)| (id, vectorizer.transform(text)))
            .unzip();

        Self {
            n_features: vectorizer.dimension(),
            row_ids: Some(row_ids),
            rows,
        }
    }

    /// Sorts each row by column and checks every column fits `n_features`
    pub(crate) fn normalize_rows(&mut self) -> Result<(), ModelError> {
        for (row_idx, row) in self.rows.iter_mut().enumerate() {
            row.sort_unstable_by_key(|(column, _)| *column);
            if let Some(&(column, _)) = row.iter().find(|(column, _)| *column >= self.n_features) {
                return Err(ModelError::ColumnOutOfRange {
                    row: row_idx,
                    column,
                    dim: self.n_features,
                });
            }
        }
        Ok(())
    }
}

/// A matrix row with its precomputed Euclidean norm
#[derive(Debug, Clone)]
pub(crate) struct IndexedRow {
    pub entries: SparseVector,
    pub norm: f64,
}

impl IndexedRow {
    pub fn new(entries: SparseVector) -> Self {
        let norm = l2_norm(&entries);
        Self { entries, norm }
    }

    /// Cosine similarity against a query vector sorted by column
    pub fn cosine(&self, query: &[(usize, f64)], query_norm: f64) -> f64 {
        if self.norm == 0.0 || query_norm == 0.0 {
            return 0.0;
        }
        dot(&self.entries, query) / (self.norm * query_norm)
    }
}

pub(crate) fn l2_norm(vector: &[(usize, f64)]) -> f64 {
    vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Dot product of two column-sorted sparse vectors
fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
