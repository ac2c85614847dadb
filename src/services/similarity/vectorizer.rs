use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::ModelError;

/// Sparse vector as `(column, weight)` pairs sorted by column
pub type SparseVector = Vec<(usize, f64)>;

/// Output normalization applied after IDF weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

/// A fitted TF-IDF text vectorizer
///
/// The vocabulary and IDF weights are frozen at fit time. Terms not in the
/// vocabulary are dropped during [`transform`](Self::transform).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> column index
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    idf: Vec<f64>,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default)]
    stop_words: HashSet<String>,
    #[serde(default)]
    norm: Norm,
    /// Use `1 + ln(tf)` instead of raw counts
    #[serde(default)]
    sublinear_tf: bool,
}

fn default_lowercase() -> bool {
    true
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self, ModelError> {
        let vectorizer = Self {
            vocabulary,
            idf,
            lowercase: true,
            stop_words: HashSet::new(),
            norm: Norm::L2,
            sublinear_tf: false,
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// Checks that every vocabulary column has an IDF weight
    pub fn validate(&self) -> Result<(), ModelError> {
        let dim = self.idf.len();
        for (term, &index) in &self.vocabulary {
            if index >= dim {
                return Err(ModelError::VocabularyOutOfRange {
                    term: term.clone(),
                    index,
                    dim,
                });
            }
        }
        Ok(())
    }

    /// Number of columns of the vector space
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Projects `text` into the fitted vector space
    pub fn transform(&self, text: &str) -> SparseVector {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(&text) {
            if self.stop_words.contains(token) {
                continue;
            }
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (column, tf * self.idf[column])
            })
            .collect();

        if self.norm == Norm::L2 {
            let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in vector.iter_mut() {
                    *w /= norm;
                }
            }
        }

        vector
    }
}

/// Splits text into runs of word characters at least two characters long
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
}
