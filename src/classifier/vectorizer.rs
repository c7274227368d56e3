//! Fitted bag-of-words / TF-IDF vectorizer, read from a JSON export of the
//! training-time object.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Sparse feature vector: `(column, value)` pairs sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// On-disk shape of `vectorizer.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequencies; absent for a plain count vectorizer.
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Absent: `l2` for tf-idf, none for plain counts. `null`: no norm.
    #[serde(
        default,
        deserialize_with = "explicit_norm",
        skip_serializing_if = "Option::is_none"
    )]
    pub norm: Option<Option<Norm>>,
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}
fn default_lowercase() -> bool {
    true
}
fn explicit_norm<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<Norm>>, D::Error> {
    Option::<Norm>::deserialize(d).map(Some)
}
fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

#[derive(Debug, Clone)]
pub struct Vectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    ngram_range: (usize, usize),
    lowercase: bool,
    binary: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
    stop_words: HashSet<String>,
    token_re: Regex,
    n_features: usize,
}

impl Vectorizer {
    /// Validate an artifact and compile its token pattern.
    pub fn from_artifact(artifact: VectorizerArtifact) -> AppResult<Self> {
        let n_features = artifact.vocabulary.len();
        if n_features == 0 {
            return Err(AppError::ModelLoad("vectorizer vocabulary is empty".into()));
        }

        let mut seen = vec![false; n_features];
        for (term, &idx) in &artifact.vocabulary {
            if idx >= n_features || seen[idx] {
                return Err(AppError::ModelLoad(format!(
                    "vocabulary column {idx} for term '{term}' is out of range or duplicated"
                )));
            }
            seen[idx] = true;
        }

        if let Some(idf) = &artifact.idf
            && idf.len() != n_features
        {
            return Err(AppError::ModelLoad(format!(
                "idf has {} values but the vocabulary has {} terms",
                idf.len(),
                n_features
            )));
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(AppError::ModelLoad(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        let token_re = Regex::new(&artifact.token_pattern).map_err(|e| {
            AppError::ModelLoad(format!(
                "invalid token_pattern '{}': {e}",
                artifact.token_pattern
            ))
        })?;

        let norm = match artifact.norm {
            Some(explicit) => explicit,
            None if artifact.idf.is_some() => Some(Norm::L2),
            None => None,
        };

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            binary: artifact.binary,
            sublinear_tf: artifact.sublinear_tf,
            norm,
            stop_words: artifact.stop_words.unwrap_or_default().into_iter().collect(),
            token_re,
            n_features,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    pub fn is_tfidf(&self) -> bool {
        self.idf.is_some()
    }

    /// Vectorize a whole batch against the same fitted vocabulary.
    pub fn transform(&self, documents: &[String]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform_one(d)).collect()
    }

    fn transform_one(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.binary {
                    1.0
                } else if self.sublinear_tf {
                    1.0 + tf.ln()
                } else {
                    tf
                };
                let weight = match &self.idf {
                    Some(idf) => tf * idf[idx],
                    None => tf,
                };
                (idx, weight)
            })
            .collect();

        let norm = match self.norm {
            Some(Norm::L2) => vector.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => vector.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            None => 0.0,
        };
        if norm > 0.0 {
            for (_, v) in vector.iter_mut() {
                *v /= norm;
            }
        }

        vector
    }

    /// Tokens and n-grams of one document, in emission order.
    fn analyze(&self, document: &str) -> Vec<String> {
        let text = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };

        let tokens: Vec<&str> = self
            .token_re
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}
