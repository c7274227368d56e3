//! Pre-trained text classifier: a fitted vectorizer plus a binary
//! probabilistic model, both loaded once and read-only afterwards.

pub mod model;
pub mod vectorizer;

use crate::errors::{AppError, AppResult};
use crate::models::Label;
use model::{Model, ModelArtifact};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use vectorizer::{Vectorizer, VectorizerArtifact};

/// Outcome for a single entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    /// Probability of the schizophrenia-like class, in `[0, 1]`.
    pub probability: f64,
    pub label: Label,
}

/// Summary of the loaded artifacts, shown by `scope model --info`.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub kind: &'static str,
    pub classes: Vec<i64>,
    pub n_features: usize,
    pub tfidf: bool,
    pub ngram_range: (usize, usize),
}

#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: Vectorizer,
    model: Model,
}

impl Classifier {
    pub fn load(model_path: &Path, vectorizer_path: &Path) -> AppResult<Self> {
        let vectorizer_artifact: VectorizerArtifact = read_artifact(vectorizer_path)?;
        let model_artifact: ModelArtifact = read_artifact(model_path)?;
        Self::from_artifacts(model_artifact, vectorizer_artifact)
    }

    pub fn from_artifacts(
        model: ModelArtifact,
        vectorizer: VectorizerArtifact,
    ) -> AppResult<Self> {
        let vectorizer = Vectorizer::from_artifact(vectorizer)?;
        let model = Model::from_artifact(model, vectorizer.n_features())?;
        Ok(Self { vectorizer, model })
    }

    /// Vectorize the whole batch, then predict every item.
    pub fn classify_batch(&self, normalized: &[String]) -> AppResult<Vec<ClassificationResult>> {
        if normalized.is_empty() {
            return Err(AppError::EmptyBatch);
        }

        let vectors = self.vectorizer.transform(normalized);

        Ok(vectors
            .iter()
            .map(|x| {
                let (probability, code) = self.model.predict(x);
                ClassificationResult {
                    probability,
                    label: Label::from_code(code),
                }
            })
            .collect())
    }

    pub fn describe(&self) -> ModelInfo {
        ModelInfo {
            kind: self.model.kind(),
            classes: self.model.classes().to_vec(),
            n_features: self.vectorizer.n_features(),
            tfidf: self.vectorizer.is_tfidf(),
            ngram_range: self.vectorizer.ngram_range(),
        }
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path)
        .map_err(|e| AppError::ModelLoad(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::ModelLoad(format!("{}: {e}", path.display())))
}
