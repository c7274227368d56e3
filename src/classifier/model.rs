//! Fitted binary classifiers, read from a JSON export of the training-time
//! estimator.

use crate::classifier::vectorizer::SparseVector;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// On-disk shape of `model.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression {
        classes: Vec<i64>,
        coef: Vec<f64>,
        intercept: f64,
    },
    MultinomialNb {
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
}

#[derive(Debug, Clone)]
pub struct Model {
    artifact: ModelArtifact,
}

impl Model {
    /// Check the artifact against the number of feature columns produced
    /// by the vectorizer.
    pub fn from_artifact(artifact: ModelArtifact, n_features: usize) -> AppResult<Self> {
        match &artifact {
            ModelArtifact::LogisticRegression { classes, coef, .. } => {
                check_classes(classes)?;
                if coef.len() != n_features {
                    return Err(AppError::ModelLoad(format!(
                        "model has {} coefficients but the vectorizer produces {} features",
                        coef.len(),
                        n_features
                    )));
                }
            }
            ModelArtifact::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => {
                check_classes(classes)?;
                if class_log_prior.len() != 2 || feature_log_prob.len() != 2 {
                    return Err(AppError::ModelLoad(
                        "naive Bayes model must carry exactly two class rows".into(),
                    ));
                }
                if let Some(row) = feature_log_prob.iter().find(|r| r.len() != n_features) {
                    return Err(AppError::ModelLoad(format!(
                        "feature_log_prob row has {} columns but the vectorizer produces {} features",
                        row.len(),
                        n_features
                    )));
                }
            }
        }
        Ok(Self { artifact })
    }

    pub fn kind(&self) -> &'static str {
        match self.artifact {
            ModelArtifact::LogisticRegression { .. } => "logistic_regression",
            ModelArtifact::MultinomialNb { .. } => "multinomial_nb",
        }
    }

    pub fn classes(&self) -> &[i64] {
        match &self.artifact {
            ModelArtifact::LogisticRegression { classes, .. } => classes,
            ModelArtifact::MultinomialNb { classes, .. } => classes,
        }
    }

    /// Probability of the second class and the predicted class code.
    pub fn predict(&self, x: &SparseVector) -> (f64, i64) {
        match &self.artifact {
            ModelArtifact::LogisticRegression {
                classes,
                coef,
                intercept,
            } => {
                let decision = dot(coef, x) + intercept;
                let p = sigmoid(decision);
                let class = if decision > 0.0 { classes[1] } else { classes[0] };
                (p, class)
            }
            ModelArtifact::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => {
                let jll0 = class_log_prior[0] + dot(&feature_log_prob[0], x);
                let jll1 = class_log_prior[1] + dot(&feature_log_prob[1], x);
                let max = jll0.max(jll1);
                let lse = max + ((jll0 - max).exp() + (jll1 - max).exp()).ln();
                let p = (jll1 - lse).exp();
                let class = if jll1 > jll0 { classes[1] } else { classes[0] };
                (p, class)
            }
        }
    }
}

fn check_classes(classes: &[i64]) -> AppResult<()> {
    if classes.len() != 2 {
        return Err(AppError::ModelLoad(format!(
            "expected a binary classifier, got {} classes",
            classes.len()
        )));
    }
    Ok(())
}

fn dot(weights: &[f64], x: &SparseVector) -> f64 {
    x.iter().map(|(idx, v)| weights[*idx] * v).sum()
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
