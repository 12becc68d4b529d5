use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;

/// Multinomial Naive Bayes over bag-of-words count vectors.
///
/// For each category the model stores a log prior estimated from the class
/// frequencies and Laplace-smoothed log likelihoods for every vocabulary
/// token. Labels are kept sorted so prediction and serialization are
/// order-stable across retraining runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    labels: Vec<String>,
    class_log_prior: Array1<f64>,
    feature_log_prob: Array2<f64>,
    smoothing: f64,
}

impl MultinomialNb {
    /// Fits the model on a count matrix (one row per document) and the
    /// matching category labels.
    ///
    /// # Errors
    /// - `ValidationError` if `x` and `y` disagree in length, `y` is empty,
    ///   or `smoothing` is not strictly positive
    pub fn fit(x: &Array2<f64>, y: &[String], smoothing: f64) -> Result<Self, ClassifierError> {
        if y.is_empty() {
            return Err(ClassifierError::ValidationError(
                "Training labels cannot be empty".into(),
            ));
        }
        if x.nrows() != y.len() {
            return Err(ClassifierError::ValidationError(format!(
                "Count matrix has {} rows but {} labels were given",
                x.nrows(),
                y.len()
            )));
        }
        if smoothing <= 0.0 {
            return Err(ClassifierError::ValidationError(format!(
                "Smoothing must be positive, got {}",
                smoothing
            )));
        }

        let mut labels: Vec<String> = y.to_vec();
        labels.sort();
        labels.dedup();

        let n_classes = labels.len();
        let n_features = x.ncols();

        let mut class_counts = vec![0usize; n_classes];
        let mut token_counts = Array2::<f64>::zeros((n_classes, n_features));
        for (row, label) in x.rows().into_iter().zip(y) {
            let class = labels
                .binary_search(label)
                .map_err(|_| ClassifierError::ModelError(format!("Unknown label '{}'", label)))?;
            class_counts[class] += 1;
            let mut class_row = token_counts.row_mut(class);
            class_row += &row;
        }

        let n_docs = y.len() as f64;
        let class_log_prior =
            Array1::from_iter(class_counts.iter().map(|&c| (c as f64 / n_docs).ln()));

        let mut feature_log_prob = Array2::<f64>::zeros((n_classes, n_features));
        for class in 0..n_classes {
            let total: f64 = token_counts.row(class).sum();
            let denominator = total + smoothing * n_features as f64;
            for token in 0..n_features {
                feature_log_prob[[class, token]] =
                    ((token_counts[[class, token]] + smoothing) / denominator).ln();
            }
        }

        Ok(Self {
            labels,
            class_log_prior,
            feature_log_prob,
            smoothing,
        })
    }

    /// Predicts the index of the highest-likelihood category for a count
    /// vector. Ties break toward the lower (sorted) label index, so an
    /// all-zero vector yields a deterministic, prior-driven prediction.
    ///
    /// # Errors
    /// - `ModelError` if the model has no classes
    /// - `PredictionError` if the vector length does not match the
    ///   feature space the model was fitted on
    pub fn predict(&self, counts: &Array1<f64>) -> Result<usize, ClassifierError> {
        if self.labels.is_empty() {
            return Err(ClassifierError::ModelError("Model has no classes".into()));
        }
        if counts.len() != self.n_features() {
            return Err(ClassifierError::PredictionError(format!(
                "Expected a count vector of length {}, got {}",
                self.n_features(),
                counts.len()
            )));
        }

        let scores = self.feature_log_prob.dot(counts) + &self.class_log_prior;
        let mut best = 0;
        for (class, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = class;
            }
        }
        Ok(best)
    }

    /// Returns the sorted category labels the model was fitted on.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.ncols()
    }

    /// Checks the internal dimensions of a deserialized model.
    pub(crate) fn is_consistent(&self) -> bool {
        !self.labels.is_empty()
            && self.class_log_prior.len() == self.labels.len()
            && self.feature_log_prob.nrows() == self.labels.len()
            && self.smoothing > 0.0
    }
}
