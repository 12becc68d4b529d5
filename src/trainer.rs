use std::io;
use std::path::Path;

use log::info;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::artifacts::{ArtifactError, ArtifactStore};
use crate::classifier::{Classifier, ClassifierError, CountVectorizer, MultinomialNb};

/// Default Laplace smoothing applied to token counts.
const DEFAULT_SMOOTHING: f64 = 1.0;

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("Dataset format error: {0}")]
    DataFormat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// A single labeled dataset row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The free-text expense description
    pub message: String,
    /// The category label
    pub category: String,
}

impl Record {
    pub fn new(message: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: category.into(),
        }
    }
}

/// Fits the vectorizer and model from a labeled CSV dataset and persists
/// them through an [`ArtifactStore`].
///
/// Any dataset problem is fatal: the operator fixes the CSV and reruns.
#[derive(Debug, Clone)]
pub struct Trainer {
    smoothing: f64,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Trainer {
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// Overrides the Laplace smoothing used when fitting the model.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Loads the labeled dataset from a CSV file with a
    /// `message,category` header row.
    ///
    /// # Errors
    /// - `DataFormat` if a required column is missing, a row has an empty
    ///   field, or the dataset has no rows
    /// - `Csv` / `Io` if the file is unreadable or not valid CSV
    pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, TrainError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let headers = reader.headers()?.clone();
        for column in ["message", "category"] {
            if !headers.iter().any(|h| h == column) {
                return Err(TrainError::DataFormat(format!(
                    "Dataset is missing the '{}' column",
                    column
                )));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row?;
            if record.message.trim().is_empty() || record.category.trim().is_empty() {
                return Err(TrainError::DataFormat(format!(
                    "Row {} has an empty message or category",
                    records.len() + 2 // header is line 1
                )));
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(TrainError::DataFormat("Dataset contains no rows".into()));
        }

        Ok(records)
    }

    /// Fits a classifier on in-memory records.
    pub fn fit(&self, records: &[Record]) -> Result<Classifier, TrainError> {
        if records.is_empty() {
            return Err(TrainError::DataFormat("Dataset contains no rows".into()));
        }

        let documents: Vec<String> = records.iter().map(|r| r.message.clone()).collect();
        let labels: Vec<String> = records.iter().map(|r| r.category.clone()).collect();

        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&documents);
        info!(
            "Fitted vocabulary of {} tokens from {} documents",
            vectorizer.vocabulary_size(),
            documents.len()
        );

        let mut counts = Array2::zeros((documents.len(), vectorizer.vocabulary_size()));
        for (row, document) in documents.iter().enumerate() {
            counts.row_mut(row).assign(&vectorizer.transform(document));
        }

        let model = MultinomialNb::fit(&counts, &labels, self.smoothing)?;
        info!("Fitted model over {} categories", model.n_classes());

        Ok(Classifier::from_parts(vectorizer, model)?)
    }

    /// Loads the dataset, fits a classifier, and writes both artifacts,
    /// overwriting unconditionally if they exist.
    pub fn train_and_save<P: AsRef<Path>>(
        &self,
        dataset: P,
        store: &ArtifactStore,
    ) -> Result<Classifier, TrainError> {
        let records = Self::load_dataset(dataset.as_ref())?;
        info!(
            "Loaded {} rows from {}",
            records.len(),
            dataset.as_ref().display()
        );

        let classifier = self.fit(&records)?;
        store.save(&classifier)?;
        info!(
            "Wrote artifacts to {} and {}",
            store.model_path().display(),
            store.vectorizer_path().display()
        );

        Ok(classifier)
    }
}
