use std::sync::Arc;

use log::debug;

use super::error::ClassifierError;
use super::model::MultinomialNb;
use super::vectorizer::CountVectorizer;
use super::ClassifierInfo;

/// A thread-safe expense category classifier combining a fitted count
/// vectorizer and a multinomial Naive Bayes model.
///
/// Both parts are immutable after construction and shared behind `Arc`, so
/// a single instance can serve concurrent predictions without locking.
#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: Arc<CountVectorizer>,
    model: Arc<MultinomialNb>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Assembles a classifier from a fitted vectorizer and model.
    ///
    /// # Errors
    /// - `ValidationError` if the model's feature space does not match the
    ///   vectorizer's vocabulary
    pub fn from_parts(
        vectorizer: CountVectorizer,
        model: MultinomialNb,
    ) -> Result<Self, ClassifierError> {
        if model.n_features() != vectorizer.vocabulary_size() {
            return Err(ClassifierError::ValidationError(format!(
                "Model was fitted on {} features but the vocabulary has {} tokens",
                model.n_features(),
                vectorizer.vocabulary_size()
            )));
        }
        Ok(Self {
            vectorizer: Arc::new(vectorizer),
            model: Arc::new(model),
        })
    }

    /// Predicts the single best category for the input text.
    ///
    /// Out-of-vocabulary tokens contribute no signal; an empty message (or
    /// one with no known tokens) still yields a category, decided by the
    /// class priors.
    pub fn predict(&self, text: &str) -> Result<String, ClassifierError> {
        let counts = self.vectorizer.transform(text);
        let class = self.model.predict(&counts)?;
        let label = &self.model.labels()[class];
        debug!("Predicted '{}' for message of {} bytes", label, text.len());
        Ok(label.clone())
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            num_classes: self.model.n_classes(),
            class_labels: self.model.labels().to_vec(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
        }
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &MultinomialNb {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::{Record, Trainer};

    fn setup_test_classifier() -> Classifier {
        let records = vec![
            Record::new("coffee at starbucks", "Food"),
            Record::new("grocery store run", "Food"),
            Record::new("uber to airport", "Transport"),
            Record::new("monthly train pass", "Transport"),
        ];
        Trainer::new()
            .fit(&records)
            .expect("Failed to create classifier")
    }

    #[test]
    fn test_class_info() {
        let classifier = setup_test_classifier();
        let info = classifier.info();
        assert_eq!(info.num_classes, 2);
        assert_eq!(
            info.class_labels,
            vec!["Food".to_string(), "Transport".to_string()]
        );
        assert!(info.vocabulary_size > 0);
    }

    #[test]
    fn test_predict_known_vocabulary() {
        let classifier = setup_test_classifier();
        assert_eq!(classifier.predict("starbucks coffee").unwrap(), "Food");
        assert_eq!(classifier.predict("uber ride").unwrap(), "Transport");
    }

    #[test]
    fn test_predict_empty_message_returns_some_label() {
        let classifier = setup_test_classifier();
        let label = classifier.predict("").unwrap();
        assert!(classifier.info().class_labels.contains(&label));
    }

    #[test]
    fn test_mismatched_parts_are_rejected() {
        let classifier = setup_test_classifier();
        let result = Classifier::from_parts(CountVectorizer::new(), classifier.model().clone());
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }
}
