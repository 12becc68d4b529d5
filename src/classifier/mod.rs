mod classifier;
mod error;
mod model;
mod vectorizer;

pub use classifier::Classifier;
pub use error::ClassifierError;
pub use model::MultinomialNb;
pub use vectorizer::CountVectorizer;

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Number of categories the classifier is trained on
    pub num_classes: usize,
    /// Labels of the categories, sorted
    pub class_labels: Vec<String>,
    /// Number of tokens in the fitted vocabulary
    pub vocabulary_size: usize,
}
