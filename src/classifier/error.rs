use std::fmt;

/// Represents the different types of errors that can occur in the expense classifier.
#[derive(Debug)]
pub enum ClassifierError {
    /// Error occurred while fitting or applying the count vectorizer
    VectorizerError(String),
    /// Error occurred while fitting or evaluating the Naive Bayes model
    ModelError(String),
    /// Error occurred while making predictions
    PredictionError(String),
    /// Error occurred due to invalid input parameters
    ValidationError(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VectorizerError(msg) => write!(f, "Vectorizer error: {}", msg),
            Self::ModelError(msg) => write!(f, "Model error: {}", msg),
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}
