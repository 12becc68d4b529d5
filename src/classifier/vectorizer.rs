use std::collections::HashMap;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Bag-of-words count vectorizer with a fixed tokenization policy.
///
/// Tokenization lowercases the input, splits on runs of non-alphanumeric
/// characters, and keeps tokens of at least two characters. There is no
/// stemming and no stopword removal. Tokens never seen during `fit`
/// contribute nothing at `transform` time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountVectorizer {
    /// Vocabulary: token -> column index mapping.
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Creates a new, unfitted vectorizer with an empty vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
        }
    }

    /// Fits the vocabulary on the training documents.
    ///
    /// Columns are assigned in strict document order (first occurrence
    /// wins), so refitting on an unchanged dataset reproduces the exact
    /// same column layout.
    pub fn fit(&mut self, documents: &[String]) {
        let mut vocabulary = HashMap::new();
        for doc in documents {
            for token in Self::tokenize(doc) {
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token, idx);
                }
            }
        }
        self.vocabulary = vocabulary;
    }

    /// Transforms a document into a count vector over the fitted vocabulary.
    ///
    /// Out-of-vocabulary tokens are silently dropped; an input with no known
    /// tokens (including the empty string) yields an all-zero vector.
    pub fn transform(&self, document: &str) -> Array1<f64> {
        let mut counts = Array1::zeros(self.vocabulary.len());
        for token in Self::tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }
        counts
    }

    /// Returns the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Checks that the vocabulary column indices are dense in `0..len`.
    ///
    /// A deserialized vocabulary that fails this check cannot index count
    /// vectors consistently and must be rejected.
    pub(crate) fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.vocabulary.len()];
        for &idx in self.vocabulary.values() {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= 2)
            .map(str::to_string)
            .collect()
    }
}
