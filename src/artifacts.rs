use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::classifier::{Classifier, CountVectorizer, MultinomialNb};

const MODEL_FILE: &str = "model.json";
const VECTORIZER_FILE: &str = "vectorizer.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Corrupt artifact: {0}")]
    Corrupt(String),
}

/// Reads and writes the two fitted artifacts at fixed file names under a
/// directory: `model.json` and `vectorizer.json`.
///
/// The trainer overwrites both unconditionally; the inference service loads
/// them once at startup and treats them as immutable afterwards.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.dir.join(VECTORIZER_FILE)
    }

    pub fn exists(&self) -> bool {
        self.model_path().exists() && self.vectorizer_path().exists()
    }

    /// Serializes both fitted parts, overwriting existing artifacts.
    pub fn save(&self, classifier: &Classifier) -> Result<(), ArtifactError> {
        let vectorizer = serde_json::to_vec(classifier.vectorizer())?;
        fs::write(self.vectorizer_path(), vectorizer)?;

        let model = serde_json::to_vec(classifier.model())?;
        fs::write(self.model_path(), model)?;

        Ok(())
    }

    /// Loads and validates both artifacts, reassembling the classifier.
    ///
    /// # Errors
    /// - `NotFound` if either file is missing
    /// - `Io` / `Parse` if a file is unreadable or not a valid artifact
    /// - `Corrupt` if the artifacts are structurally inconsistent (empty
    ///   label set, sparse vocabulary indices, mismatched dimensions)
    pub fn load(&self) -> Result<Classifier, ArtifactError> {
        for path in [self.model_path(), self.vectorizer_path()] {
            if !path.exists() {
                return Err(ArtifactError::NotFound(path));
            }
        }

        let vectorizer: CountVectorizer =
            serde_json::from_slice(&fs::read(self.vectorizer_path())?)?;
        let model: MultinomialNb = serde_json::from_slice(&fs::read(self.model_path())?)?;

        Self::validate(&model, &vectorizer)?;

        let classifier = Classifier::from_parts(vectorizer, model)
            .map_err(|e| ArtifactError::Corrupt(e.to_string()))?;

        let info = classifier.info();
        info!(
            "Loaded artifacts from {}: {} categories, vocabulary of {} tokens",
            self.dir.display(),
            info.num_classes,
            info.vocabulary_size
        );

        Ok(classifier)
    }

    /// Removes both artifacts if present.
    pub fn remove(&self) -> Result<(), ArtifactError> {
        for path in [self.model_path(), self.vectorizer_path()] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    fn validate(model: &MultinomialNb, vectorizer: &CountVectorizer) -> Result<(), ArtifactError> {
        if !model.is_consistent() {
            return Err(ArtifactError::Corrupt(
                "Model parameters have inconsistent dimensions".into(),
            ));
        }
        if !vectorizer.is_consistent() {
            return Err(ArtifactError::Corrupt(
                "Vocabulary column indices are not dense".into(),
            ));
        }
        if model.n_features() != vectorizer.vocabulary_size() {
            return Err(ArtifactError::Corrupt(format!(
                "Model expects {} features but the vocabulary has {} tokens",
                model.n_features(),
                vectorizer.vocabulary_size()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_artifact_paths() {
        let store = ArtifactStore::new("/tmp/pennywise-test-paths").unwrap();
        assert!(store
            .model_path()
            .to_str()
            .unwrap()
            .ends_with("model.json"));
        assert!(store
            .vectorizer_path()
            .to_str()
            .unwrap()
            .ends_with("vectorizer.json"));
    }

    #[test]
    fn test_exists_requires_both_files() {
        let store = ArtifactStore::new("/tmp/pennywise-test-exists").unwrap();
        store.remove().unwrap();
        assert!(!store.exists());

        fs::write(store.model_path(), b"{}").unwrap();
        assert!(!store.exists());

        fs::write(store.vectorizer_path(), b"{}").unwrap();
        assert!(store.exists());

        store.remove().unwrap();
        assert!(!store.exists());
    }
}
