//! A thread-safe expense category classifier: bag-of-words counts feeding a
//! multinomial Naive Bayes model, trained offline from a labeled CSV and
//! served over a single HTTP endpoint.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pennywise::{Record, Trainer};
//!
//! let records = vec![
//!     Record::new("coffee at starbucks", "Food"),
//!     Record::new("uber to airport", "Transport"),
//! ];
//!
//! let classifier = Trainer::new().fit(&records)?;
//!
//! let category = classifier.predict("starbucks coffee")?;
//! assert_eq!(category, "Food");
//! # Ok(())
//! # }
//! ```
//!
//! # Persistence
//!
//! The trainer writes the fitted vectorizer and model as two artifacts on
//! disk; the inference service loads them back at startup and never mutates
//! them afterwards:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pennywise::{ArtifactStore, Record, Trainer};
//!
//! let records = vec![
//!     Record::new("coffee at starbucks", "Food"),
//!     Record::new("uber to airport", "Transport"),
//! ];
//! let classifier = Trainer::new().fit(&records)?;
//!
//! let store = ArtifactStore::new("/tmp/pennywise-doc/artifacts")?;
//! store.save(&classifier)?;
//!
//! let loaded = store.load()?;
//! assert_eq!(loaded.predict("starbucks coffee")?, "Food");
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is read-only after construction and can be shared across
//! threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pennywise::{Record, Trainer};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let records = vec![
//!     Record::new("coffee at starbucks", "Food"),
//!     Record::new("uber to airport", "Transport"),
//! ];
//! let classifier = Arc::new(Trainer::new().fit(&records)?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.predict("grocery run").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod classifier;
pub mod server;
pub mod trainer;

pub use artifacts::{ArtifactError, ArtifactStore};
pub use classifier::{Classifier, ClassifierError, ClassifierInfo, CountVectorizer, MultinomialNb};
pub use server::{PredictRequest, PredictResponse};
pub use trainer::{Record, TrainError, Trainer};

pub fn init_logger() {
    env_logger::init();
}
