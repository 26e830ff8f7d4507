//! Inference Gateway
//!
//! Owns the three loaded artifacts (vectorizer, linear classifier, label
//! encoder) behind one immutable handle. The handle is built once at startup
//! via [`InferenceEngine::from_artifacts`] and shared by reference; there is
//! no lazy loading and no global state. Classification is a pure function of
//! the input text aside from two monotonic metrics counters.

pub mod artifact;
pub mod classifier;
pub mod labels;
pub mod vectorizer;

mod tests;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use artifact::{ArtifactError, LabelArtifact, ModelArtifact};
use classifier::{sigmoid, LinearClassifier};
use labels::LabelEncoder;
use vectorizer::TfidfVectorizer;

/// Classification output for one piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    /// Winning pseudo-probability as a percentage, rounded to 2 decimals
    pub confidence: f64,
    /// Pseudo-probability of class 0 under the deployed encoder (FAKE)
    pub prob_fake: f64,
    /// Pseudo-probability of class 1 under the deployed encoder (REAL)
    pub prob_real: f64,
    pub decision_score: f64,
    pub inference_time_us: u64,
}

/// Model identity, frozen at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub schema_version: u32,
    pub trained_at: DateTime<Utc>,
    pub loaded_at: DateTime<Utc>,
}

/// Engine snapshot for the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model: ModelInfo,
    pub vocabulary_size: usize,
    pub classes: Vec<String>,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

/// The inference gateway: text in, verdict out.
pub struct InferenceEngine {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
    labels: LabelEncoder,
    info: ModelInfo,

    // Latency stats
    inference_count: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl std::fmt::Debug for InferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceEngine")
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("classes", &self.labels.classes())
            .finish()
    }
}

impl InferenceEngine {
    /// Build the engine from loaded artifacts.
    ///
    /// Cross-artifact consistency (dimension match, exactly two classes) is
    /// checked here; a mismatched pair of individually valid files fails at
    /// construction, before the first request.
    pub fn from_artifacts(
        model: ModelArtifact,
        labels: LabelArtifact,
    ) -> Result<Self, ArtifactError> {
        let info = ModelInfo {
            model_type: model.model_type.clone(),
            schema_version: model.schema_version,
            trained_at: model.trained_at,
            loaded_at: Utc::now(),
        };

        let vectorizer = TfidfVectorizer::from_params(model.vectorizer)?;
        let classifier = LinearClassifier::from_params(model.classifier)?;
        let labels = LabelEncoder::from_artifact(labels)?;

        if classifier.dimensions() != vectorizer.vocabulary_size() {
            return Err(ArtifactError::Invalid(format!(
                "classifier expects {} features, vectorizer produces {}",
                classifier.dimensions(),
                vectorizer.vocabulary_size()
            )));
        }
        if labels.len() != 2 {
            return Err(ArtifactError::Invalid(format!(
                "binary classifier needs 2 labels, encoder holds {}",
                labels.len()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
            labels,
            info,
            inference_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        })
    }

    /// Classify one piece of text.
    ///
    /// The caller guarantees the text is non-blank after trimming; the HTTP
    /// layer rejects blank input before it reaches the engine.
    pub fn classify(&self, text: &str) -> Verdict {
        let start = Instant::now();

        let features = self.vectorizer.transform(text);
        let score = self.classifier.decision_function(&features);

        let prob_real = sigmoid(score);
        let prob_fake = 1.0 - prob_real;

        // score > 0 selects class 1, matching the trainer's predict
        let (index, prob) = if score > 0.0 {
            (1, prob_real)
        } else {
            (0, prob_fake)
        };

        let label = self
            .labels
            .inverse_transform(index)
            .unwrap_or("UNKNOWN")
            .to_string();

        let inference_time_us = start.elapsed().as_micros() as u64;
        self.latency_sum_us
            .fetch_add(inference_time_us, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Verdict {
            label,
            confidence: as_percent(prob),
            prob_fake,
            prob_real,
            decision_score: score,
            inference_time_us,
        }
    }

    pub fn status(&self) -> EngineStatus {
        let count = self.inference_count.load(Ordering::Relaxed);
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model: self.info.clone(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            classes: self.labels.classes().to_vec(),
            inference_count: count,
            avg_latency_ms: avg,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn class_labels(&self) -> &[String] {
        self.labels.classes()
    }
}

/// Probability -> percentage with 2 decimal places.
fn as_percent(prob: f64) -> f64 {
    (prob * 100.0 * 100.0).round() / 100.0
}
