//! Artifact loading - versioned model and label encoder files
//!
//! Replaces the training pipeline's original opaque object dumps with an
//! explicit JSON contract. Every artifact carries a schema version and ships
//! with a `<file>.sha256` sidecar holding the hex digest of the file bytes.
//! Any mismatch is a load failure; the service refuses to start on one.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Current artifact schema version
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing checksum sidecar {path}")]
    MissingChecksum { path: String },

    #[error("checksum mismatch for {path}: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("malformed artifact {path}: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported artifact schema version {found} (expected {SCHEMA_VERSION})")]
    SchemaVersion { found: u32 },

    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// Serialized classifier artifact: TF-IDF parameters plus the linear model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    pub model_type: String,
    pub trained_at: DateTime<Utc>,
    pub vectorizer: VectorizerParams,
    pub classifier: ClassifierParams,
}

/// Inference-time vectorizer parameters exported by the trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerParams {
    pub lowercase: bool,
    /// Term -> column index
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    pub idf: Vec<f64>,
}

/// Linear decision function parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// One weight per vocabulary column
    pub weights: Vec<f64>,
    pub intercept: f64,
}

/// Serialized label encoder: class index -> label string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelArtifact {
    pub schema_version: u32,
    pub classes: Vec<String>,
}

/// Load and validate the classifier artifact.
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelArtifact, ArtifactError> {
    let path = path.as_ref();
    let bytes = read_verified(path)?;

    let artifact: ModelArtifact =
        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Format {
            path: path.display().to_string(),
            source: e,
        })?;

    artifact.validate()?;
    tracing::info!(
        "Model artifact loaded from {} ({} terms, trained {})",
        path.display(),
        artifact.vectorizer.vocabulary.len(),
        artifact.trained_at
    );

    Ok(artifact)
}

/// Load and validate the label encoder artifact.
pub fn load_labels(path: impl AsRef<Path>) -> Result<LabelArtifact, ArtifactError> {
    let path = path.as_ref();
    let bytes = read_verified(path)?;

    let artifact: LabelArtifact =
        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Format {
            path: path.display().to_string(),
            source: e,
        })?;

    artifact.validate()?;
    tracing::info!(
        "Label encoder loaded from {} (classes: {:?})",
        path.display(),
        artifact.classes
    );

    Ok(artifact)
}

impl ModelArtifact {
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: self.schema_version,
            });
        }

        let n_terms = self.vectorizer.vocabulary.len();

        if self.vectorizer.idf.len() != n_terms {
            return Err(ArtifactError::Invalid(format!(
                "idf length {} does not match vocabulary size {}",
                self.vectorizer.idf.len(),
                n_terms
            )));
        }
        if self.classifier.weights.len() != n_terms {
            return Err(ArtifactError::Invalid(format!(
                "weight length {} does not match vocabulary size {}",
                self.classifier.weights.len(),
                n_terms
            )));
        }

        // Vocabulary indices must cover 0..n_terms exactly once
        let mut seen = vec![false; n_terms];
        for (term, &idx) in &self.vectorizer.vocabulary {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(ArtifactError::Invalid(format!(
                        "duplicate vocabulary index {} (term {:?})",
                        idx, term
                    )))
                }
                None => {
                    return Err(ArtifactError::Invalid(format!(
                        "vocabulary index {} out of range for {} terms",
                        idx, n_terms
                    )))
                }
            }
        }

        let finite = self.vectorizer.idf.iter().all(|v| v.is_finite())
            && self.classifier.weights.iter().all(|v| v.is_finite())
            && self.classifier.intercept.is_finite();
        if !finite {
            return Err(ArtifactError::Invalid(
                "non-finite value in idf, weights or intercept".to_string(),
            ));
        }

        Ok(())
    }
}

impl LabelArtifact {
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: self.schema_version,
            });
        }
        // Binary task: the decision function only distinguishes two classes
        if self.classes.len() != 2 {
            return Err(ArtifactError::Invalid(format!(
                "label encoder must hold exactly 2 classes, found {}",
                self.classes.len()
            )));
        }
        if self.classes.iter().any(|c| c.trim().is_empty()) {
            return Err(ArtifactError::Invalid("blank class label".to_string()));
        }
        Ok(())
    }
}

/// Read a file and verify it against its `.sha256` sidecar.
fn read_verified(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| ArtifactError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let sidecar = sidecar_path(path);
    let expected_raw =
        fs::read_to_string(&sidecar).map_err(|_| ArtifactError::MissingChecksum {
            path: sidecar.display().to_string(),
        })?;

    // Accept `sha256sum` output verbatim: digest is the first token
    let expected = expected_raw
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    let actual = hex::encode(Sha256::digest(&bytes));
    if expected != actual {
        return Err(ArtifactError::ChecksumMismatch {
            path: path.display().to_string(),
            expected,
            actual,
        });
    }

    Ok(bytes)
}

fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}
