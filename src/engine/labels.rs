//! Label encoder - class index to label mapping

use super::artifact::{ArtifactError, LabelArtifact};

/// Immutable mapping between class indices and label strings.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn from_artifact(artifact: LabelArtifact) -> Result<Self, ArtifactError> {
        Ok(Self {
            classes: artifact.classes,
        })
    }

    /// Label for a class index, if one exists.
    pub fn inverse_transform(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
