//! Linear decision function
//!
//! The trained model is a linear separator over TF-IDF features. A positive
//! decision score argues for class index 1, a negative score for class 0.
//! The sigmoid maps the raw margin onto a pseudo-probability; it is not a
//! calibrated probability, only a monotone squashing of the margin.

use super::artifact::{ArtifactError, ClassifierParams};
use super::vectorizer::SparseVector;

/// Binary linear classifier restored from a model artifact.
#[derive(Debug)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    pub fn from_params(params: ClassifierParams) -> Result<Self, ArtifactError> {
        Ok(Self {
            weights: params.weights,
            intercept: params.intercept,
        })
    }

    /// Signed distance from the separating hyperplane.
    pub fn decision_function(&self, features: &SparseVector) -> f64 {
        let dot: f64 = features
            .iter()
            .filter_map(|&(idx, value)| self.weights.get(idx).map(|w| w * value))
            .sum();
        dot + self.intercept
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }
}

/// Logistic squashing of a decision score onto (0, 1).
pub fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}
