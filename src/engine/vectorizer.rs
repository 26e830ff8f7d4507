//! TF-IDF feature extraction
//!
//! Inference-time transform only; fitting happens in the external training
//! pipeline and arrives here through the model artifact. The transform must
//! match the trainer exactly (token pattern, raw term counts, idf weighting,
//! L2 normalization) or the exported weights are meaningless.

use std::collections::HashMap;

use regex::Regex;

use super::artifact::{ArtifactError, VectorizerParams};

/// Tokens are runs of two or more word characters, as in the trainer
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Sparse feature vector: (column index, value) sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF vectorizer restored from a model artifact.
pub struct TfidfVectorizer {
    lowercase: bool,
    /// Term -> column index
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    idf: Vec<f64>,
    token_pattern: Regex,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("lowercase", &self.lowercase)
            .finish()
    }
}

impl TfidfVectorizer {
    pub fn from_params(params: VectorizerParams) -> Result<Self, ArtifactError> {
        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| ArtifactError::Invalid(format!("token pattern: {}", e)))?;

        Ok(Self {
            lowercase: params.lowercase,
            vocabulary: params.vocabulary,
            idf: params.idf,
            token_pattern,
        })
    }

    /// Transform a document into a sparse TF-IDF vector.
    ///
    /// Out-of-vocabulary tokens are dropped; a document with no known token
    /// yields an empty vector (the decision then rests on the intercept).
    pub fn transform(&self, text: &str) -> SparseVector {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        // Raw term counts for in-vocabulary tokens
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in self.token_pattern.find_iter(text) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .filter_map(|(idx, tf)| self.idf.get(idx).map(|&idf| (idx, tf * idf)))
            .collect();
        features.sort_unstable_by_key(|&(idx, _)| idx);

        // L2 normalization
        let norm = features.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut features {
                *v /= norm;
            }
        }

        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
