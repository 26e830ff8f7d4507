//! Prediction request/response types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::Verdict;

#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    /// Raw news text, capped at 100000 characters
    #[validate(length(max = 100000, message = "Text exceeds the 100000 character limit"))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub label: String,
    /// Percentage in [0, 100], two decimal places
    pub confidence: f64,
    pub prob_fake: f64,
    pub prob_real: f64,
    pub decision_score: f64,
    pub inference_time_us: u64,
}

impl From<Verdict> for PredictResponse {
    fn from(v: Verdict) -> Self {
        Self {
            label: v.label,
            confidence: v.confidence,
            prob_fake: v.prob_fake,
            prob_real: v.prob_real,
            decision_score: v.decision_score,
            inference_time_us: v.inference_time_us,
        }
    }
}
