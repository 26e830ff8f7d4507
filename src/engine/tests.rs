//! Integration tests for the inference gateway
//!
//! Builds engines from in-memory artifacts and checks the end-to-end
//! contract: labels, confidence bounds, probability complement, idempotence.

#[cfg(test)]
mod integration_tests {
    use std::collections::HashMap;

    use chrono::Utc;

    use crate::engine::artifact::{
        ClassifierParams, LabelArtifact, ModelArtifact, VectorizerParams, SCHEMA_VERSION,
    };
    use crate::engine::InferenceEngine;

    fn labels() -> LabelArtifact {
        LabelArtifact {
            schema_version: SCHEMA_VERSION,
            classes: vec!["FAKE".to_string(), "REAL".to_string()],
        }
    }

    fn model(weights: Vec<f64>, intercept: f64) -> ModelArtifact {
        ModelArtifact {
            schema_version: SCHEMA_VERSION,
            model_type: "tfidf-linear-svc".to_string(),
            trained_at: Utc::now(),
            vectorizer: VectorizerParams {
                lowercase: true,
                vocabulary: HashMap::from([
                    ("scientists".to_string(), 0),
                    ("confirm".to_string(), 1),
                    ("earth".to_string(), 2),
                    ("flat".to_string(), 3),
                ]),
                idf: vec![1.0, 1.0, 1.0, 1.0],
            },
            classifier: ClassifierParams { weights, intercept },
        }
    }

    /// Zero weights pin the decision score to the intercept, so the
    /// sigmoid arithmetic can be checked exactly: score 2.0 means
    /// prob_fake = 1/(1+e^2) and a REAL verdict at 88.08%.
    #[test]
    fn test_positive_score_means_real_at_88_08() {
        let engine =
            InferenceEngine::from_artifacts(model(vec![0.0; 4], 2.0), labels()).unwrap();

        let verdict = engine.classify("Scientists confirm the earth is flat");

        assert_eq!(verdict.label, "REAL");
        assert!((verdict.decision_score - 2.0).abs() < 1e-12);
        assert!((verdict.prob_fake - 1.0 / (1.0 + 2.0f64.exp())).abs() < 1e-12);
        assert!((verdict.prob_real - 0.8808).abs() < 1e-4);
        assert!((verdict.confidence - 88.08).abs() < 1e-9);
    }

    #[test]
    fn test_negative_score_means_fake() {
        let engine =
            InferenceEngine::from_artifacts(model(vec![0.0; 4], -1.0), labels()).unwrap();

        let verdict = engine.classify("some news headline");

        assert_eq!(verdict.label, "FAKE");
        assert!(verdict.prob_fake > verdict.prob_real);
        assert!((verdict.confidence - 73.11).abs() < 0.01);
    }

    #[test]
    fn test_zero_score_breaks_toward_fake() {
        // score > 0 selects class 1; an exact zero goes to class 0
        let engine =
            InferenceEngine::from_artifacts(model(vec![0.0; 4], 0.0), labels()).unwrap();

        let verdict = engine.classify("earth");

        assert_eq!(verdict.label, "FAKE");
        assert!((verdict.confidence - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_are_complementary() {
        let engine = InferenceEngine::from_artifacts(
            model(vec![3.0, -2.0, 0.5, -4.0], 0.25),
            labels(),
        )
        .unwrap();

        for text in [
            "Scientists confirm the earth is flat",
            "flat flat flat",
            "confirm earth",
            "nothing the model knows",
        ] {
            let verdict = engine.classify(text);

            assert!((verdict.prob_fake + verdict.prob_real - 1.0).abs() < 1e-12);
            assert!(
                verdict.label == "FAKE" || verdict.label == "REAL",
                "unexpected label {:?}",
                verdict.label
            );
            assert!(verdict.confidence >= 0.0 && verdict.confidence <= 100.0);

            // The reported label must match the larger probability
            let expected = if verdict.prob_real > verdict.prob_fake {
                "REAL"
            } else {
                "FAKE"
            };
            assert_eq!(verdict.label, expected);
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let engine = InferenceEngine::from_artifacts(
            model(vec![1.0, -1.0, 2.0, -2.0], 0.1),
            labels(),
        )
        .unwrap();

        let first = engine.classify("scientists confirm flat earth");
        let second = engine.classify("scientists confirm flat earth");

        assert_eq!(first.label, second.label);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.decision_score, second.decision_score);
    }

    #[test]
    fn test_unknown_text_scores_at_intercept() {
        let engine = InferenceEngine::from_artifacts(
            model(vec![5.0, 5.0, 5.0, 5.0], -0.75),
            labels(),
        )
        .unwrap();

        let verdict = engine.classify("completely out of vocabulary words");
        assert!((verdict.decision_score + 0.75).abs() < 1e-12);
        assert_eq!(verdict.label, "FAKE");
    }

    #[test]
    fn test_status_tracks_inference_count() {
        let engine =
            InferenceEngine::from_artifacts(model(vec![0.0; 4], 1.0), labels()).unwrap();

        assert_eq!(engine.status().inference_count, 0);

        engine.classify("earth");
        engine.classify("flat earth");

        let status = engine.status();
        assert_eq!(status.inference_count, 2);
        assert_eq!(status.vocabulary_size, 4);
        assert_eq!(status.classes, vec!["FAKE", "REAL"]);
        assert_eq!(status.model.model_type, "tfidf-linear-svc");
    }

    #[test]
    fn test_mismatched_artifacts_rejected() {
        let mut bad = model(vec![0.0; 4], 0.0);
        bad.classifier.weights = vec![0.0; 3];

        assert!(InferenceEngine::from_artifacts(bad, labels()).is_err());
    }
}
