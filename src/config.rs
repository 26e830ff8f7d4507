//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the classifier artifact
    pub model_path: String,

    /// Path to the label encoder artifact
    pub labels_path: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/model.json".to_string()),

            labels_path: env::var("LABELS_PATH")
                .unwrap_or_else(|_| "models/labels.json".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
