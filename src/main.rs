//! NewsShield - Fake News Detection Service
//!
//! Loads a pre-trained TF-IDF + linear SVC model and a label encoder at
//! startup, then serves a small browser UI and a JSON API that classify
//! free-text news content as FAKE or REAL with a confidence percentage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     NEWSSHIELD                       │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌──────────────┐        ┌─────────────────────────┐ │
//! │  │  HTTP / UI   │  ───►  │  Inference Gateway      │ │
//! │  │  (Axum)      │        │  (TF-IDF + linear SVC)  │ │
//! │  └──────────────┘        └────────────┬────────────┘ │
//! │                                       ▼              │
//! │                     versioned artifacts (read-once)  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Artifacts are loaded exactly once; any load failure is fatal and the
//! process exits before binding the listener.

mod config;
mod engine;
mod error;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use engine::InferenceEngine;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "newsshield=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("NewsShield server starting...");
    tracing::info!("Model artifact: {}", config.model_path);
    tracing::info!("Label artifact: {}", config.labels_path);

    // Load artifacts - any failure here aborts startup, there is no
    // degraded mode that serves predictions without a model
    let model = engine::artifact::load_model(&config.model_path)
        .context("failed to load model artifact")?;
    let labels = engine::artifact::load_labels(&config.labels_path)
        .context("failed to load label encoder artifact")?;
    let engine = InferenceEngine::from_artifacts(model, labels)
        .context("failed to initialize inference engine")?;

    tracing::info!(
        "Inference engine ready: {} terms, classes {:?}",
        engine.vocabulary_size(),
        engine.class_labels()
    );

    // Build application state
    let state = AppState {
        engine: Arc::new(engine),
        config: config.clone(),
    };

    if state.config.is_production() {
        tracing::warn!("Running in production mode with permissive CORS");
    }

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InferenceEngine>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(handlers::pages::home))
        .route("/prediction", get(handlers::pages::prediction))
        // JSON API
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::detect))
        .route("/api/v1/engine", get(handlers::engine_status::status))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
