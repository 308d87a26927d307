//! Geopolitical Stability Predictor - HTTP API
//!
//! Fetch headlines, classify "Safe" / "At Risk", attach token explanations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  STABILITY PREDICTOR API                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  News Client  │  │  Classifier         │ │
//! │  │  Gateway  │  │  (GNews)      │  │  (ONNX + tokenizer) │ │
//! │  │  (Axum)   │  │               │  │  + Explainer        │ │
//! │  └─────┬─────┘  └───────┬───────┘  └──────────┬──────────┘ │
//! │        └────────────────┴─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use stability_core::{Classifier, NewsClient, OnnxClassifier};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
    services::ServeFile,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(&config);

    tracing::info!("Stability Predictor API starting...");

    // Model is loaded once; failure here is fatal
    let classifier = OnnxClassifier::load(&config.model_config())
        .with_context(|| format!("Failed to load model from {}", config.model_dir.display()))?;

    let news = NewsClient::new(config.news_config())
        .context("Failed to build news HTTP client")?;
    if !news.is_configured() {
        tracing::warn!("GNEWS_API_KEY not set - live predictions will return no articles");
    }

    // Build application state
    let state = AppState {
        classifier: Arc::new(classifier),
        news: Arc::new(news),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stability_server=debug,stability_core=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub news: Arc<NewsClient>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    // Frontend assets
    let asset_routes = Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/script.js", ServeFile::new(static_dir.join("script.js")));

    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict_live", get(handlers::predict::predict_live))
        .route("/predict", post(handlers::predict::predict_from_input));

    Router::new()
        .merge(asset_routes)
        .merge(api_routes)
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
