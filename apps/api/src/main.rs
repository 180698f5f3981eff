mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod models;
mod routes;
mod state;
mod storage;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::interview::parser::RegexEvaluationParser;
use crate::llm_client::GeminiClient;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;
use crate::storage::{DocumentStorage, S3DocumentStorage};
use crate::store::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Parakh API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgResumeStore::new(db));

    // Initialize S3 / MinIO document storage, if configured
    let storage: Option<Arc<dyn DocumentStorage>> = match &config.storage {
        Some(storage_config) => {
            let storage = S3DocumentStorage::connect(storage_config).await;
            info!("S3 storage initialized (bucket: {})", storage_config.bucket);
            Some(Arc::new(storage))
        }
        None => {
            info!("S3_BUCKET not set; uploaded documents will not be stored");
            None
        }
    };

    // Initialize LLM client
    let llm = Arc::new(GeminiClient::new(config.gemini_api_key.clone())?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        store,
        storage,
        llm,
        parser: Arc::new(RegexEvaluationParser),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
