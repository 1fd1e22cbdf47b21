mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod parsing;
mod portfolio;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::models::template::default_catalog;
use crate::parsing::{FieldParser, LlmFieldExtractor};
use crate::portfolio::store::PgPortfolioStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: a missing required variable aborts startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if !config.fallback_skills.is_empty() {
        info!(
            "Heuristic fallback will insert placeholder skills: {:?}",
            config.fallback_skills
        );
    }

    let templates = default_catalog();
    info!("Loaded {} portfolio templates", templates.len());

    // Build app state
    let state = AppState {
        store: Arc::new(PgPortfolioStore::new(db)),
        parser: FieldParser::new(
            Arc::new(LlmFieldExtractor(llm)),
            config.fallback_skills.clone(),
        ),
        templates: templates.into(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
