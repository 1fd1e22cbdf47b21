use std::sync::Arc;

use crate::config::Config;
use crate::models::template::Template;
use crate::parsing::FieldParser;
use crate::portfolio::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Portfolio persistence. PostgreSQL in production.
    pub store: Arc<dyn PortfolioStore>,
    /// LLM-backed field parser with heuristic fallback.
    pub parser: FieldParser,
    /// Read-only template catalog, fixed at startup.
    pub templates: Arc<[Template]>,
    pub config: Config,
}
