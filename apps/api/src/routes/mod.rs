pub mod health;
pub mod templates;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parsing::handlers::handle_parse_resume;
use crate::portfolio::handlers::{handle_deploy, handle_get_portfolio};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::root_handler))
        .route("/api/", get(health::root_handler))
        .route("/api/templates", get(templates::handle_list_templates))
        .route("/api/resume/parse", post(handle_parse_resume))
        .route("/api/portfolio/deploy", post(handle_deploy))
        .route("/api/portfolio/:route_slug", get(handle_get_portfolio))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
