//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::portfolio::{deploy, get, DeployRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub success: bool,
    pub portfolio_url: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub success: bool,
    pub portfolio: Portfolio,
}

/// POST /api/portfolio/deploy
pub async fn handle_deploy(
    State(state): State<AppState>,
    Json(request): Json<DeployRequest>,
) -> Result<Json<DeployResponse>, AppError> {
    let portfolio = deploy(state.store.as_ref(), request).await?;

    Ok(Json(DeployResponse {
        success: true,
        portfolio_url: format!("/portfolio/{}", portfolio.route_slug),
        message: "Portfolio deployed successfully!".to_string(),
    }))
}

/// GET /api/portfolio/:route_slug
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(route_slug): Path<String>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = get(state.store.as_ref(), &route_slug).await?;

    Ok(Json(PortfolioResponse {
        success: true,
        portfolio,
    }))
}
