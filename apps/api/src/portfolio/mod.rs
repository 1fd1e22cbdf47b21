// Portfolio Store: deploy-once, read-by-slug records.
// No update or delete path exists.

pub mod handlers;
pub mod slug;
pub mod store;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::models::resume::ParsedFields;
use crate::portfolio::slug::generate_route_slug;
use crate::portfolio::store::PortfolioStore;

#[derive(Debug, Clone, Deserialize)]
pub struct DeployRequest {
    pub username: String,
    pub selected_template: String,
    pub parsed_resume: ParsedFields,
}

/// Creates and persists a new portfolio under a freshly generated slug.
pub async fn deploy(store: &dyn PortfolioStore, request: DeployRequest) -> Result<Portfolio, AppError> {
    let portfolio = Portfolio {
        id: Uuid::new_v4(),
        route_slug: generate_route_slug(&request.username),
        username: request.username,
        parsed_resume: request.parsed_resume,
        selected_template: request.selected_template,
        created_at: Utc::now(),
    };

    store
        .save(&portfolio)
        .await
        .map_err(|e| AppError::Storage(format!("{e:#}")))?;

    info!(
        "Deployed portfolio {} with template {}",
        portfolio.route_slug, portfolio.selected_template
    );
    Ok(portfolio)
}

/// Fetches a portfolio by slug.
pub async fn get(store: &dyn PortfolioStore, route_slug: &str) -> Result<Portfolio, AppError> {
    store
        .load(route_slug)
        .await
        .map_err(|e| AppError::Storage(format!("{e:#}")))?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))
}
