//! Portfolio persistence behind a narrow trait.
//!
//! `AppState` holds an `Arc<dyn PortfolioStore>`; production uses PostgreSQL,
//! tests use the in-memory store.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::models::portfolio::{Portfolio, PortfolioRow};

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Inserts a portfolio and returns its storage identifier.
    async fn save(&self, portfolio: &Portfolio) -> Result<i64>;

    /// Looks a portfolio up by exact slug.
    async fn load(&self, route_slug: &str) -> Result<Option<Portfolio>>;
}

pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn save(&self, portfolio: &Portfolio) -> Result<i64> {
        let pk: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO portfolios
                (id, username, selected_template, route_slug, parsed_resume, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING pk
            "#,
        )
        .bind(portfolio.id)
        .bind(&portfolio.username)
        .bind(&portfolio.selected_template)
        .bind(&portfolio.route_slug)
        .bind(Json(&portfolio.parsed_resume))
        .bind(portfolio.created_at)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Failed to insert portfolio {}", portfolio.route_slug))?;

        info!("Inserted portfolio {} (pk {pk})", portfolio.route_slug);
        Ok(pk)
    }

    async fn load(&self, route_slug: &str) -> Result<Option<Portfolio>> {
        let row: Option<PortfolioRow> = sqlx::query_as(
            r#"
            SELECT id, username, selected_template, route_slug, parsed_resume, created_at
            FROM portfolios
            WHERE route_slug = $1
            "#,
        )
        .bind(route_slug)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load portfolio {route_slug}"))?;

        Ok(row.map(Portfolio::from))
    }
}
