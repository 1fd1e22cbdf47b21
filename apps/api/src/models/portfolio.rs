use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::resume::ParsedFields;

/// A deployed portfolio. Created once at deploy time and never modified.
///
/// This is the public view: the storage primary key is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub username: String,
    pub parsed_resume: ParsedFields,
    pub selected_template: String,
    pub route_slug: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape of the `portfolios` table, minus the `pk` column.
#[derive(Debug, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub username: String,
    pub selected_template: String,
    pub route_slug: String,
    pub parsed_resume: Json<ParsedFields>,
    pub created_at: DateTime<Utc>,
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Portfolio {
            id: row.id,
            username: row.username,
            parsed_resume: row.parsed_resume.0,
            selected_template: row.selected_template,
            route_slug: row.route_slug,
            created_at: row.created_at,
        }
    }
}
