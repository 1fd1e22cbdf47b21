use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::template::Template;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub success: bool,
    pub templates: Vec<Template>,
}

/// GET /api/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        success: true,
        templates: state.templates.to_vec(),
    })
}
