//! Axum route handler for resume upload and parsing.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract, DocumentKind};
use crate::models::resume::ParsedFields;
use crate::state::AppState;

/// Multipart field carrying the resume.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    pub parsed_data: ParsedFields,
    pub message: String,
    pub extracted_text_length: usize,
}

struct Upload {
    filename: String,
    kind: DocumentKind,
    bytes: Bytes,
}

/// POST /api/resume/parse
///
/// Validates the upload, extracts its text, and parses it into fields.
/// Unsupported or empty uploads are rejected before any extraction happens.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let Upload {
        filename,
        kind,
        bytes,
    } = read_upload(&mut multipart).await?;

    info!("Parsing {filename} ({} bytes, {kind:?})", bytes.len());

    let text = tokio::task::spawn_blocking(move || extract(&bytes, kind))
        .await
        .context("Text extraction task failed")?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from the file".to_string(),
        ));
    }

    let parsed_data = state.parser.parse(&text).await;

    Ok(Json(ParseResumeResponse {
        success: true,
        parsed_data,
        message: "Resume parsed successfully".to_string(),
        extracted_text_length: text.chars().count(),
    }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;

        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            AppError::Validation("Only PDF and DOCX files are supported".to_string())
        })?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        return Ok(Upload {
            filename,
            kind,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in upload"
    )))
}
