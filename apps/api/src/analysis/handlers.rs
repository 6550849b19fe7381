use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::analysis::analyze_resume;
use crate::analysis::recover::AnalysisResult;
use crate::errors::AppError;
use crate::extract::{extract_resume_text, DocumentFormat};
use crate::models::resume::StructuredResume;
use crate::state::AppState;

/// POST /analyze
///
/// Multipart form: `resume` (PDF or DOCX file) and `job_description` (text).
/// Validation order is part of the contract: missing file, then missing job
/// description, then format dispatch.
pub async fn handle_analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume_file: Option<(String, Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MissingInput(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MissingInput(format!("Invalid file upload: {e}")))?;
                resume_file = Some((filename, data));
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::MissingInput(format!("Invalid job description field: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let (filename, data) = resume_file
        .ok_or_else(|| AppError::MissingInput("No resume file provided".to_string()))?;

    if job_description.is_empty() {
        return Err(AppError::MissingInput(
            "No job description provided".to_string(),
        ));
    }

    let format = DocumentFormat::from_filename(&filename)?;
    let resume_text = extract_resume_text(format, &data)?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text could be extracted from the document".to_string(),
        ));
    }

    tracing::debug!(
        "Extracted {} chars of resume text from {filename}",
        resume_text.len()
    );

    let result = analyze_resume(&resume_text, &job_description, state.oracle.as_ref()).await?;
    Ok(Json(result))
}

/// POST /analyze-json
///
/// JSON body `{resume: <structured record>, job_description: <string>}`.
/// The resume record is rendered to the canonical plain-text document
/// before analysis.
pub async fn handle_analyze_json(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Some(Json(data)) = body else {
        return Err(AppError::MissingInput("No data provided".to_string()));
    };
    if data.is_null() {
        return Err(AppError::MissingInput("No data provided".to_string()));
    }

    let resume_value = data.get("resume").filter(|v| !v.is_null());
    let Some(resume_value) = resume_value else {
        return Err(AppError::MissingInput(
            "No resume data provided".to_string(),
        ));
    };

    let job_description = data
        .get("job_description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if job_description.is_empty() {
        return Err(AppError::MissingInput(
            "No job description provided".to_string(),
        ));
    }

    let resume: StructuredResume = serde_json::from_value(resume_value.clone())
        .map_err(|e| AppError::MissingInput(format!("Invalid resume data: {e}")))?;

    let resume_text = resume.to_plain_text();

    let result = analyze_resume(&resume_text, job_description, state.oracle.as_ref()).await?;
    Ok(Json(result))
}
