//! Axum route handler for the Resume Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extract_upload;
use crate::models::evaluation::EvaluationRecord;
use crate::state::AppState;
use crate::upload::read_file_field;

/// POST /evaluate-resume
///
/// Accepts a multipart upload with a `file` field naming a `.pdf`, extracts
/// its text and returns the model's evaluation.
pub async fn handle_evaluate_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationRecord>, AppError> {
    let request_id = Uuid::new_v4();
    evaluate_upload(&state, multipart)
        .instrument(info_span!("evaluate_resume", %request_id))
        .await
        .map(Json)
}

async fn evaluate_upload(
    state: &AppState,
    multipart: Multipart,
) -> Result<EvaluationRecord, AppError> {
    let file = read_file_field(multipart)
        .await
        .map_err(AppError::Validation)?
        .ok_or_else(|| {
            AppError::UnprocessableEntity("Missing required upload field 'file'.".to_string())
        })?;

    // Suffix check only, case-sensitive.
    if !file.filename.ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported.".to_string(),
        ));
    }

    info!(filename = %file.filename, bytes = file.data.len(), "Evaluating resume");

    let resume_text = extract_upload(file.data).await?;
    let record = state.evaluator.evaluate(&resume_text).await?;

    info!(score = record.score, tier = ?record.tier, "Resume evaluated");
    Ok(record)
}
