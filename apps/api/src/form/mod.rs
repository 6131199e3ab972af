//! Interactive upload form: one file input, a status box and a result box.
//!
//! Unlike the API, the form does not check the file extension, and every
//! successful score is appended to the score log.

pub mod template;

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::evaluation::evaluator::ResumeEvaluator;
use crate::extraction::extract_upload;
use crate::form::template::render_index;
use crate::score_log::ScoreLog;
use crate::state::AppState;
use crate::upload::read_file_field;

pub const MISSING_UPLOAD: &str = "Please upload a PDF resume.";
pub const SCORING_FAILED: &str = "Could not score resume.";
pub const SCORED: &str = "Resume scored successfully!";

/// What the form shows after a submission.
#[derive(Debug, PartialEq)]
pub struct FormOutcome {
    pub status: &'static str,
    /// Pretty JSON of the record, identical to the text appended to the log.
    pub result: Option<String>,
}

impl FormOutcome {
    fn failed(status: &'static str) -> Self {
        Self {
            status,
            result: None,
        }
    }
}

/// Runs extract → evaluate → append for one form submission.
pub async fn process_resume(
    upload: Option<Bytes>,
    evaluator: &ResumeEvaluator,
    score_log: &ScoreLog,
) -> FormOutcome {
    let data = match upload {
        Some(data) if !data.is_empty() => data,
        _ => return FormOutcome::failed(MISSING_UPLOAD),
    };

    let resume_text = match extract_upload(data).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Form upload could not be read: {e}");
            return FormOutcome::failed(SCORING_FAILED);
        }
    };

    // Failure reason is already logged by the evaluator.
    let Ok(record) = evaluator.evaluate(&resume_text).await else {
        return FormOutcome::failed(SCORING_FAILED);
    };

    match score_log.append(&record).await {
        Ok(serialized) => {
            info!(score = record.score, tier = ?record.tier, "Form submission scored");
            FormOutcome {
                status: SCORED,
                result: Some(serialized),
            }
        }
        Err(e) => {
            error!(
                "Failed to append to score log {}: {e}",
                score_log.path().display()
            );
            FormOutcome::failed(SCORING_FAILED)
        }
    }
}

/// GET /
pub async fn handle_form_page() -> Html<String> {
    render_index("", "")
}

/// POST /
pub async fn handle_form_submit(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let upload = match read_file_field(multipart).await {
        Ok(file) => file.map(|f| f.data),
        Err(e) => {
            warn!("Malformed form submission: {e}");
            None
        }
    };

    let outcome = process_resume(upload, &state.evaluator, &state.score_log).await;
    render_index(outcome.status, outcome.result.as_deref().unwrap_or_default())
}
