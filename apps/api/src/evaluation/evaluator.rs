//! Resume evaluation: prompt, model call, fence stripping, decode.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::evaluation::prompts::RESUME_EVAL_PROMPT;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::models::evaluation::{EvaluationRecord, Tier};

/// Why an evaluation produced no record.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Model request failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Model response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Model response does not match the evaluation schema: {0}")]
    Schema(String),
}

impl EvaluationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, EvaluationError::Upstream(LlmError::Timeout { .. }))
    }
}

#[derive(Clone)]
pub struct ResumeEvaluator {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeEvaluator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Scores extracted resume text. Every failure is logged once here and
    /// returned to the caller, never panics.
    pub async fn evaluate(&self, resume_text: &str) -> Result<EvaluationRecord, EvaluationError> {
        let result = self.try_evaluate(resume_text).await;
        if let Err(e) = &result {
            warn!("Resume evaluation failed: {e}");
        }
        result
    }

    async fn try_evaluate(&self, resume_text: &str) -> Result<EvaluationRecord, EvaluationError> {
        let prompt = build_prompt(resume_text);
        let raw = self.generator.generate(&prompt).await?;
        debug!("Raw LLM output:\n{raw}");
        parse_evaluation(&raw)
    }
}

pub fn build_prompt(resume_text: &str) -> String {
    RESUME_EVAL_PROMPT.replace("{resume_text}", resume_text)
}

/// Sanitizes raw model output and decodes it into a record.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationRecord, EvaluationError> {
    let sanitized = strip_json_fences(raw);
    let value: serde_json::Value =
        serde_json::from_str(sanitized).map_err(EvaluationError::Parse)?;
    let record: EvaluationRecord =
        serde_json::from_value(value).map_err(|e| EvaluationError::Schema(e.to_string()))?;
    record.validate().map_err(EvaluationError::Schema)?;

    if !record.score_is_normalized() {
        warn!("Model score {} is above 1.0; keeping it as written", record.score);
    }
    // Tier is passed through as the model wrote it.
    if !record.tier_matches_score() {
        warn!(
            "Model tier {:?} disagrees with score {} (expected {:?})",
            record.tier,
            record.score,
            Tier::from_score(record.score)
        );
    }
    Ok(record)
}
