use crate::evaluation::evaluator::ResumeEvaluator;
use crate::score_log::ScoreLog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: ResumeEvaluator,
    /// Written only by the interactive form.
    pub score_log: ScoreLog,
}
