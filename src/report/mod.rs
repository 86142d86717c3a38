pub mod json;
pub mod md;

use crate::engine::ScoredRecord;
use crate::error::ConfidenceError;
use crate::types::report::{CrossRepositorySummary, RepositoryConfidenceBreakdown};
use crate::types::scoring::{AlgorithmWeights, Score};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_scores(
    records: &[ScoredRecord],
    format: OutputFormat,
) -> Result<String, ConfidenceError> {
    match format {
        OutputFormat::Json => json::to_json(&records).map_err(ConfidenceError::Json),
        OutputFormat::Md => Ok(md::scores_to_markdown(records)),
    }
}

pub fn render_explanation(
    record: &ScoredRecord,
    weights: &AlgorithmWeights,
    cap: Score,
    format: OutputFormat,
) -> Result<String, ConfidenceError> {
    match format {
        OutputFormat::Json => json::to_json(record).map_err(ConfidenceError::Json),
        OutputFormat::Md => Ok(md::explanation_to_markdown(record, weights, cap)),
    }
}

pub fn render_breakdown(
    breakdown: &RepositoryConfidenceBreakdown,
    format: OutputFormat,
) -> Result<String, ConfidenceError> {
    match format {
        OutputFormat::Json => json::to_json(breakdown).map_err(ConfidenceError::Json),
        OutputFormat::Md => Ok(md::breakdown_to_markdown(breakdown)),
    }
}

pub fn render_summary(
    summary: &CrossRepositorySummary,
    format: OutputFormat,
) -> Result<String, ConfidenceError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ConfidenceError::Json),
        OutputFormat::Md => Ok(md::summary_to_markdown(summary)),
    }
}
