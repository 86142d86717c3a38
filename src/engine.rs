use crate::aggregate::{self, summary, RosterEntry};
use crate::error::{ConfidenceError, Result};
use crate::interpret::{interpret, Band};
use crate::score;
use crate::snapshot::RepositorySnapshot;
use crate::types::config::{validate_weights, EngineSettings};
use crate::types::report::{CrossRepositorySummary, RejectedInput, RepositoryConfidenceBreakdown};
use crate::types::scoring::{AlgorithmWeights, ConfidenceScore};
use crate::types::signals::{Adjustment, ContributorSignalInput};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const PARALLEL_THRESHOLD: usize = 64;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub score: ConfidenceScore,
    pub band: Band,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,
}

#[derive(Debug, Clone)]
pub struct ConfidenceEngine {
    settings: EngineSettings,
}

impl ConfidenceEngine {
    pub fn new(settings: EngineSettings) -> Result<Self> {
        validate_weights(&settings.weights)?;
        if !(settings.cap > 0.0 && settings.cap <= 1.0) {
            return Err(ConfidenceError::ConfigParse(format!(
                "scoring.cap must be within (0.0, 1.0] (found {})",
                settings.cap
            )));
        }
        Ok(Self { settings })
    }

    pub fn with_defaults() -> Self {
        Self {
            settings: EngineSettings::default(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn weights(&self) -> AlgorithmWeights {
        self.settings.weights
    }

    pub fn score(&self, input: &ContributorSignalInput) -> ScoredRecord {
        let sanitized = input.sanitize();
        for adjustment in &sanitized.adjustments {
            debug!(%adjustment, "clamped degenerate signal");
        }
        let score = score::score_contributor(
            &sanitized.signals,
            &self.settings.weights,
            self.settings.cap,
        );
        ScoredRecord {
            band: interpret(score.overall, &self.settings.policy.bands),
            score,
            adjustments: sanitized.adjustments,
        }
    }

    pub fn score_batch(&self, inputs: &[ContributorSignalInput]) -> Vec<ScoredRecord> {
        if inputs.len() >= PARALLEL_THRESHOLD {
            debug!(records = inputs.len(), "scoring batch in parallel");
            inputs.par_iter().map(|input| self.score(input)).collect()
        } else {
            debug!(records = inputs.len(), "scoring batch sequentially");
            inputs.iter().map(|input| self.score(input)).collect()
        }
    }

    pub fn assess_repository(
        &self,
        snapshot: RepositorySnapshot,
    ) -> Result<RepositoryConfidenceBreakdown> {
        let window_days = snapshot.window_days.unwrap_or(self.settings.window_days);
        let external_inputs = snapshot
            .contributors
            .iter()
            .filter(|member| !member.role.is_maintainer())
            .filter_map(|member| member.signals)
            .collect::<Vec<_>>();
        let mut scored = self.score_batch(&external_inputs).into_iter();

        let roster = snapshot
            .contributors
            .into_iter()
            .map(|member| {
                let score = if member.role.is_maintainer() || member.signals.is_none() {
                    None
                } else {
                    scored.next().map(|record| record.score)
                };
                RosterEntry {
                    login: member.login,
                    role: member.role,
                    metadata: member.metadata,
                    score,
                }
            })
            .collect::<Vec<_>>();

        let breakdown = aggregate::aggregate_repository(
            &snapshot.repository,
            roster,
            window_days,
            self.settings.weights,
            &self.settings.policy,
        )?;
        info!(
            repository = %breakdown.repository,
            average = breakdown.overall_average,
            band = %breakdown.band,
            issues = breakdown.insights.common_issues.len(),
            "aggregated repository confidence"
        );
        Ok(breakdown)
    }

    pub fn summarize(
        &self,
        snapshots: Vec<RepositorySnapshot>,
        rejected: Vec<RejectedInput>,
        worst_limit: Option<usize>,
    ) -> Result<CrossRepositorySummary> {
        let mut breakdowns = Vec::with_capacity(snapshots.len());
        let mut skipped = Vec::new();
        for snapshot in snapshots {
            match self.assess_repository(snapshot) {
                Ok(breakdown) => breakdowns.push(breakdown),
                Err(ConfidenceError::NoData { repository }) => {
                    warn!(%repository, "skipping repository without scored contributors");
                    skipped.push(repository);
                }
                Err(e) => return Err(e),
            }
        }
        let mut summary = summary::summarize(
            &breakdowns,
            skipped,
            worst_limit.unwrap_or(self.settings.policy.worst_repository_limit),
            &self.settings.policy,
        )?;
        summary.rejected = rejected;
        Ok(summary)
    }
}
