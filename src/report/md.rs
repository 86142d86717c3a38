use crate::engine::ScoredRecord;
use crate::interpret::{percent, Band};
use crate::types::report::{CrossRepositorySummary, RepositoryConfidenceBreakdown};
use crate::types::scoring::{AlgorithmWeights, Score};

pub fn scores_to_markdown(records: &[ScoredRecord]) -> String {
    let mut output = String::new();
    output.push_str("# Contributor Confidence\n\n");
    output.push_str("| # | overall | band | privileged | activity | temporal | adjustments |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for (index, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {:.1}% | {} | {:.3} | {:.3} | {:.3} | {} |\n",
            index + 1,
            percent(record.score.overall),
            record.band,
            record.score.components.privileged_events,
            record.score.components.activity_patterns,
            record.score.components.temporal_consistency,
            record.adjustments.len()
        ));
    }
    output
}

/// Step-by-step breakdown for the interactive calculator.
pub fn explanation_to_markdown(
    record: &ScoredRecord,
    weights: &AlgorithmWeights,
    cap: Score,
) -> String {
    let score = &record.score;
    let factors = &score.factors;
    let mut output = String::new();
    output.push_str("# Confidence Explained\n\n");
    output.push_str(&format!(
        "Overall: {:.1}% ({})\n\n",
        percent(score.overall),
        record.band
    ));

    if !record.adjustments.is_empty() {
        output.push_str("## Input Adjustments\n\n");
        for adjustment in &record.adjustments {
            output.push_str(&format!("- {adjustment}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Privileged Events\n\n");
    output.push_str(&format!(
        "- ratio: {:.3}\n- boost: {:.3}\n- score: 0.7 x ratio + 0.3 x boost = {:.3}\n\n",
        factors.privileged_ratio, factors.privileged_boost, score.components.privileged_events
    ));

    output.push_str("## Activity Patterns\n\n");
    output.push_str(&format!(
        "- event diversity: {:.3}\n- method diversity: {:.3}\n- activity volume: {:.3}\n- score: {:.3}\n\n",
        factors.event_diversity,
        factors.method_diversity,
        factors.activity_volume,
        score.components.activity_patterns
    ));

    output.push_str("## Temporal Consistency\n\n");
    output.push_str(&format!(
        "- recency: {:.3}\n- consistency ratio: {:.3} (consistency {:.3})\n- longevity: {:.3}\n- score: {:.3}\n\n",
        factors.recency,
        factors.consistency_ratio,
        factors.consistency,
        factors.longevity,
        score.components.temporal_consistency
    ));

    output.push_str("## Weighted Total\n\n");
    output.push_str(&format!(
        "- weights: {:.2} / {:.2} / {:.2}\n- raw: {:.3}\n- cap: {:.2}{}\n",
        weights.privileged_events,
        weights.activity_patterns,
        weights.temporal_consistency,
        score.raw_overall,
        cap,
        if score.is_capped() { " (applied)" } else { "" }
    ));
    output
}

pub fn breakdown_to_markdown(breakdown: &RepositoryConfidenceBreakdown) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Confidence Report: {}\n\n", breakdown.repository));
    output.push_str(&format!(
        "Average confidence: {:.1}% ({})\n\nAnalysis window: {} days\n\n",
        percent(breakdown.overall_average),
        breakdown.band,
        breakdown.window_days
    ));

    let insights = &breakdown.insights;
    output.push_str("## Insights\n\n");
    output.push_str(&format!(
        "- external contributors: {}\n- maintainers: {}\n- low confidence: {}\n\n",
        insights.external_contributor_count,
        insights.maintainer_count,
        insights.low_confidence_count
    ));

    output.push_str("## Common Issues\n\n");
    if insights.common_issues.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for issue in &insights.common_issues {
            output.push_str(&format!("- {issue}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Contributors\n\n");
    for entry in &breakdown.contributor_breakdown {
        match (&entry.score, entry.band) {
            (Some(score), Some(band)) => output.push_str(&format!(
                "- {} ({:?}): {:.1}% {}\n",
                entry.login,
                entry.role,
                percent(score.overall),
                band
            )),
            _ => output.push_str(&format!("- {} ({:?}): not scored\n", entry.login, entry.role)),
        }
    }
    output
}

pub fn summary_to_markdown(summary: &CrossRepositorySummary) -> String {
    let mut output = String::new();
    output.push_str("# Community Confidence Summary\n\n");
    output.push_str(&format!(
        "Repositories: {}\n\nAverage confidence: {:.1}%\n\n",
        summary.repository_count,
        percent(summary.overall_average)
    ));

    output.push_str("## Distribution\n\n");
    for band in Band::ALL {
        output.push_str(&format!(
            "- {}: {}\n",
            band,
            summary.distribution.get(&band).copied().unwrap_or(0)
        ));
    }
    output.push('\n');

    output.push_str("## Worst Performing\n\n");
    for ranking in &summary.worst_performing {
        output.push_str(&format!(
            "- {}: {:.1}% ({}, {} external contributors)\n",
            ranking.repository,
            percent(ranking.overall_average),
            ranking.band,
            ranking.external_contributor_count
        ));
    }

    if !summary.skipped.is_empty() {
        output.push_str("\n## Skipped (no data)\n\n");
        for repository in &summary.skipped {
            output.push_str(&format!("- {repository}\n"));
        }
    }

    if !summary.rejected.is_empty() {
        output.push_str("\n## Rejected Inputs\n\n");
        for rejected in &summary.rejected {
            output.push_str(&format!("- {}: {}\n", rejected.path, rejected.reason));
        }
    }
    output
}
