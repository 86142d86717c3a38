use crate::policy::{Policy, STALE_RECENCY};
use crate::types::scoring::ConfidenceScore;

// messages come out in rule order
pub fn common_issues(
    scores: &[&ConfidenceScore],
    maintainer_count: usize,
    external_count: usize,
    policy: &Policy,
) -> Vec<String> {
    let thresholds = &policy.issues;
    let mut issues = Vec::new();

    if external_count < thresholds.min_external_contributors {
        issues.push(format!(
            "Fewer than {} external contributors were active in the analysis window",
            thresholds.min_external_contributors
        ));
    }
    if maintainer_count > external_count {
        issues.push("Maintainers outnumber external contributors".to_string());
    }
    if scores.is_empty() {
        return issues;
    }

    let scored = scores.len() as f64;
    let low_confidence = scores
        .iter()
        .filter(|score| score.overall <= policy.low_confidence_threshold)
        .count() as f64;
    if low_confidence / scored >= thresholds.low_confidence_share {
        issues.push(
            "Most external contributors show a very low likelihood of returning".to_string(),
        );
    }

    let stale = scores
        .iter()
        .filter(|score| score.factors.recency <= STALE_RECENCY)
        .count() as f64;
    if stale / scored >= thresholds.stale_share {
        issues.push(
            "Most external contributors have been inactive for more than 90 days".to_string(),
        );
    }

    let average_diversity =
        scores.iter().map(|score| score.factors.event_diversity).sum::<f64>() / scored;
    if average_diversity < thresholds.low_diversity_average {
        issues.push(
            "External contributors engage through a narrow range of activity types".to_string(),
        );
    }

    let average_consistency =
        scores.iter().map(|score| score.factors.consistency).sum::<f64>() / scored;
    if average_consistency < thresholds.sporadic_consistency_average {
        issues.push("External contributor activity is sporadic".to_string());
    }

    issues
}
