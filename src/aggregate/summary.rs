use crate::error::{ConfidenceError, Result};
use crate::interpret::{interpret, Band};
use crate::policy::Policy;
use crate::types::report::{CrossRepositorySummary, RepositoryConfidenceBreakdown, RepositoryRanking};
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub fn summarize(
    breakdowns: &[RepositoryConfidenceBreakdown],
    skipped: Vec<String>,
    worst_limit: usize,
    policy: &Policy,
) -> Result<CrossRepositorySummary> {
    if breakdowns.is_empty() {
        return Err(ConfidenceError::no_data("all repositories"));
    }

    let overall_average = breakdowns
        .iter()
        .map(|breakdown| breakdown.overall_average)
        .sum::<f64>()
        / breakdowns.len() as f64;

    let mut distribution = Band::ALL
        .iter()
        .map(|band| (*band, 0_usize))
        .collect::<BTreeMap<_, _>>();
    for breakdown in breakdowns {
        *distribution
            .entry(interpret(breakdown.overall_average, &policy.bands))
            .or_insert(0) += 1;
    }

    let mut rankings = breakdowns
        .iter()
        .map(|breakdown| RepositoryRanking {
            repository: breakdown.repository.clone(),
            overall_average: breakdown.overall_average,
            band: interpret(breakdown.overall_average, &policy.bands),
            external_contributor_count: breakdown.insights.external_contributor_count,
        })
        .collect::<Vec<_>>();
    rankings.sort_by(|a, b| {
        a.overall_average
            .partial_cmp(&b.overall_average)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.repository.cmp(&b.repository))
    });
    rankings.truncate(worst_limit);

    Ok(CrossRepositorySummary {
        repository_count: breakdowns.len(),
        overall_average,
        distribution,
        worst_performing: rankings,
        skipped,
        rejected: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::Insights;
    use crate::types::scoring::AlgorithmWeights;

    fn breakdown(repository: &str, overall_average: f64) -> RepositoryConfidenceBreakdown {
        RepositoryConfidenceBreakdown {
            repository: repository.to_string(),
            overall_average,
            band: interpret(overall_average, &Policy::default().bands),
            window_days: 30,
            weights: AlgorithmWeights::LIVE,
            insights: Insights {
                low_confidence_count: 0,
                maintainer_count: 1,
                external_contributor_count: 4,
                common_issues: Vec::new(),
            },
            contributor_breakdown: Vec::new(),
        }
    }

    #[test]
    fn summary_ranks_worst_first_and_counts_bands() {
        let breakdowns = vec![
            breakdown("acme/good", 0.42),
            breakdown("acme/low", 0.10),
            breakdown("acme/critical", 0.02),
            breakdown("acme/medium", 0.30),
        ];
        let summary = summarize(&breakdowns, Vec::new(), 2, &Policy::default())
            .expect("summary should compute");

        assert_eq!(summary.repository_count, 4);
        assert!((summary.overall_average - 0.21).abs() < 1e-12);
        assert_eq!(summary.worst_performing.len(), 2);
        assert_eq!(summary.worst_performing[0].repository, "acme/critical");
        assert_eq!(summary.worst_performing[1].repository, "acme/low");
        for band in Band::ALL {
            assert_eq!(summary.distribution[&band], 1);
        }
    }

    #[test]
    fn ties_break_by_repository_name() {
        let breakdowns = vec![breakdown("b/repo", 0.1), breakdown("a/repo", 0.1)];
        let summary = summarize(&breakdowns, Vec::new(), 5, &Policy::default())
            .expect("summary should compute");
        assert_eq!(summary.worst_performing[0].repository, "a/repo");
    }

    #[test]
    fn empty_fan_in_is_no_data() {
        let err = summarize(&[], vec!["acme/empty".to_string()], 5, &Policy::default())
            .expect_err("nothing to summarize");
        assert!(matches!(err, ConfidenceError::NoData { .. }));
    }

    #[test]
    fn skipped_repositories_are_carried_through() {
        let summary = summarize(
            &[breakdown("acme/good", 0.4)],
            vec!["acme/empty".to_string()],
            5,
            &Policy::default(),
        )
        .expect("summary should compute");
        assert_eq!(summary.skipped, vec!["acme/empty".to_string()]);
        assert_eq!(summary.distribution[&Band::Critical], 0);
    }
}
