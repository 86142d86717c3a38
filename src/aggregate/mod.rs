pub mod issues;
pub mod summary;

use crate::error::{ConfidenceError, Result};
use crate::interpret::interpret;
use crate::policy::Policy;
use crate::types::report::{
    ContributorEntry, Insights, Metadata, RepositoryConfidenceBreakdown, Role,
};
use crate::types::scoring::{AlgorithmWeights, ConfidenceScore};

#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub login: String,
    pub role: Role,
    pub metadata: Metadata,
    pub score: Option<ConfidenceScore>,
}

// A roster without scores is NoData, never an average of zero.
pub fn aggregate_repository(
    repository: &str,
    roster: Vec<RosterEntry>,
    window_days: u32,
    weights: AlgorithmWeights,
    policy: &Policy,
) -> Result<RepositoryConfidenceBreakdown> {
    let scores = roster
        .iter()
        .filter_map(|entry| entry.score.as_ref())
        .collect::<Vec<_>>();
    if scores.is_empty() {
        return Err(ConfidenceError::no_data(repository));
    }

    let overall_average =
        scores.iter().map(|score| score.overall).sum::<f64>() / scores.len() as f64;
    let low_confidence_count = scores
        .iter()
        .filter(|score| score.overall <= policy.low_confidence_threshold)
        .count();
    let maintainer_count = roster
        .iter()
        .filter(|entry| entry.role.is_maintainer())
        .count();
    let external_contributor_count = roster.len() - maintainer_count;
    let common_issues = issues::common_issues(
        &scores,
        maintainer_count,
        external_contributor_count,
        policy,
    );

    let contributor_breakdown = roster
        .into_iter()
        .map(|entry| ContributorEntry {
            band: entry
                .score
                .as_ref()
                .map(|score| interpret(score.overall, &policy.bands)),
            login: entry.login,
            role: entry.role,
            score: entry.score,
            metadata: entry.metadata,
        })
        .collect();

    Ok(RepositoryConfidenceBreakdown {
        repository: repository.to_string(),
        overall_average,
        band: interpret(overall_average, &policy.bands),
        window_days,
        weights,
        insights: Insights {
            low_confidence_count,
            maintainer_count,
            external_contributor_count,
            common_issues,
        },
        contributor_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::Band;

    fn scored(login: &str, overall: f64) -> RosterEntry {
        RosterEntry {
            login: login.to_string(),
            role: Role::Contributor,
            metadata: Metadata::new(),
            score: Some(ConfidenceScore {
                overall,
                raw_overall: overall,
                ..Default::default()
            }),
        }
    }

    fn maintainer(login: &str) -> RosterEntry {
        RosterEntry {
            login: login.to_string(),
            role: Role::Maintainer,
            metadata: Metadata::new(),
            score: None,
        }
    }

    #[test]
    fn averages_scored_entries_and_counts_roles() {
        let roster = vec![
            scored("alice", 0.4),
            scored("bob", 0.2),
            scored("carol", 0.0),
            maintainer("dave"),
        ];
        let breakdown = aggregate_repository(
            "acme/widgets",
            roster,
            30,
            AlgorithmWeights::LIVE,
            &Policy::default(),
        )
        .expect("breakdown should aggregate");

        assert!((breakdown.overall_average - 0.2).abs() < 1e-12);
        assert_eq!(breakdown.band, Band::Medium);
        assert_eq!(breakdown.insights.low_confidence_count, 1);
        assert_eq!(breakdown.insights.maintainer_count, 1);
        assert_eq!(breakdown.insights.external_contributor_count, 3);
        assert_eq!(breakdown.contributor_breakdown.len(), 4);
        assert_eq!(breakdown.contributor_breakdown[0].band, Some(Band::Good));
        assert_eq!(breakdown.contributor_breakdown[3].band, None);
    }

    #[test]
    fn empty_roster_is_no_data() {
        let err = aggregate_repository(
            "acme/empty",
            Vec::new(),
            30,
            AlgorithmWeights::LIVE,
            &Policy::default(),
        )
        .expect_err("empty roster should not aggregate");
        assert!(matches!(err, ConfidenceError::NoData { ref repository } if repository == "acme/empty"));
    }

    #[test]
    fn maintainers_only_is_no_data() {
        let err = aggregate_repository(
            "acme/closed",
            vec![maintainer("root")],
            30,
            AlgorithmWeights::LIVE,
            &Policy::default(),
        )
        .expect_err("unscored roster should not aggregate");
        assert!(matches!(err, ConfidenceError::NoData { .. }));
    }

    #[test]
    fn all_zero_scores_average_to_zero_not_no_data() {
        let breakdown = aggregate_repository(
            "acme/quiet",
            vec![scored("a", 0.0), scored("b", 0.0)],
            30,
            AlgorithmWeights::LIVE,
            &Policy::default(),
        )
        .expect("zero scores are still data");
        assert_eq!(breakdown.overall_average, 0.0);
        assert_eq!(breakdown.band, Band::Critical);
        assert_eq!(breakdown.insights.low_confidence_count, 2);
    }
}
