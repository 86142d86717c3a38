pub mod activity;
pub mod normalize;
pub mod privileged;
pub mod temporal;

use crate::types::scoring::{AlgorithmWeights, ComponentScores, ConfidenceScore, Score, ScoreFactors};
use crate::types::signals::ContributorSignals;

/// Score one external contributor. Role-agnostic: callers must not pass
/// maintainer or owner signals.
pub fn score_contributor(
    signals: &ContributorSignals,
    weights: &AlgorithmWeights,
    cap: Score,
) -> ConfidenceScore {
    // Zero activity means zero confidence, regardless of the day counters.
    if signals.total_event_count == 0 {
        return ConfidenceScore::zero();
    }

    let privileged = privileged::privileged_score(signals);
    let activity = activity::activity_score(signals);
    let temporal = temporal::temporal_score(signals);

    let components = ComponentScores {
        privileged_events: privileged.score,
        activity_patterns: activity.score,
        temporal_consistency: temporal.score,
    };
    let raw_overall = combine(&components, weights);

    ConfidenceScore {
        overall: raw_overall.min(cap),
        raw_overall,
        components,
        factors: ScoreFactors {
            privileged_ratio: privileged.ratio,
            privileged_boost: privileged.boost,
            event_diversity: activity.event_diversity,
            method_diversity: activity.method_diversity,
            activity_volume: activity.volume,
            recency: temporal.recency,
            consistency_ratio: temporal.consistency_ratio,
            consistency: temporal.consistency,
            longevity: temporal.longevity,
        },
    }
}

pub fn combine(components: &ComponentScores, weights: &AlgorithmWeights) -> Score {
    weights.privileged_events * components.privileged_events
        + weights.activity_patterns * components.activity_patterns
        + weights.temporal_consistency * components.temporal_consistency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::DEFAULT_CAP;

    fn example() -> ContributorSignals {
        ContributorSignals {
            privileged_event_count: 5,
            total_event_count: 50,
            unique_event_type_count: 4,
            detection_method_count: 2,
            days_since_last_activity: 7,
            days_since_first_activity: 90,
            activity_spread_days: 25,
        }
    }

    fn saturated() -> ContributorSignals {
        ContributorSignals {
            privileged_event_count: 200,
            total_event_count: 200,
            unique_event_type_count: 8,
            detection_method_count: 5,
            days_since_last_activity: 1,
            days_since_first_activity: 365,
            activity_spread_days: 120,
        }
    }

    #[test]
    fn worked_example_matches_formulas() {
        let score = score_contributor(&example(), &AlgorithmWeights::LIVE, DEFAULT_CAP);
        assert!((score.components.privileged_events - 0.22).abs() < 1e-9);
        assert!((score.components.activity_patterns - 0.5308).abs() < 1e-3);
        assert!((score.components.temporal_consistency - 0.7222).abs() < 1e-3);
        assert!((score.overall - 0.4544).abs() < 1e-3);
        assert!(!score.is_capped());
    }

    #[test]
    fn all_zero_input_yields_zero_everything() {
        let score = score_contributor(
            &ContributorSignals::default(),
            &AlgorithmWeights::LIVE,
            DEFAULT_CAP,
        );
        assert_eq!(score, ConfidenceScore::zero());
        assert_eq!(score.factors, ScoreFactors::default());
    }

    #[test]
    fn zero_total_events_ignores_day_counters() {
        let signals = ContributorSignals {
            days_since_last_activity: 2,
            days_since_first_activity: 200,
            activity_spread_days: 40,
            unique_event_type_count: 3,
            ..Default::default()
        };
        let score = score_contributor(&signals, &AlgorithmWeights::LIVE, DEFAULT_CAP);
        assert_eq!(score.overall, 0.0);
    }

    #[test]
    fn perfect_contributor_is_capped() {
        let score = score_contributor(&saturated(), &AlgorithmWeights::LIVE, DEFAULT_CAP);
        assert!((score.components.privileged_events - 1.0).abs() < 1e-9);
        assert!((score.components.activity_patterns - 1.0).abs() < 1e-9);
        assert!((score.components.temporal_consistency - 1.0).abs() < 1e-9);
        assert!((score.raw_overall - 1.0).abs() < 1e-9);
        assert_eq!(score.overall, DEFAULT_CAP);
        assert!(score.is_capped());
    }

    #[test]
    fn cap_is_configurable() {
        let score = score_contributor(&saturated(), &AlgorithmWeights::LIVE, 0.8);
        assert_eq!(score.overall, 0.8);
    }

    #[test]
    fn scoring_is_bit_identical_across_calls() {
        let first = score_contributor(&example(), &AlgorithmWeights::EXPLAINER, DEFAULT_CAP);
        let second = score_contributor(&example(), &AlgorithmWeights::EXPLAINER, DEFAULT_CAP);
        assert_eq!(first.overall.to_bits(), second.overall.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn components_and_overall_stay_in_range() {
        for total in [1_u64, 3, 10, 99, 1_000] {
            for last in [0_u64, 8, 45, 400] {
                for spread in [0_u64, 1, 30, 90] {
                    let signals = ContributorSignals {
                        privileged_event_count: total / 2,
                        total_event_count: total,
                        unique_event_type_count: total % 11,
                        detection_method_count: total % 7,
                        days_since_last_activity: last,
                        days_since_first_activity: 90 + last,
                        activity_spread_days: spread,
                    };
                    let score =
                        score_contributor(&signals, &AlgorithmWeights::LIVE, DEFAULT_CAP);
                    for component in [
                        score.components.privileged_events,
                        score.components.activity_patterns,
                        score.components.temporal_consistency,
                    ] {
                        assert!((0.0..=1.0).contains(&component));
                    }
                    assert!((0.0..=DEFAULT_CAP).contains(&score.overall));
                }
            }
        }
    }
}
