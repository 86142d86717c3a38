use super::normalize::{ratio, saturate};
use crate::types::scoring::Score;
use crate::types::signals::ContributorSignals;

const EXPECTED_WINDOW_DAYS: u64 = 90;
const LONGEVITY_SATURATION_DAYS: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalConsistency {
    pub score: Score,
    pub recency: Score,
    pub consistency_ratio: Score,
    pub consistency: Score,
    pub longevity: Score,
}

/// Step function: activity is not rewarded proportionally past a week.
pub fn recency(days_since_last_activity: u64) -> Score {
    match days_since_last_activity {
        0..=7 => 1.0,
        8..=30 => 0.8,
        31..=90 => 0.6,
        _ => 0.4,
    }
}

pub fn temporal_score(signals: &ContributorSignals) -> TemporalConsistency {
    let recency = recency(signals.days_since_last_activity);
    let expected_window = signals.days_since_first_activity.min(EXPECTED_WINDOW_DAYS);
    let consistency_ratio = ratio(
        signals.activity_spread_days as f64,
        expected_window as f64,
    );
    // Active on half the expected days is already full consistency.
    let consistency = (consistency_ratio * 2.0).min(1.0);
    let longevity = saturate(
        signals.days_since_first_activity as f64,
        LONGEVITY_SATURATION_DAYS,
    );
    TemporalConsistency {
        score: (0.4 * recency + 0.4 * consistency + 0.2 * longevity).clamp(0.0, 1.0),
        recency,
        consistency_ratio,
        consistency,
        longevity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recency_steps() {
        assert_eq!(recency(0), 1.0);
        assert_eq!(recency(7), 1.0);
        assert_eq!(recency(8), 0.8);
        assert_eq!(recency(30), 0.8);
        assert_eq!(recency(31), 0.6);
        assert_eq!(recency(90), 0.6);
        assert_eq!(recency(91), 0.4);
        assert_eq!(recency(4_000), 0.4);
    }

    #[test]
    fn consistency_window_caps_at_ninety_days() {
        let result = temporal_score(&ContributorSignals {
            days_since_last_activity: 7,
            days_since_first_activity: 300,
            activity_spread_days: 45,
            ..Default::default()
        });
        assert_eq!(result.consistency_ratio, 0.5);
        assert_eq!(result.consistency, 1.0);
        assert_eq!(result.longevity, 1.0);
        assert!((result.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn typical_contributor() {
        let result = temporal_score(&ContributorSignals {
            days_since_last_activity: 7,
            days_since_first_activity: 90,
            activity_spread_days: 25,
            ..Default::default()
        });
        assert!((result.consistency - 50.0 / 90.0).abs() < 1e-12);
        assert_eq!(result.longevity, 0.5);
        assert!((result.score - 0.7222).abs() < 1e-3);
    }

    #[test]
    fn first_day_contributor_has_no_consistency() {
        let result = temporal_score(&ContributorSignals {
            days_since_last_activity: 0,
            days_since_first_activity: 0,
            activity_spread_days: 0,
            ..Default::default()
        });
        assert_eq!(result.consistency, 0.0);
        assert_eq!(result.longevity, 0.0);
        assert!((result.score - 0.4).abs() < 1e-12);
    }
}
