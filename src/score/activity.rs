use super::normalize::{log_volume, saturate};
use crate::types::scoring::Score;
use crate::types::signals::ContributorSignals;

const EVENT_TYPE_SATURATION: f64 = 8.0;
const DETECTION_METHOD_SATURATION: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityPatterns {
    pub score: Score,
    pub event_diversity: Score,
    pub method_diversity: Score,
    pub volume: Score,
}

pub fn activity_score(signals: &ContributorSignals) -> ActivityPatterns {
    let event_diversity = saturate(
        signals.unique_event_type_count as f64,
        EVENT_TYPE_SATURATION,
    );
    let method_diversity = saturate(
        signals.detection_method_count as f64,
        DETECTION_METHOD_SATURATION,
    );
    let volume = log_volume(signals.total_event_count);
    ActivityPatterns {
        score: (0.4 * event_diversity + 0.4 * method_diversity + 0.2 * volume).clamp(0.0, 1.0),
        event_diversity,
        method_diversity,
        volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_activity() {
        let result = activity_score(&ContributorSignals {
            total_event_count: 50,
            unique_event_type_count: 4,
            detection_method_count: 2,
            ..Default::default()
        });
        assert_eq!(result.event_diversity, 0.5);
        assert!((result.method_diversity - 0.4).abs() < 1e-12);
        assert!((result.volume - 51f64.log10() / 2.0).abs() < 1e-12);
        assert!((result.score - 0.5308).abs() < 1e-3);
    }

    #[test]
    fn saturated_activity_scores_one() {
        let result = activity_score(&ContributorSignals {
            total_event_count: 500,
            unique_event_type_count: 12,
            detection_method_count: 9,
            ..Default::default()
        });
        assert!((result.score - 1.0).abs() < 1e-12);
    }
}
