use super::normalize::{ratio, saturate};
use crate::types::scoring::Score;
use crate::types::signals::ContributorSignals;

const BOOST_SATURATION: f64 = 10.0;
const RATIO_WEIGHT: f64 = 0.7;
const BOOST_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrivilegedEvents {
    pub score: Score,
    pub ratio: Score,
    pub boost: Score,
}

pub fn privileged_score(signals: &ContributorSignals) -> PrivilegedEvents {
    let privileged = signals.privileged_event_count as f64;
    let ratio = ratio(privileged, signals.total_event_count as f64);
    let boost = saturate(privileged, BOOST_SATURATION);
    PrivilegedEvents {
        score: (RATIO_WEIGHT * ratio + BOOST_WEIGHT * boost).clamp(0.0, 1.0),
        ratio,
        boost,
    }
}
