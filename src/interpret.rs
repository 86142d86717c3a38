use crate::policy::BandBounds;
use crate::types::scoring::Score;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Critical,
    Low,
    Medium,
    Good,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Critical, Band::Low, Band::Medium, Band::Good];

    pub fn tier(self) -> &'static str {
        match self {
            Band::Critical => "Critical",
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::Good => "Good",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Critical => "Intimidating",
            Band::Low => "Challenging",
            Band::Medium => "Approachable",
            Band::Good => "Welcoming",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.tier(), self.label())
    }
}

/// Map a fractional score to its band. Upper bounds are inclusive; zero,
/// negative and non-finite scores are Critical.
pub fn interpret(score: Score, bounds: &BandBounds) -> Band {
    if !score.is_finite() || score <= bounds.critical {
        Band::Critical
    } else if score <= bounds.low {
        Band::Low
    } else if score <= bounds.medium {
        Band::Medium
    } else {
        Band::Good
    }
}

pub fn percent(score: Score) -> f64 {
    score * 100.0
}
