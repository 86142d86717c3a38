use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandBounds {
    pub critical: f64,
    pub low: f64,
    pub medium: f64,
}

impl Default for BandBounds {
    fn default() -> Self {
        Self {
            critical: 0.05,
            low: 0.15,
            medium: 0.35,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IssueThresholds {
    pub min_external_contributors: usize,
    pub low_confidence_share: f64,
    pub stale_share: f64,
    pub low_diversity_average: f64,
    pub sporadic_consistency_average: f64,
}

impl Default for IssueThresholds {
    fn default() -> Self {
        Self {
            min_external_contributors: 3,
            low_confidence_share: 0.50,
            stale_share: 0.50,
            low_diversity_average: 0.25,
            sporadic_consistency_average: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Policy {
    pub bands: BandBounds,
    pub low_confidence_threshold: f64,
    pub worst_repository_limit: usize,
    pub issues: IssueThresholds,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            bands: BandBounds::default(),
            low_confidence_threshold: 0.05,
            worst_repository_limit: 5,
            issues: IssueThresholds::default(),
        }
    }
}

// last activity more than 90 days ago
pub const STALE_RECENCY: f64 = 0.4;
