use crate::error::ConfidenceError;
use crate::policy::{BandBounds, IssueThresholds, Policy};
use crate::types::scoring::{AlgorithmWeights, Score, WeightPreset, DEFAULT_CAP};
use serde::Deserialize;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
const WEIGHT_SUM_TOLERANCE: Score = 0.01;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfidenceConfig {
    pub scoring: Option<ScoringConfig>,
    pub policy: Option<PolicyConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub preset: Option<String>,
    pub cap: Option<Score>,
    pub window_days: Option<u32>,
    pub weights: Option<WeightsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    pub privileged_events: Score,
    pub activity_patterns: Score,
    pub temporal_consistency: Score,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    pub low_confidence_threshold: Option<Score>,
    pub worst_repository_limit: Option<usize>,
    pub bands: Option<BandsConfig>,
    pub issues: Option<IssuesConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BandsConfig {
    pub critical: Option<Score>,
    pub low: Option<Score>,
    pub medium: Option<Score>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssuesConfig {
    pub min_external_contributors: Option<usize>,
    pub low_confidence_share: Option<Score>,
    pub stale_share: Option<Score>,
    pub low_diversity_average: Option<Score>,
    pub sporadic_consistency_average: Option<Score>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub weights: AlgorithmWeights,
    pub cap: Score,
    pub window_days: u32,
    pub policy: Policy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: AlgorithmWeights::default(),
            cap: DEFAULT_CAP,
            window_days: DEFAULT_WINDOW_DAYS,
            policy: Policy::default(),
        }
    }
}

impl ConfidenceConfig {
    pub fn preset(&self) -> Result<WeightPreset, ConfidenceError> {
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.preset.as_deref())
        {
            Some(name) => WeightPreset::parse(name).ok_or_else(|| {
                ConfidenceError::ConfigParse(format!("unsupported scoring.preset: {name}"))
            }),
            None => Ok(WeightPreset::default()),
        }
    }

    // explicit [scoring.weights] win over the preset
    pub fn weights(&self) -> Result<AlgorithmWeights, ConfidenceError> {
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(weights) => Ok(AlgorithmWeights {
                privileged_events: weights.privileged_events,
                activity_patterns: weights.activity_patterns,
                temporal_consistency: weights.temporal_consistency,
            }),
            None => Ok(self.preset()?.weights()),
        }
    }

    pub fn cap(&self) -> Score {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.cap)
            .unwrap_or(DEFAULT_CAP)
    }

    pub fn window_days(&self) -> u32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.window_days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    pub fn policy(&self) -> Policy {
        let defaults = Policy::default();
        let Some(policy) = &self.policy else {
            return defaults;
        };

        let bands = match &policy.bands {
            Some(bands) => BandBounds {
                critical: bands.critical.unwrap_or(defaults.bands.critical),
                low: bands.low.unwrap_or(defaults.bands.low),
                medium: bands.medium.unwrap_or(defaults.bands.medium),
            },
            None => defaults.bands,
        };
        let issues = match &policy.issues {
            Some(issues) => IssueThresholds {
                min_external_contributors: issues
                    .min_external_contributors
                    .unwrap_or(defaults.issues.min_external_contributors),
                low_confidence_share: issues
                    .low_confidence_share
                    .unwrap_or(defaults.issues.low_confidence_share),
                stale_share: issues.stale_share.unwrap_or(defaults.issues.stale_share),
                low_diversity_average: issues
                    .low_diversity_average
                    .unwrap_or(defaults.issues.low_diversity_average),
                sporadic_consistency_average: issues
                    .sporadic_consistency_average
                    .unwrap_or(defaults.issues.sporadic_consistency_average),
            },
            None => defaults.issues,
        };

        Policy {
            bands,
            low_confidence_threshold: policy
                .low_confidence_threshold
                .unwrap_or(defaults.low_confidence_threshold),
            worst_repository_limit: policy
                .worst_repository_limit
                .unwrap_or(defaults.worst_repository_limit),
            issues,
        }
    }

    pub fn validate(&self) -> Result<(), ConfidenceError> {
        validate_weights(&self.weights()?)?;

        let cap = self.cap();
        if !(cap > 0.0 && cap <= 1.0) {
            return Err(ConfidenceError::ConfigParse(format!(
                "scoring.cap must be within (0.0, 1.0] (found {cap})"
            )));
        }
        if self.window_days() == 0 {
            return Err(ConfidenceError::ConfigParse(
                "scoring.window_days must be greater than 0".to_string(),
            ));
        }

        let policy = self.policy();
        let bands = policy.bands;
        if !(bands.critical > 0.0 && bands.critical < bands.low && bands.low < bands.medium) {
            return Err(ConfidenceError::ConfigParse(
                "policy.bands must be strictly increasing: 0 < critical < low < medium"
                    .to_string(),
            ));
        }
        if bands.medium > cap {
            return Err(ConfidenceError::ConfigParse(format!(
                "policy.bands.medium ({}) cannot exceed scoring.cap ({cap})",
                bands.medium
            )));
        }
        if !(0.0..=cap).contains(&policy.low_confidence_threshold) {
            return Err(ConfidenceError::ConfigParse(
                "policy.low_confidence_threshold must be between 0.0 and scoring.cap"
                    .to_string(),
            ));
        }
        if policy.worst_repository_limit == 0 {
            return Err(ConfidenceError::ConfigParse(
                "policy.worst_repository_limit must be greater than 0".to_string(),
            ));
        }
        for (name, value) in [
            ("low_confidence_share", policy.issues.low_confidence_share),
            ("stale_share", policy.issues.stale_share),
            ("low_diversity_average", policy.issues.low_diversity_average),
            (
                "sporadic_consistency_average",
                policy.issues.sporadic_consistency_average,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfidenceError::ConfigParse(format!(
                    "policy.issues.{name} must be between 0.0 and 1.0"
                )));
            }
        }

        Ok(())
    }

    pub fn settings(&self) -> Result<EngineSettings, ConfidenceError> {
        self.validate()?;
        Ok(EngineSettings {
            weights: self.weights()?,
            cap: self.cap(),
            window_days: self.window_days(),
            policy: self.policy(),
        })
    }
}

pub fn validate_weights(weights: &AlgorithmWeights) -> Result<(), ConfidenceError> {
    if weights
        .as_array()
        .iter()
        .any(|weight| !(0.0..=1.0).contains(weight))
    {
        return Err(ConfidenceError::InvalidWeights(
            "scoring.weights values must be between 0.0 and 1.0".to_string(),
        ));
    }
    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfidenceError::InvalidWeights(format!(
            "scoring.weights must sum to 1.0 (found {sum:.3})"
        )));
    }
    Ok(())
}
