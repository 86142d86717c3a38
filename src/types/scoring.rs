use serde::{Deserialize, Serialize};

pub type Score = f64;

pub const DEFAULT_CAP: Score = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    #[default]
    Live,
    Explainer,
}

impl WeightPreset {
    pub fn weights(self) -> AlgorithmWeights {
        match self {
            WeightPreset::Live => AlgorithmWeights::LIVE,
            WeightPreset::Explainer => AlgorithmWeights::EXPLAINER,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Some(WeightPreset::Live),
            "explainer" => Some(WeightPreset::Explainer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmWeights {
    pub privileged_events: Score,
    pub activity_patterns: Score,
    pub temporal_consistency: Score,
}

impl AlgorithmWeights {
    pub const LIVE: AlgorithmWeights = AlgorithmWeights {
        privileged_events: 0.40,
        activity_patterns: 0.35,
        temporal_consistency: 0.25,
    };

    pub const EXPLAINER: AlgorithmWeights = AlgorithmWeights {
        privileged_events: 0.40,
        activity_patterns: 0.40,
        temporal_consistency: 0.20,
    };

    pub fn sum(&self) -> Score {
        self.privileged_events + self.activity_patterns + self.temporal_consistency
    }

    pub fn as_array(&self) -> [Score; 3] {
        [
            self.privileged_events,
            self.activity_patterns,
            self.temporal_consistency,
        ]
    }
}

impl Default for AlgorithmWeights {
    fn default() -> Self {
        Self::LIVE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ComponentScores {
    pub privileged_events: Score,
    pub activity_patterns: Score,
    pub temporal_consistency: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreFactors {
    pub privileged_ratio: Score,
    pub privileged_boost: Score,
    pub event_diversity: Score,
    pub method_diversity: Score,
    pub activity_volume: Score,
    pub recency: Score,
    pub consistency_ratio: Score,
    pub consistency: Score,
    pub longevity: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ConfidenceScore {
    pub overall: Score,
    pub raw_overall: Score,
    pub components: ComponentScores,
    pub factors: ScoreFactors,
}

impl ConfidenceScore {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_capped(&self) -> bool {
        self.raw_overall > self.overall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_sum_to_one() {
        assert!((AlgorithmWeights::LIVE.sum() - 1.0).abs() < 1e-9);
        assert!((AlgorithmWeights::EXPLAINER.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn preset_parse_is_case_insensitive() {
        assert_eq!(WeightPreset::parse("Explainer"), Some(WeightPreset::Explainer));
        assert_eq!(WeightPreset::parse(" live "), Some(WeightPreset::Live));
        assert_eq!(WeightPreset::parse("legacy"), None);
    }

    #[test]
    fn default_preset_is_live() {
        assert_eq!(WeightPreset::default().weights(), AlgorithmWeights::LIVE);
    }
}
