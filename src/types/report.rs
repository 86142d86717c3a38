use crate::interpret::Band;
use crate::types::scoring::{AlgorithmWeights, ConfidenceScore, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Maintainer,
    #[default]
    Contributor,
}

impl Role {
    pub fn is_maintainer(self) -> bool {
        matches!(self, Role::Owner | Role::Maintainer)
    }
}

pub type Metadata = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize)]
pub struct ContributorEntry {
    pub login: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ConfidenceScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Band>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub low_confidence_count: usize,
    pub maintainer_count: usize,
    pub external_contributor_count: usize,
    pub common_issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryConfidenceBreakdown {
    pub repository: String,
    pub overall_average: Score,
    pub band: Band,
    pub window_days: u32,
    pub weights: AlgorithmWeights,
    pub insights: Insights,
    pub contributor_breakdown: Vec<ContributorEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRanking {
    pub repository: String,
    pub overall_average: Score,
    pub band: Band,
    pub external_contributor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossRepositorySummary {
    pub repository_count: usize,
    pub overall_average: Score,
    pub distribution: BTreeMap<Band, usize>,
    pub worst_performing: Vec<RepositoryRanking>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedInput {
    pub path: String,
    pub reason: String,
}
