use crate::error::{ConfidenceError, Result};
use crate::types::report::{Metadata, RejectedInput, Role};
use crate::types::signals::ContributorSignalInput;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySnapshot {
    pub repository: String,
    pub window_days: Option<u32>,
    #[serde(default)]
    pub contributors: Vec<SnapshotMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotMember {
    pub login: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub metadata: Metadata,
    pub signals: Option<ContributorSignalInput>,
}

impl RepositorySnapshot {
    pub fn validate(&self) -> Result<()> {
        if self.repository.trim().is_empty() {
            return Err(ConfidenceError::InvalidInput(
                "snapshot repository must not be empty".to_string(),
            ));
        }
        if self.window_days == Some(0) {
            return Err(ConfidenceError::InvalidInput(format!(
                "{}: window_days must be greater than 0",
                self.repository
            )));
        }
        if let Some(member) = self
            .contributors
            .iter()
            .find(|member| !member.role.is_maintainer() && member.signals.is_none())
        {
            return Err(ConfidenceError::InvalidInput(format!(
                "{}: contributor {} has no signals",
                self.repository, member.login
            )));
        }
        Ok(())
    }
}

pub fn load_snapshot(path: &Path) -> Result<RepositorySnapshot> {
    if !path.exists() {
        return Err(ConfidenceError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let snapshot: RepositorySnapshot = serde_json::from_str(&content).map_err(|e| {
        ConfidenceError::InvalidInput(format!("{}: {}", path.display(), e))
    })?;
    snapshot.validate()?;
    Ok(snapshot)
}

pub fn load_snapshots(paths: &[PathBuf]) -> (Vec<RepositorySnapshot>, Vec<RejectedInput>) {
    let mut snapshots = Vec::with_capacity(paths.len());
    let mut rejected = Vec::new();
    for path in paths {
        match load_snapshot(path) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "rejecting snapshot");
                rejected.push(RejectedInput {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    (snapshots, rejected)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignalFile {
    Many(Vec<ContributorSignalInput>),
    One(ContributorSignalInput),
}

pub fn load_signal_records(path: &Path) -> Result<Vec<ContributorSignalInput>> {
    if !path.exists() {
        return Err(ConfidenceError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let parsed: SignalFile = serde_json::from_str(&content).map_err(|e| {
        ConfidenceError::InvalidInput(format!("{}: {}", path.display(), e))
    })?;
    Ok(match parsed {
        SignalFile::Many(records) => records,
        SignalFile::One(record) => vec![record],
    })
}

pub fn discover_snapshots(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConfidenceError::PathNotFound(root.display().to_string()));
    }
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}
