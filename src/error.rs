use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfidenceError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("no scored contributors for repository: {repository}")]
    NoData { repository: String },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfidenceError {
    pub fn no_data(repository: impl Into<String>) -> Self {
        Self::NoData {
            repository: repository.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse(_) | Self::ConfigNotFound(_) | Self::InvalidWeights(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConfidenceError>;
