use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("config: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("config: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
