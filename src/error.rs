use std::path::PathBuf;
use thiserror::Error;

/// afm-tools統一エラー型
#[derive(Debug, Error)]
pub enum AfmError {
    #[error("Config {kind} not found: {path}. Run with --init-postman first")]
    ConfigMissing { kind: &'static str, path: PathBuf },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("API key not provided")]
    Auth,

    #[error("Failed to {action}: {status}")]
    Http { action: &'static str, status: String },

    #[error("Failed to decode {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} {name} not found")]
    NotFound { kind: &'static str, name: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Cannot determine home directory")]
    HomeDir,
}

pub type Result<T> = std::result::Result<T, AfmError>;

impl AfmError {
    /// HTTPステータス由来のエラーを作成
    pub fn http(action: &'static str, status: reqwest::StatusCode) -> Self {
        AfmError::Http {
            action,
            status: status.to_string(),
        }
    }

    /// コレクションが見つからないエラーを作成
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        AfmError::NotFound {
            kind: "Collection",
            name: name.into(),
        }
    }
}
