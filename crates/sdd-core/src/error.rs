use thiserror::Error;

#[derive(Debug, Error)]
pub enum SddError {
    #[error("no input: pass --file, --text, or pipe text on stdin")]
    NoInput,

    #[error("file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("invalid keyword pattern '{pattern}' for '{label}': {source}")]
    InvalidPattern {
        label: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("catalog entry '{0}' declared more than once")]
    DuplicateCatalogEntry(String),

    #[error("catalog is missing an entry for '{0}'")]
    MissingCatalogEntry(String),

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("invalid department: {0}")]
    InvalidDepartment(String),

    #[error("invalid artifact kind '{0}': expected spec, plan, or tasks")]
    InvalidArtifactKind(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SddError>;
