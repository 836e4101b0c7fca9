use thiserror::Error;

#[derive(Debug, Error)]
pub enum PercolationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML configuration: {source}")]
    Yaml {
        #[from]
        source: serde_yml::Error,
    },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
