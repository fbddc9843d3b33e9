use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Too few control points: need at least {required}, got {got}")]
    TooFewPoints { required: usize, got: usize },

    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    #[error("Non-finite value: {0}")]
    NonFinite(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;
