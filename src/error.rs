use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildLensError {
    #[error("Invalid source: {0}")]
    Source(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildLensError>;
