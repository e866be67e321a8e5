use thiserror::Error;

/// Outcome of a failed call to the analysis service. Exactly one of these is
/// produced per failed batch; no partial result set accompanies it.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("could not decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Please enter at least one URL.")]
    EmptyInput,

    #[error("an analysis is already in progress")]
    Busy,

    #[error("no detail row {0}")]
    UnknownRow(usize),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
