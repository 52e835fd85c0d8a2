use thiserror::Error;

/// Errors talking to the remote roster API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response has no {0}")]
    MissingData(&'static str),
}
