use thiserror::Error;

/// Why one page of users could not be loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("could not set up request cancellation: {0}")]
    Setup(String),
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode users from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("request to {url} was aborted")]
    Aborted { url: String },
}

impl FetchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}
