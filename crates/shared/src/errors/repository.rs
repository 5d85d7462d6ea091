use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    #[error("Pagination stalled after {pages} page(s): upstream is not advancing")]
    PaginationStalled { pages: u32 },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Custom error: {0}")]
    Custom(String),
}
