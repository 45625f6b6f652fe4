//! Error taxonomy for backend calls.

use thiserror::Error;

use crate::upload::UploadRejection;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The body arrived but did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation refused the file; nothing was sent.
    #[error("upload rejected: {0}")]
    Rejected(UploadRejection),

    #[error("image id is empty")]
    MissingImageId,

    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// True for failures that happened before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected(_) | ApiError::MissingImageId | ApiError::InvalidUrl(_)
        )
    }
}

impl From<UploadRejection> for ApiError {
    fn from(rejection: UploadRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}
