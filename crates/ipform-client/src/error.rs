use thiserror::Error;

/// Submission failures. The user sees a single generic kind; the two
/// variants only keep the underlying cause for the logs. Non-2xx
/// statuses arrive through the transport error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("solve request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("solve response could not be decoded: {0}")]
    Decode(#[from] std::io::Error),
}
