use thiserror::Error;

/// Failure raised by the transport client.
///
/// The store surfaces a single textual error to its consumers, so the
/// variants here exist to capture the source faithfully, not to drive
/// different recovery paths. They all collapse to their `Display` text at
/// the repository boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, or response-decode failure from the HTTP client.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// Transport-level failure with no HTTP exchange at all.
    #[error("{0}")]
    Connection(String),
}

pub type TransportResult<T> = Result<T, TransportError>;
