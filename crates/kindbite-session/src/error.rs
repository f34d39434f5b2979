//! Error types for the assistant backend boundary.

/// Error produced by an assistant backend.
///
/// The local rule engine never fails; these variants exist for backends
/// that reach out over the network. The session controller converts any of
/// them into the static fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend could not be reached or failed mid-request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something unusable.
    #[error("invalid backend reply: {0}")]
    InvalidReply(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
