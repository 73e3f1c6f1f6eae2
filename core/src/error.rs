//! Error types for the dog API client.
//!
//! # Design
//! Each stage of a call fails with its own variant: the transport, reading
//! the body, decoding the JSON envelope, and the service's own verdict.
//! `Api` displays the service message verbatim so callers can surface it
//! unchanged. `EmptySubBreeds` is the one failure the client raises on an
//! otherwise successful reply.

use thiserror::Error;

/// Boxed underlying cause for transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `DogClient` operations and parse methods.
#[derive(Debug, Error)]
pub enum DogApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A response arrived but its body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Read(#[source] BoxError),

    /// The body is not JSON, or does not match the expected envelope shape.
    #[error("something went wrong while reading json: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope's `status` was not `"success"`.
    #[error("{0}")]
    Api(String),

    /// The breed exists but has no sub-breeds.
    #[error("the breed does not have sub-breeds")]
    EmptySubBreeds,
}

/// Result type alias for dog API operations.
pub type Result<T> = std::result::Result<T, DogApiError>;
