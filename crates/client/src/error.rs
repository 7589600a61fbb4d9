//! Client error types.

use thiserror::Error;

/// Errors raised by the gRPC clients.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error(transparent)]
    Transport(#[from] tonic::transport::Error),

    /// The server answered the call with a non-OK gRPC status.
    #[error(transparent)]
    Status(#[from] tonic::Status),

    #[error(transparent)]
    Decode(#[from] prost::DecodeError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
