//! Error types for the movie client.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when talking to the movie service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to connect to movie service: {0}")]
    Connection(#[from] tonic::transport::Error),

    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// The call did not complete within its deadline
    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

impl ClientError {
    /// True for local deadlines and for `DEADLINE_EXCEEDED` statuses
    /// reported by the transport.
    pub fn is_deadline_exceeded(&self) -> bool {
        match self {
            ClientError::DeadlineExceeded(_) => true,
            ClientError::Rpc(status) => status.code() == tonic::Code::DeadlineExceeded,
            _ => false,
        }
    }
}
