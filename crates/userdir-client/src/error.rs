//! Error types for the directory client.

use thiserror::Error;

/// Errors that can occur when using the directory client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to connect to the daemon
    #[error("Connection failed: {0}")]
    Connection(#[from] tonic::transport::Error),

    /// RPC call failed
    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// Server answered without the expected payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// True when the server reported that the requested user does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Rpc(status) if status.code() == tonic::Code::NotFound)
    }
}
