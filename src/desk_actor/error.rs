//! Error types for the order desk.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order desk operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order is not waiting at the desk (never opened, or already delivered).
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
