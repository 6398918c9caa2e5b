//! # Protocol Error Types
//!
//! Every variant here ends up as the `\0{}` sentinel on the wire; none of
//! them stops the session loop.

use thiserror::Error;

use coin_core::ValidationError;

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Failure to understand a request line or a response body.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The line is neither `count,amount` nor a JSON object.
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// The count or amount was rejected at the boundary.
    #[error("Invalid request: {0}")]
    Invalid(#[from] ValidationError),

    /// JSON body failed to parse.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts() {
        let err: ProtocolError = ValidationError::Required {
            field: "count".to_string(),
        }
        .into();
        assert!(matches!(err, ProtocolError::Invalid(_)));
        assert_eq!(err.to_string(), "Invalid request: count is required");
    }
}
